//! destinations for the status line.

use {
    crossterm::{QueueableCommand, cursor, style, terminal},
    std::{
        io::{self, Stdout, Write},
        process::Command,
    },
};

/// receives one status line per tick.
///
/// publishing is fire-and-forget: failures are logged, never retried.
pub trait Sink {
    fn publish(&mut self, line: &str);
}

/// sets the name of the x root window, which dwm shows in its bar.
#[derive(Default)]
pub struct RootWindow;

/// redraws the current line of a terminal.
pub struct Terminal<W = Stdout> {
    writer: W,
}

/// keeps every line it is given.
#[cfg(test)]
#[derive(Default)]
pub struct Recorder {
    pub lines: Vec<String>,
}

// === impl RootWindow ===

impl RootWindow {
    const PROGRAM: &str = "xsetroot";
}

impl Sink for RootWindow {
    fn publish(&mut self, line: &str) {
        match Command::new(Self::PROGRAM).arg("-name").arg(line).status() {
            Ok(status) if status.success() => {}
            Ok(status) => tracing::debug!(%status, "{} failed", Self::PROGRAM),
            Err(error) => tracing::debug!(%error, "could not run {}", Self::PROGRAM),
        }
    }
}

// === impl Terminal ===

impl Terminal {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Terminal<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn draw(&mut self, line: &str) -> io::Result<()> {
        let Self { writer } = self;

        writer
            .queue(cursor::MoveToColumn(0))?
            .queue(terminal::Clear(terminal::ClearType::CurrentLine))?
            .queue(style::Print(line))?;

        writer.flush()
    }
}

impl<W: Write> Sink for Terminal<W> {
    fn publish(&mut self, line: &str) {
        if let Err(error) = self.draw(line) {
            tracing::debug!(%error, "could not write to the terminal");
        }
    }
}

// === impl Recorder ===

#[cfg(test)]
impl Sink for Recorder {
    fn publish(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }
}
