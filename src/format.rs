//! fixed-width rendering of rates and percentages.
//!
//! every value renders to the same number of visible columns whether it is small, large, or out
//! of range, so the status line does not jitter from one tick to the next.

use {
    crossterm::{
        Command,
        style::{Color, ResetColor, SetForegroundColor},
    },
    serde::Deserialize,
    std::borrow::Cow,
};

#[cfg(test)]
mod tests;

const KIB: i64 = 1024;
const MIB: i64 = 1024 * KIB;

/// how strongly a value is highlighted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Emphasis {
    Reset,
    Good,
    Warning,
    Urgent,
}

/// how emphasis is written into the status line.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Markup {
    /// dwm status-color control bytes.
    #[default]
    Dwm,
    /// ansi color escapes, for a terminal.
    Terminal,
    /// no markup at all.
    Plain,
}

/// renders values with a given [`Markup`].
#[derive(Clone, Copy, Debug)]
pub struct Painter {
    markup: Markup,
}

// === impl Markup ===

impl Markup {
    pub fn escape(self, emphasis: Emphasis) -> Cow<'static, str> {
        match self {
            Self::Dwm => Cow::Borrowed(match emphasis {
                Emphasis::Reset => "\u{1}",
                Emphasis::Good => "\u{2}",
                Emphasis::Warning => "\u{3}",
                Emphasis::Urgent => "\u{6}",
            }),
            Self::Terminal => Cow::Owned(match emphasis {
                Emphasis::Reset => ansi(ResetColor),
                Emphasis::Good => ansi(SetForegroundColor(Color::Green)),
                Emphasis::Warning => ansi(SetForegroundColor(Color::Yellow)),
                Emphasis::Urgent => ansi(SetForegroundColor(Color::Red)),
            }),
            Self::Plain => Cow::Borrowed(""),
        }
    }
}

fn ansi(command: impl Command) -> String {
    let mut escape = String::new();
    match command.write_ansi(&mut escape) {
        Ok(()) => escape,
        Err(_) => String::new(),
    }
}

// === impl Painter ===

impl Painter {
    pub fn new(markup: Markup) -> Self {
        Self { markup }
    }

    pub fn escape(&self, emphasis: Emphasis) -> Cow<'static, str> {
        self.markup.escape(emphasis)
    }

    /// renders a byte rate in four columns, followed by `icon`.
    ///
    /// rates of a thousand units or more move up to the next unit: `B`, `K` (KiB), `M` (MiB).
    /// below ten units a tenth is shown. negative rates, and rates of a thousand MiB/s or more,
    /// render as ` ERR`.
    pub fn rate(&self, icon: &str, rate: i64) -> String {
        if !(0..1000 * MIB).contains(&rate) {
            return self.wide_error(icon);
        }

        let reset = self.escape(Emphasis::Reset);
        let (value, tenth, suffix, icon) = if rate >= 1000 * KIB {
            let good = self.escape(Emphasis::Good);
            let icon = Cow::Owned(format!("{good}{icon}{reset}"));
            (rate / MIB, (rate / KIB / 102) % 10, 'M', icon)
        } else if rate >= 1000 {
            (rate / KIB, (rate / 102) % 10, 'K', Cow::Borrowed(icon))
        } else {
            (rate, 0, 'B', Cow::Borrowed(icon))
        };

        match value {
            100.. => format!("{reset}{value:3}{suffix}{icon}"),
            10.. => format!("{reset} {value:2}{suffix}{icon}"),
            _ => format!("{reset}{value}.{tenth}{suffix}{icon}"),
        }
    }

    /// renders a percentage in three columns, followed by `icon`.
    ///
    /// `urgent` takes precedence over `warn`. values of 1000 or more render as ` HI`, negative
    /// values as `NEG`.
    pub fn percentage(&self, icon: &str, percentage: i64, urgent: bool, warn: bool) -> String {
        let reset = self.escape(Emphasis::Reset);
        let red = self.escape(Emphasis::Urgent);

        if percentage >= 1000 {
            format!(" {red}HI{reset}{icon}")
        } else if percentage < 0 {
            format!("{red}NEG{reset}{icon}")
        } else if urgent {
            format!("{percentage:3}{red}{icon}")
        } else if warn {
            let yellow = self.escape(Emphasis::Warning);
            format!("{percentage:3}{yellow}{icon}")
        } else {
            format!("{percentage:3}{icon}")
        }
    }

    /// a failed reading, in the three columns of a percentage.
    pub fn error(&self, icon: &str) -> String {
        let (red, reset) = (self.escape(Emphasis::Urgent), self.escape(Emphasis::Reset));
        format!("{red}ERR{reset}{icon}")
    }

    /// a failed reading, in the four columns of a rate.
    pub fn wide_error(&self, icon: &str) -> String {
        format!(" {}", self.error(icon))
    }
}
