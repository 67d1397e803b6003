//! a compact status line for dwm.

use {
    anyhow::Context,
    clap::Parser,
    statline::{App, Config, Markup, RootWindow, Terminal},
    std::path::PathBuf,
    tracing_subscriber::EnvFilter,
};

#[derive(Parser)]
#[command(name = "statline", about = "a compact status line for dwm", version)]
struct Cli {
    /// path to a toml configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// print the status line to the terminal instead of the x root window.
    ///
    /// colors use ansi escapes unless the config names a markup.
    #[arg(long)]
    stdout: bool,

    /// publish a single status line, then exit.
    #[arg(long)]
    once: bool,

    /// enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };
    let config = if cli.stdout {
        config.with_fallback_markup(Markup::Terminal)
    } else {
        config
    };
    tracing::info!(markup = ?config.display.markup(), "starting");

    let mut app = App::new(&config);
    match (cli.stdout, cli.once) {
        (true, true) => {
            app.publish(&mut Terminal::stdout());
            println!();
            Ok(())
        }
        (false, true) => {
            app.publish(&mut RootWindow);
            Ok(())
        }
        (true, false) => app.run(&mut Terminal::stdout()),
        (false, false) => app.run(&mut RootWindow),
    }
}

/// logs go to stderr, so they never mix with a status line on stdout.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
