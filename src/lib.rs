//! a compact status line for dwm.
//!
//! once a second, network throughput, cpu load, memory use, battery charge, volume, and the time
//! are read, rendered into fixed-width fields, and published as a single line.

use {
    self::{
        config::Appearance,
        sampler::Sampler,
        source::{Clock, SystemClock},
        status::StatusLine,
    },
    chrono::{DateTime, Local},
    std::time::Duration,
};

pub use self::{
    config::{Config, ConfigError},
    error::ReadError,
    format::Markup,
    sink::{RootWindow, Sink, Terminal},
};

pub mod config;
mod error;
mod format;
mod load;
mod memory;
mod net;
mod power;
mod rate;
mod sampler;
mod sink;
mod source;
mod status;
mod volume;

pub struct App<C = SystemClock> {
    sampler: Sampler<C>,
    appearance: Appearance,
}

// === impl App ===

impl App {
    /// initializes a new application.
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> App<C> {
    fn with_clock(config: &Config, clock: C) -> Self {
        Self {
            sampler: Sampler::with_clock(config, clock),
            appearance: config.display.clone(),
        }
    }

    /// samples every metric and renders the status line.
    pub fn tick(&mut self) -> String {
        let Self {
            sampler,
            appearance,
        } = self;

        let sample = sampler.sample();
        StatusLine::new(&sample, appearance).to_string()
    }

    /// renders one status line and hands it to `sink`.
    pub fn publish(&mut self, sink: &mut impl Sink) {
        let line = self.tick();
        sink.publish(&line);
    }

    /// runs the application, publishing at the start of every second.
    pub fn run(mut self, sink: &mut impl Sink) -> ! {
        tracing::info!("publishing status every second");

        loop {
            self.publish(sink);
            let now = self.sampler.clock().now();
            std::thread::sleep(until_next_second(now));
        }
    }
}

/// the time left until the next whole second.
fn until_next_second(now: DateTime<Local>) -> Duration {
    const SECOND: Duration = Duration::from_secs(1);

    // a leap second reports more than a billion nanoseconds.
    let elapsed = Duration::from_nanos(now.timestamp_subsec_nanos().into());
    SECOND.saturating_sub(elapsed)
}
