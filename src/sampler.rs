use {
    crate::{
        config::Config,
        error::ReadError,
        load::LoadAvg,
        memory::MemInfo,
        net::NetDev,
        power::{Power, PowerSupply},
        rate::{RateTracker, Rates},
        source::{Clock, CommandSource, FileSource, SystemClock},
        volume::{Mixer, Volume},
    },
    chrono::{DateTime, Local},
};

/// queries every metric reader once per tick.
pub struct Sampler<C = SystemClock> {
    net: NetDev,
    load: LoadAvg,
    memory: MemInfo,
    power: PowerSupply,
    /// `None` when the volume column is disabled.
    volume: Option<Mixer>,
    /// network totals from the previous tick.
    rates: RateTracker,
    /// the clock being used to timestamp samples.
    clock: C,
}

/// every reading taken during one tick.
#[derive(Debug)]
pub struct Sample {
    pub network: Result<Rates, ReadError>,
    pub load: Result<i64, ReadError>,
    pub memory: Result<i64, ReadError>,
    pub power: Result<Power, ReadError>,
    pub volume: Option<Result<Volume, ReadError>>,
    pub time: DateTime<Local>,
}

// === impl Sampler ===

impl<C: Clock> Sampler<C> {
    pub fn with_clock(config: &Config, clock: C) -> Self {
        let Config {
            sources,
            network,
            cpu,
            display: _,
        } = config;

        let cores = cpu.cores.unwrap_or_else(LoadAvg::available_cores);

        Self {
            net: NetDev::new(FileSource::new(&sources.net_dev), network.clone()),
            load: LoadAvg::new(FileSource::new(&sources.loadavg), cores),
            memory: MemInfo::new(FileSource::new(&sources.meminfo)),
            power: PowerSupply::new(&sources.power_supply, &sources.ac_adapter),
            volume: CommandSource::new(&sources.volume).map(Mixer::new),
            rates: RateTracker::default(),
            clock,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// reads every metric, in a fixed order: network, cpu, memory, power, volume.
    ///
    /// a failing reader only affects its own field. the network baseline is left alone when
    /// the network read fails.
    pub fn sample(&mut self) -> Sample {
        let Self {
            net,
            load,
            memory,
            power,
            volume,
            rates,
            clock,
        } = self;

        let sample = Sample {
            network: net.read().map(|traffic| rates.update(traffic)),
            load: load.read(),
            memory: memory.read(),
            power: power.read(),
            volume: volume.as_ref().map(Mixer::read),
            time: clock.now(),
        };
        sample.trace();

        sample
    }
}

// === impl Sample ===

impl Sample {
    fn trace(&self) {
        let Self {
            network,
            load,
            memory,
            power,
            volume,
            time: _,
        } = self;

        let failures = [
            ("network", network.as_ref().err()),
            ("cpu", load.as_ref().err()),
            ("memory", memory.as_ref().err()),
            ("power", power.as_ref().err()),
            ("volume", volume.as_ref().and_then(|v| v.as_ref().err())),
        ];

        for (metric, error) in failures {
            if let Some(error) = error {
                tracing::debug!(metric, %error, "reading failed");
            }
        }
    }
}
