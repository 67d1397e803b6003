//! cpu load, from the one-minute load average in `/proc/loadavg`.

use {
    crate::{
        error::ReadError,
        source::{FileSource, Source},
    },
    std::{io::Read, num::NonZeroU32},
};

/// reads the load average and scales it to the number of logical cores.
pub struct LoadAvg<S = FileSource> {
    source: S,
    cores: NonZeroU32,
}

// === impl LoadAvg ===

impl LoadAvg {
    pub const PATH: &str = "/proc/loadavg";

    /// the number of logical cores on this machine, falling back to one.
    pub fn available_cores() -> NonZeroU32 {
        std::thread::available_parallelism()
            .ok()
            .and_then(|n| u32::try_from(n.get()).ok())
            .and_then(NonZeroU32::new)
            .unwrap_or(NonZeroU32::MIN)
    }
}

impl<S: Source> LoadAvg<S> {
    pub fn new(source: S, cores: NonZeroU32) -> Self {
        Self { source, cores }
    }

    /// returns the one-minute load as a percentage of all cores, truncated.
    ///
    /// a fully loaded machine reads 100; an overloaded one reads more.
    pub fn read(&self) -> Result<i64, ReadError> {
        let Self { source, cores } = self;
        let path = source.label();

        let mut content = String::new();
        source
            .open()
            .and_then(|mut reader| reader.read_to_string(&mut content))
            .map_err(ReadError::unavailable(&path))?;

        // format: "0.35 0.28 0.22 1/234 5678"
        let load = content
            .split_whitespace()
            .next()
            .ok_or_else(|| ReadError::parse(&path, "empty load average"))?
            .parse::<f64>()
            .map_err(|error| ReadError::parse(&path, error))?;

        Ok((load * 100.0 / f64::from(cores.get())) as i64)
    }
}
