//! network traffic, from the interface counters in `/proc/net/dev`.

use {
    crate::{
        error::ReadError,
        source::{FileSource, Source},
    },
    serde::Deserialize,
    std::{
        io::{BufRead, BufReader},
        num::ParseIntError,
        ops::Not,
        str::FromStr,
    },
};


/// reads interface traffic counters from `/proc/net/dev`.
pub struct NetDev<S = FileSource> {
    source: S,
    filter: InterfaceFilter,
}

/// cumulative bytes moved by the accepted interfaces since boot.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Traffic {
    pub rx: u64,
    pub tx: u64,
}

/// decides which interfaces count toward the totals, by name prefix.
///
/// an empty allow-list accepts every name that is not denied.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct InterfaceFilter {
    pub allow: Vec<String>,
    pub deny: Vec<String>,
}

/// a row in the `/proc/net/dev` table.
///
/// see `proc_net(5)` for more information.
#[derive(Debug, Eq, PartialEq)]
pub struct Interface {
    name: String,
    /// bytes received.
    rx: u64,
    /// bytes transmitted.
    tx: u64,
}

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum InterfaceParseError {
    #[error("missing interface name")]
    MissingName,
    #[error("expected at least 9 counters, found {0}")]
    TooFewCounters(usize),
    #[error("invalid counter: {0}")]
    Counter(#[from] ParseIntError),
}

// === impl NetDev ===

impl NetDev {
    pub const PATH: &str = "/proc/net/dev";
}

impl<S: Source> NetDev<S> {
    /// the table starts with two lines of column headings.
    const HEADER_LINES: usize = 2;

    pub fn new(source: S, filter: InterfaceFilter) -> Self {
        Self { source, filter }
    }

    /// sums the counters of every accepted interface.
    ///
    /// a single malformed row fails the whole read; no partial totals are returned.
    pub fn read(&self) -> Result<Traffic, ReadError> {
        let Self { source, filter } = self;
        let path = source.label();

        let reader = source.open().map_err(ReadError::unavailable(&path))?;

        let mut traffic = Traffic::default();
        // interface names are arbitrary bytes; a mangled name still reaches the filter.
        for line in BufReader::new(reader).split(b'\n').skip(Self::HEADER_LINES) {
            let line = line.map_err(ReadError::unavailable(&path))?;
            let Interface { name, rx, tx } = String::from_utf8_lossy(&line)
                .parse::<Interface>()
                .map_err(|error| ReadError::parse(&path, error))?;

            if filter.accepts(&name).not() {
                continue;
            }

            traffic.rx = traffic.rx.saturating_add(rx);
            traffic.tx = traffic.tx.saturating_add(tx);
        }

        Ok(traffic)
    }
}

// === impl InterfaceFilter ===

impl InterfaceFilter {
    pub fn accepts(&self, name: &str) -> bool {
        let Self { allow, deny } = self;
        let matches = |prefixes: &[String]| prefixes.iter().any(|p| name.starts_with(p.as_str()));

        (allow.is_empty() || matches(allow)) && matches(deny).not()
    }
}

impl Default for InterfaceFilter {
    fn default() -> Self {
        let owned = |prefixes: &[&str]| prefixes.iter().map(|p| p.to_string()).collect();

        Self {
            allow: owned(&["en", "eth", "wl", "ww"]),
            deny: owned(&["lo", "tun", "tap", "veth", "docker", "virbr", "br-"]),
        }
    }
}

// === impl Interface ===

impl FromStr for Interface {
    type Err = InterfaceParseError;
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (name, counters) = line
            .split_once(':')
            .ok_or(InterfaceParseError::MissingName)?;

        let name = name.trim();
        if name.is_empty() {
            return Err(InterfaceParseError::MissingName);
        }

        let counters = counters
            .split_whitespace()
            .map(str::parse::<u64>)
            .collect::<Result<Vec<_>, _>>()?;

        // receive columns come first, the transmit columns start at the ninth.
        let [rx, _, _, _, _, _, _, _, tx, ..] = counters.as_slice() else {
            return Err(InterfaceParseError::TooFewCounters(counters.len()));
        };

        Ok(Self {
            name: name.to_owned(),
            rx: *rx,
            tx: *tx,
        })
    }
}
