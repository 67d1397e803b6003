//! audio volume, from the output of `pactl list sinks`.

use {
    crate::{
        error::ReadError,
        source::{CommandSource, Source},
    },
    regex::Regex,
    std::{
        io::{BufRead, BufReader},
        sync::LazyLock,
    },
};

static UNMUTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[[:blank:]]*Mute: no$").unwrap());
static VOLUME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[[:blank:]]*Volume: ").unwrap());
static CHANNEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([[:digit:]]+)%").unwrap());

/// reads the mean volume over every channel of every sink.
pub struct Mixer<S = CommandSource> {
    source: S,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Volume {
    pub percentage: i64,
    pub muted: bool,
}

/// what a scan of the mixer output found.
#[derive(Debug, Default, Eq, PartialEq)]
struct Scan {
    /// true unless some sink reports `Mute: no`.
    muted: bool,
    /// wide enough that summing any number of `i64` levels cannot overflow.
    sum: i128,
    channels: i128,
}

// === impl Mixer ===

impl Mixer {
    pub const COMMAND: [&str; 3] = ["pactl", "list", "sinks"];
}

impl<S: Source> Mixer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn read(&self) -> Result<Volume, ReadError> {
        let Self { source } = self;
        let path = source.label();

        let reader = source.open().map_err(ReadError::unavailable(&path))?;
        let Scan {
            muted,
            sum,
            channels,
        } = Scan::read(BufReader::new(reader)).map_err(ReadError::unavailable(&path))?;

        if channels == 0 {
            return Err(ReadError::parse(&path, "no channel volumes found"));
        }

        let percentage = i64::try_from(sum / channels)
            .map_err(|_| ReadError::degenerate(&path, "mean volume out of range"))?;

        Ok(Volume { percentage, muted })
    }
}

// === impl Scan ===

impl Scan {
    fn read(reader: impl BufRead) -> std::io::Result<Self> {
        let mut scan = Self {
            muted: true,
            ..Self::default()
        };

        // sink descriptions are not always utf-8; only the mute and volume lines matter.
        for line in reader.split(b'\n') {
            let line = line?;
            let line = String::from_utf8_lossy(&line);
            if UNMUTED.is_match(&line) {
                scan.muted = false;
            }
            if !VOLUME.is_match(&line) {
                continue;
            }
            for level in CHANNEL
                .captures_iter(&line)
                .filter_map(|c| c[1].parse::<i64>().ok())
            {
                scan.sum += i128::from(level);
                scan.channels += 1;
            }
        }

        Ok(scan)
    }
}
