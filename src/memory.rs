//! memory use, from `/proc/meminfo`.

use {
    crate::{
        error::ReadError,
        source::{FileSource, Source},
    },
    std::io::{BufRead, BufReader},
};

/// reads the share of memory used by applications.
///
/// buffers and the page cache are counted as free.
pub struct MemInfo<S = FileSource> {
    source: S,
}

/// the fields a reading needs, as bits of a completion mask.
mod field {
    pub const TOTAL: u8 = 1 << 0;
    pub const FREE: u8 = 1 << 1;
    pub const BUFFERS: u8 = 1 << 2;
    pub const CACHED: u8 = 1 << 3;
    pub const ALL: u8 = TOTAL | FREE | BUFFERS | CACHED;
}

// === impl MemInfo ===

impl MemInfo {
    pub const PATH: &str = "/proc/meminfo";
}

impl<S: Source> MemInfo<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// returns `(total - free - buffers - cached) * 100 / total`, truncated.
    ///
    /// scanning stops once all four fields have been seen. every line before that point must
    /// have the shape `<label> <integer>`.
    pub fn read(&self) -> Result<i64, ReadError> {
        let Self { source } = self;
        let path = source.label();

        let reader = source.open().map_err(ReadError::unavailable(&path))?;

        let mut seen = 0;
        let (mut total, mut free, mut buffers, mut cached) = (0_i64, 0_i64, 0_i64, 0_i64);
        for line in BufReader::new(reader).lines() {
            let line = line.map_err(ReadError::unavailable(&path))?;
            let (label, value) = Self::parse_line(&line).ok_or_else(|| {
                ReadError::parse(&path, format!("expected `<label> <integer>`, got {line:?}"))
            })?;

            match label {
                "MemTotal:" => {
                    total = value;
                    seen |= field::TOTAL;
                }
                "MemFree:" => {
                    free = value;
                    seen |= field::FREE;
                }
                "Buffers:" => {
                    buffers = value;
                    seen |= field::BUFFERS;
                }
                "Cached:" => {
                    cached = value;
                    seen |= field::CACHED;
                }
                _ => {}
            }

            if seen == field::ALL {
                break;
            }
        }

        if seen != field::ALL {
            return Err(ReadError::parse(
                &path,
                format!("missing fields (mask {seen:#06b})"),
            ));
        }

        if total == 0 {
            return Err(ReadError::degenerate(&path, "MemTotal is zero"));
        }

        let used = [free, buffers, cached]
            .into_iter()
            .try_fold(total, i64::checked_sub)
            .and_then(|used| used.checked_mul(100))
            .ok_or_else(|| ReadError::degenerate(&path, "memory counters overflow"))?;

        Ok(used / total)
    }

    /// splits `MemFree:  218456 kB` into its label and value. the unit is ignored.
    fn parse_line(line: &str) -> Option<(&str, i64)> {
        let mut tokens = line.split_whitespace();
        let label = tokens.next()?;
        let value = tokens.next()?.parse().ok()?;
        Some((label, value))
    }
}
