//! battery charge and ac adapter state, from `/sys/class/power_supply`.

use {
    crate::error::ReadError,
    std::{
        fs,
        path::{Path, PathBuf},
    },
};

/// reads the combined charge of every battery.
pub struct PowerSupply {
    /// the power supply class directory.
    dir: PathBuf,
    /// the name of the ac adapter entry, e.g. `AC` or `ADP1`.
    adapter: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Power {
    /// combined charge of all batteries.
    pub percentage: i64,
    /// whether the ac adapter is online.
    pub plugged: bool,
}

// === impl PowerSupply ===

impl PowerSupply {
    pub const PATH: &str = "/sys/class/power_supply";

    /// batteries are the entries named with this prefix.
    const BATTERY_PREFIX: &str = "BAT";

    /// batteries report either energy (µWh) or charge (µAh), never both.
    const SCHEMES: [&str; 2] = ["energy", "charge"];

    pub fn new(dir: impl Into<PathBuf>, adapter: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            adapter: adapter.into(),
        }
    }

    pub fn read(&self) -> Result<Power, ReadError> {
        let Self { dir, adapter } = self;

        let online = dir.join(adapter).join("online");
        let plugged = fs::read_to_string(&online)
            .map_err(ReadError::unavailable(online.display().to_string()))?
            .trim()
            == "1";

        let label = dir.display().to_string();
        let entries = fs::read_dir(dir).map_err(ReadError::unavailable(&label))?;

        let overflow = || ReadError::degenerate(&label, "battery capacities overflow");

        let (mut full, mut now) = (0_i64, 0_i64);
        for entry in entries {
            let entry = entry.map_err(ReadError::unavailable(&label))?;
            let is_battery = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with(Self::BATTERY_PREFIX));
            if !is_battery {
                continue;
            }

            let battery = entry.path();
            full = full
                .checked_add(Self::capacity(&battery, "full"))
                .ok_or_else(overflow)?;
            now = now
                .checked_add(Self::capacity(&battery, "now"))
                .ok_or_else(overflow)?;
        }

        if full == 0 {
            return Err(ReadError::degenerate(
                &label,
                "no battery reports a full capacity",
            ));
        }

        let percentage = now.checked_mul(100).ok_or_else(overflow)? / full;

        Ok(Power {
            percentage,
            plugged,
        })
    }

    /// reads `<scheme>_<field>` for the first scheme the battery exposes.
    ///
    /// a value that is missing or unreadable counts as zero.
    fn capacity(battery: &Path, field: &str) -> i64 {
        Self::SCHEMES
            .iter()
            .find_map(|scheme| fs::read_to_string(battery.join(format!("{scheme}_{field}"))).ok())
            .and_then(|content| content.trim().parse().ok())
            .unwrap_or(0)
    }
}
