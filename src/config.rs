//! configuration, loaded from a toml file.
//!
//! every field has a default, so an empty file is a valid configuration.
//!
//! ```toml
//! [sources]
//! power_supply = "/sys/class/power_supply"
//! ac_adapter = "ADP1"
//! volume = ["pactl", "list", "sinks"]
//!
//! [network]
//! allow = ["enp", "wlp"]
//! deny = ["lo"]
//!
//! [display]
//! markup = "dwm"
//! separator = " "
//! ```

use {
    crate::{
        format::Markup,
        load::LoadAvg,
        memory::MemInfo,
        net::{InterfaceFilter, NetDev},
        power::PowerSupply,
        volume::Mixer,
    },
    serde::Deserialize,
    std::{
        io,
        num::NonZeroU32,
        path::{Path, PathBuf},
    },
};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub sources: Sources,
    pub network: InterfaceFilter,
    pub cpu: Cpu,
    pub display: Appearance,
}

/// where each metric is read from.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Sources {
    pub net_dev: PathBuf,
    pub loadavg: PathBuf,
    pub meminfo: PathBuf,
    pub power_supply: PathBuf,
    pub ac_adapter: String,
    /// the mixer query command. an empty list drops the volume column.
    pub volume: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Cpu {
    /// overrides the detected number of logical cores.
    pub cores: Option<NonZeroU32>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Appearance {
    /// `None` leaves the choice to the sink: dwm markup for the root window, ansi for a terminal.
    pub markup: Option<Markup>,
    /// placed before every field.
    pub separator: String,
    pub icons: Icons,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Icons {
    pub cpu: String,
    pub date: String,
    pub memory: String,
    pub net_rx: String,
    pub net_tx: String,
    pub battery: String,
    pub charging: String,
    pub volume: String,
    pub muted: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

// === impl Config ===

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    /// uses `markup` unless the configuration names one.
    pub fn with_fallback_markup(mut self, markup: Markup) -> Self {
        self.display.markup.get_or_insert(markup);
        self
    }
}

// === impl Sources ===

impl Default for Sources {
    fn default() -> Self {
        Self {
            net_dev: NetDev::PATH.into(),
            loadavg: LoadAvg::PATH.into(),
            meminfo: MemInfo::PATH.into(),
            power_supply: PowerSupply::PATH.into(),
            ac_adapter: "AC".to_owned(),
            volume: Mixer::COMMAND.map(String::from).to_vec(),
        }
    }
}

// === impl Appearance ===

impl Appearance {
    pub fn markup(&self) -> Markup {
        self.markup.unwrap_or_default()
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            markup: None,
            separator: " ".to_owned(),
            icons: Icons::default(),
        }
    }
}

// === impl Icons ===

/// glyphs from the material design icons font.
impl Default for Icons {
    fn default() -> Self {
        Self {
            cpu: "\u{f35b}".to_owned(),
            date: "\u{f150}".to_owned(),
            memory: "\u{f193}".to_owned(),
            net_rx: "\u{f046}".to_owned(),
            net_tx: "\u{f05e}".to_owned(),
            battery: "\u{f080}".to_owned(),
            charging: "\u{f084}".to_owned(),
            volume: "\u{f57e}".to_owned(),
            muted: "\u{f581}".to_owned(),
        }
    }
}
