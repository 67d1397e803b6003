//! assembling readings into the status line.

use {
    crate::{
        config::{Appearance, Icons},
        error::ReadError,
        format::{Emphasis, Painter},
        power::Power,
        rate::Rates,
        sampler::Sample,
        volume::Volume,
    },
    chrono::{DateTime, Local},
    std::{
        borrow::Cow,
        fmt::{self, Display},
    },
};

/// one rendered status line.
///
/// fields are network, cpu, memory, power, volume (when enabled), then the time. every field is
/// preceded by a markup reset and the separator.
pub struct StatusLine {
    reset: Cow<'static, str>,
    separator: String,
    fields: Vec<String>,
}

// === impl StatusLine ===

impl StatusLine {
    pub fn new(sample: &Sample, appearance: &Appearance) -> Self {
        let Sample {
            network,
            load,
            memory,
            power,
            volume,
            time,
        } = sample;
        let Appearance {
            markup: _,
            separator,
            icons,
        } = appearance;
        let painter = Painter::new(appearance.markup());

        let mut fields = vec![
            network_field(&painter, icons, network),
            load_field(&painter, icons, load),
            memory_field(&painter, icons, memory),
            power_field(&painter, icons, power),
        ];
        if let Some(volume) = volume {
            fields.push(volume_field(&painter, icons, volume));
        }
        fields.push(time_field(icons, time));

        Self {
            reset: painter.escape(Emphasis::Reset),
            separator: separator.clone(),
            fields,
        }
    }

    #[cfg(test)]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

impl Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            reset,
            separator,
            fields,
        } = self;

        for field in fields {
            write!(f, "{reset}{separator}{field}")?;
        }

        Ok(())
    }
}

fn network_field(painter: &Painter, icons: &Icons, network: &Result<Rates, ReadError>) -> String {
    match network {
        Ok(Rates { rx, tx }) => format!(
            "{} {}",
            painter.rate(&icons.net_rx, *rx),
            painter.rate(&icons.net_tx, *tx)
        ),
        Err(_) => format!(
            "{} {}",
            painter.wide_error(&icons.net_rx),
            painter.wide_error(&icons.net_tx)
        ),
    }
}

fn load_field(painter: &Painter, icons: &Icons, load: &Result<i64, ReadError>) -> String {
    match *load {
        Ok(p) => painter.percentage(&icons.cpu, p, p >= 100, p >= 70),
        Err(_) => painter.error(&icons.cpu),
    }
}

fn memory_field(painter: &Painter, icons: &Icons, memory: &Result<i64, ReadError>) -> String {
    match *memory {
        Ok(p) => painter.percentage(&icons.memory, p, p >= 95, p >= 70),
        Err(_) => painter.error(&icons.memory),
    }
}

/// the icon shows whether the adapter is plugged in; the charge level never changes it.
fn power_field(painter: &Painter, icons: &Icons, power: &Result<Power, ReadError>) -> String {
    match *power {
        Ok(Power {
            percentage: p,
            plugged,
        }) => {
            let icon = if plugged { &icons.charging } else { &icons.battery };
            painter.percentage(icon, p, p <= 10, p <= 20)
        }
        Err(_) => painter.error(&icons.battery),
    }
}

fn volume_field(painter: &Painter, icons: &Icons, volume: &Result<Volume, ReadError>) -> String {
    match *volume {
        Ok(Volume {
            percentage: p,
            muted,
        }) => {
            let icon = if muted { &icons.muted } else { &icons.volume };
            painter.percentage(icon, p, p > 100, p >= 90)
        }
        Err(_) => painter.error(&icons.volume),
    }
}

/// e.g. `Tue 07 <icon> 13:04:05`.
fn time_field(icons: &Icons, time: &DateTime<Local>) -> String {
    format!(
        "{} {} {}",
        time.format("%a %d"),
        icons.date,
        time.format("%H:%M:%S")
    )
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{config::Config, format::Markup},
        chrono::TimeZone,
        std::io,
    };

    fn appearance(markup: Markup) -> Appearance {
        Appearance {
            markup: Some(markup),
            separator: "|".to_owned(),
            icons: Icons {
                cpu: "c".to_owned(),
                date: "d".to_owned(),
                memory: "m".to_owned(),
                net_rx: "r".to_owned(),
                net_tx: "t".to_owned(),
                battery: "b".to_owned(),
                charging: "B".to_owned(),
                volume: "v".to_owned(),
                muted: "V".to_owned(),
            },
        }
    }

    fn time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 7, 13, 4, 5).single().unwrap()
    }

    fn unavailable() -> ReadError {
        ReadError::Unavailable {
            path: "/proc/net/dev".to_owned(),
            error: io::Error::from(io::ErrorKind::NotFound),
        }
    }

    fn healthy() -> Sample {
        Sample {
            network: Ok(Rates { rx: 1536, tx: 42 }),
            load: Ok(12),
            memory: Ok(40),
            power: Ok(Power {
                percentage: 80,
                plugged: true,
            }),
            volume: Some(Ok(Volume {
                percentage: 75,
                muted: false,
            })),
            time: time(),
        }
    }

    #[test]
    fn healthy_line() {
        let line = StatusLine::new(&healthy(), &appearance(Markup::Plain)).to_string();
        assert_eq!(line, "|1.5Kr  42Bt| 12c| 40m| 80B| 75v|Tue 07 d 13:04:05");
    }

    #[test]
    fn dwm_line_resets_before_every_field() {
        let mut sample = healthy();
        sample.volume = None;
        let line = StatusLine::new(&sample, &appearance(Markup::Dwm)).to_string();
        assert_eq!(
            line,
            "\u{1}|\u{1}1.5Kr \u{1} 42Bt\u{1}| 12c\u{1}| 40m\u{1}| 80B\u{1}|Tue 07 d 13:04:05"
        );
    }

    #[test]
    fn network_failure_keeps_every_field() {
        let mut sample = healthy();
        sample.network = Err(unavailable());
        let status = StatusLine::new(&sample, &appearance(Markup::Plain));

        assert_eq!(status.fields().len(), 6);
        assert_eq!(status.fields()[0], " ERRr  ERRt");
        assert_eq!(
            status.to_string(),
            "| ERRr  ERRt| 12c| 40m| 80B| 75v|Tue 07 d 13:04:05"
        );
    }

    #[test]
    fn every_failure_has_a_marker() {
        let sample = Sample {
            network: Err(unavailable()),
            load: Err(unavailable()),
            memory: Err(unavailable()),
            power: Err(unavailable()),
            volume: Some(Err(unavailable())),
            time: time(),
        };
        let status = StatusLine::new(&sample, &appearance(Markup::Plain));
        assert_eq!(
            status.fields(),
            [" ERRr  ERRt", "ERRc", "ERRm", "ERRb", "ERRv", "Tue 07 d 13:04:05"]
        );
    }

    #[test]
    fn negative_rate_is_an_error_marker() {
        let mut sample = healthy();
        sample.network = Ok(Rates { rx: -10, tx: 0 });
        let status = StatusLine::new(&sample, &appearance(Markup::Plain));
        assert_eq!(status.fields()[0], " ERRr 0.0Bt");
    }

    #[test]
    fn icons_follow_state() {
        let mut sample = healthy();
        sample.power = Ok(Power {
            percentage: 5,
            plugged: false,
        });
        sample.volume = Some(Ok(Volume {
            percentage: 95,
            muted: true,
        }));
        let status = StatusLine::new(&sample, &appearance(Markup::Dwm));
        assert_eq!(status.fields()[3], "  5\u{6}b");
        assert_eq!(status.fields()[4], " 95\u{3}V");
    }

    #[test]
    fn thresholds() {
        let mut sample = healthy();
        sample.load = Ok(100);
        sample.memory = Ok(70);
        sample.power = Ok(Power {
            percentage: 20,
            plugged: true,
        });
        sample.volume = Some(Ok(Volume {
            percentage: 101,
            muted: false,
        }));
        let status = StatusLine::new(&sample, &appearance(Markup::Dwm));
        assert_eq!(status.fields()[1], "100\u{6}c");
        assert_eq!(status.fields()[2], " 70\u{3}m");
        assert_eq!(status.fields()[3], " 20\u{3}B");
        assert_eq!(status.fields()[4], "101\u{6}v");
    }

    #[test]
    fn default_line_has_no_newline() {
        let config = Config::default();
        let line = StatusLine::new(&healthy(), &config.display).to_string();
        assert!(!line.contains('\n'));
    }
}
