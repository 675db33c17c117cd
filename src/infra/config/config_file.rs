use serde::{Deserialize, Serialize};

use pinwheel_app::config::{Config, DemoConfig, IndicatorConfig};
use pinwheel_domain::Rgba;

pub const CURRENT_VERSION: u32 = 1;

/// On-disk layout of `config.toml`. Every field is optional.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default = "current_version")]
    pub version: u32,
    #[serde(default)]
    pub indicator: IndicatorSection,
    #[serde(default)]
    pub demo: DemoSection,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndicatorSection {
    pub delay_ms: u32,
    pub displayed_when_stopped: bool,
    pub color: Rgba,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoSection {
    pub size: u32,
    pub autostart: bool,
    pub background: Rgba,
}

fn current_version() -> u32 {
    CURRENT_VERSION
}

impl Default for IndicatorSection {
    fn default() -> Self {
        let defaults = IndicatorConfig::default();
        Self {
            delay_ms: defaults.delay_ms,
            displayed_when_stopped: defaults.displayed_when_stopped,
            color: defaults.color,
        }
    }
}

impl Default for DemoSection {
    fn default() -> Self {
        let defaults = DemoConfig::default();
        Self {
            size: defaults.size,
            autostart: defaults.autostart,
            background: defaults.background,
        }
    }
}

impl ConfigFile {
    pub fn from_config(config: &Config) -> Self {
        Self {
            version: CURRENT_VERSION,
            indicator: IndicatorSection {
                delay_ms: config.indicator.delay_ms,
                displayed_when_stopped: config.indicator.displayed_when_stopped,
                color: config.indicator.color,
            },
            demo: DemoSection {
                size: config.demo.size,
                autostart: config.demo.autostart,
                background: config.demo.background,
            },
        }
    }

    pub fn to_config(&self) -> Config {
        Config {
            indicator: IndicatorConfig {
                delay_ms: self.indicator.delay_ms,
                displayed_when_stopped: self.indicator.displayed_when_stopped,
                color: self.indicator.color,
            },
            demo: DemoConfig {
                size: self.demo.size,
                autostart: self.demo.autostart,
                background: self.demo.background,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty_file_yields_defaults() {
        let file: ConfigFile = toml::from_str("").unwrap();

        assert_eq!(file.version, CURRENT_VERSION);
        assert_eq!(file.to_config(), Config::default());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let file: ConfigFile = toml::from_str(
            r##"
            [indicator]
            color = "#ff8800"
            "##,
        )
        .unwrap();

        let config = file.to_config();

        assert_eq!(config.indicator.color, Rgba::rgb(0xff, 0x88, 0x00));
        assert_eq!(config.indicator.delay_ms, 40);
        assert_eq!(config.demo, DemoConfig::default());
    }

    #[rstest]
    #[case("[indicator]\nspeed = 3\n")]
    #[case("[demo]\ntheme = \"dark\"\n")]
    #[case("[window]\n")]
    #[case("[indicator]\ndelay_ms = -1\n")]
    fn invalid_keys_or_values_are_rejected(#[case] text: &str) {
        let result: Result<ConfigFile, _> = toml::from_str(text);

        assert!(result.is_err());
    }

    #[test]
    fn serialized_config_reads_back() {
        let mut config = Config::default();
        config.indicator.delay_ms = 12;
        config.demo.autostart = false;

        let text = toml::to_string_pretty(&ConfigFile::from_config(&config)).unwrap();
        let file: ConfigFile = toml::from_str(&text).unwrap();

        assert_eq!(file.to_config(), config);
    }
}
