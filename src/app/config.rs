use pinwheel_domain::{PREFERRED_SIZE, Rgba};

pub const DEFAULT_DELAY_MS: u32 = 40;

/// Settings applied to a [`ProgressIndicator`](crate::progress_indicator::ProgressIndicator).
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorConfig {
    pub delay_ms: u32,
    pub displayed_when_stopped: bool,
    pub color: Rgba,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
            displayed_when_stopped: false,
            color: Rgba::BLACK,
        }
    }
}

/// Settings for the demo window only; the indicator itself never reads these.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Side of the indicator in pixels.
    pub size: u32,
    pub autostart: bool,
    pub background: Rgba,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            size: PREFERRED_SIZE.width,
            autostart: true,
            background: Rgba::rgb(0xd0, 0xd0, 0xd0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub indicator: IndicatorConfig,
    pub demo: DemoConfig,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub delay_ms: Option<u32>,
    pub color: Option<Rgba>,
    pub displayed_when_stopped: bool,
    pub size: Option<u32>,
}

impl Config {
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(delay) = overrides.delay_ms {
            self.indicator.delay_ms = delay;
        }
        if let Some(color) = overrides.color {
            self.indicator.color = color;
        }
        if overrides.displayed_when_stopped {
            self.indicator.displayed_when_stopped = true;
        }
        if let Some(size) = overrides.size {
            self.demo.size = size;
        }
        self
    }
}
