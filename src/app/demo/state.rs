use tracing::debug;

use pinwheel_domain::Rgba;

use crate::ports::{Surface, TimerError, TimerService};
use crate::progress_indicator::ProgressIndicator;

/// Colors the demo cycles through; the first entry is the indicator default.
pub const PALETTE: [Rgba; 5] = [
    Rgba::BLACK,
    Rgba::rgb(0x1e, 0x66, 0xf5),
    Rgba::rgb(0xd2, 0x0f, 0x39),
    Rgba::rgb(0x40, 0xa0, 0x2b),
    Rgba::rgb(0x88, 0x39, 0xef),
];

/// Horizontal slider over the animation delay in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelaySlider {
    value: u32,
}

impl DelaySlider {
    pub const MIN: u32 = 0;
    pub const MAX: u32 = 100;

    pub fn new(value: u32) -> Self {
        Self {
            value: value.clamp(Self::MIN, Self::MAX),
        }
    }

    pub fn value(self) -> u32 {
        self.value
    }

    /// Returns `true` when the value changed.
    pub fn set(&mut self, value: u32) -> bool {
        let clamped = value.clamp(Self::MIN, Self::MAX);
        let changed = clamped != self.value;
        self.value = clamped;
        changed
    }

    pub fn ratio(self) -> f64 {
        f64::from(self.value - Self::MIN) / f64::from(Self::MAX - Self::MIN)
    }
}

pub struct DemoState<T: TimerService, S: Surface> {
    pub indicator: ProgressIndicator<T, S>,
    pub slider: DelaySlider,
    pub palette_index: usize,
    pub terminal_size: (u16, u16),
    pub should_quit: bool,
    render_dirty: bool,
}

impl<T: TimerService, S: Surface> DemoState<T, S> {
    /// Seeds the slider from the indicator's delay. A delay outside the
    /// slider range is clamped and pushed back, so the readout always shows
    /// the interval the timer runs at.
    pub fn new(mut indicator: ProgressIndicator<T, S>) -> Result<Self, TimerError> {
        let slider = DelaySlider::new(indicator.animation_delay());
        if slider.value() != indicator.animation_delay() {
            debug!(
                configured_ms = indicator.animation_delay(),
                delay_ms = slider.value(),
                "demo: delay clamped to slider range"
            );
            indicator.set_animation_delay(slider.value())?;
        }
        let palette_index = PALETTE
            .iter()
            .position(|c| *c == indicator.color())
            .unwrap_or(0);

        Ok(Self {
            indicator,
            slider,
            palette_index,
            terminal_size: (0, 0),
            should_quit: false,
            render_dirty: true,
        })
    }

    pub fn mark_dirty(&mut self) {
        self.render_dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.render_dirty
    }

    pub fn clear_dirty(&mut self) {
        self.render_dirty = false;
    }
}
