//! The spinning busy indicator: twelve capsules fading around a center,
//! advanced by a host timer.
//!
//! All methods run on the host's event thread. The host serializes timer
//! ticks, paints, and mutator calls, so the widget holds no locks.

use std::time::Duration;

use pinwheel_domain::{
    Angle, CAPSULE_COUNT, CapsuleLayout, FocusPolicy, PREFERRED_SIZE, Rgba, Size, SizePolicy,
    capsule_color, capsule_rotation, height_for_width,
};
use tracing::{debug, trace};

use crate::config::{DEFAULT_DELAY_MS, IndicatorConfig};
use crate::ports::{Painter, Surface, TimerError, TimerId, TimerService};

pub struct ProgressIndicator<T: TimerService, S: Surface> {
    angle: Angle,
    timer_id: Option<TimerId>,
    delay_ms: u32,
    displayed_when_stopped: bool,
    color: Rgba,
    timer: T,
    surface: S,
}

impl<T: TimerService, S: Surface> ProgressIndicator<T, S> {
    /// Stopped, at angle 0, 40ms delay, black, hidden while stopped.
    pub fn new(timer: T, surface: S) -> Self {
        Self {
            angle: Angle::ZERO,
            timer_id: None,
            delay_ms: DEFAULT_DELAY_MS,
            displayed_when_stopped: false,
            color: Rgba::BLACK,
            timer,
            surface,
        }
    }

    /// A stopped indicator carrying `config`. No timer is registered.
    pub fn with_config(timer: T, surface: S, config: &IndicatorConfig) -> Self {
        let mut indicator = Self::new(timer, surface);
        indicator.delay_ms = config.delay_ms;
        indicator.displayed_when_stopped = config.displayed_when_stopped;
        indicator.color = config.color;
        indicator
    }

    pub fn apply_config(&mut self, config: &IndicatorConfig) -> Result<(), TimerError> {
        self.set_animation_delay(config.delay_ms)?;
        self.set_displayed_when_stopped(config.displayed_when_stopped);
        self.set_color(config.color);
        Ok(())
    }

    pub fn animation_delay(&self) -> u32 {
        self.delay_ms
    }

    pub fn is_animated(&self) -> bool {
        self.timer_id.is_some()
    }

    pub fn is_displayed_when_stopped(&self) -> bool {
        self.displayed_when_stopped
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn angle(&self) -> Angle {
        self.angle
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn size_hint(&self) -> Size {
        PREFERRED_SIZE
    }

    pub fn height_for_width(&self, width: u32) -> u32 {
        height_for_width(width)
    }

    pub fn size_policy(&self) -> SizePolicy {
        SizePolicy::Fixed
    }

    pub fn focus_policy(&self) -> FocusPolicy {
        FocusPolicy::NoFocus
    }

    /// Resets the angle to 0 and registers the timer unless one is already
    /// active. Calling it while animating restarts the angle without adding
    /// a second timer.
    pub fn start_animation(&mut self) -> Result<(), TimerError> {
        self.angle = Angle::ZERO;

        if self.timer_id.is_none() {
            let id = self.timer.register(self.interval())?;
            debug!(timer = %id, delay_ms = self.delay_ms, "indicator: animation started");
            self.timer_id = Some(id);
        }
        Ok(())
    }

    pub fn stop_animation(&mut self) {
        if let Some(id) = self.timer_id.take() {
            self.timer.cancel(id);
            debug!(timer = %id, angle = %self.angle, "indicator: animation stopped");
        }

        self.surface.request_redraw();
    }

    /// A delay of 0 is accepted; the host clamps it to its minimum interval.
    ///
    /// While animating the timer is re-registered at the new interval and the
    /// angle is kept. If re-registration fails the indicator is left stopped.
    pub fn set_animation_delay(&mut self, delay_ms: u32) -> Result<(), TimerError> {
        let running = self.timer_id.take();
        if let Some(id) = running {
            self.timer.cancel(id);
        }

        self.delay_ms = delay_ms;

        if running.is_some() {
            let id = self.timer.register(self.interval())?;
            debug!(timer = %id, delay_ms, "indicator: timer restarted");
            self.timer_id = Some(id);
        }
        Ok(())
    }

    pub fn set_displayed_when_stopped(&mut self, displayed: bool) {
        self.displayed_when_stopped = displayed;

        self.surface.request_redraw();
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;

        self.surface.request_redraw();
    }

    /// Host tick entry point. Returns `false` for ids that are no longer
    /// active, which happens when a tick was queued before a cancel.
    pub fn timer_event(&mut self, id: TimerId) -> bool {
        if self.timer_id != Some(id) {
            debug!(timer = %id, "indicator: ignoring tick from inactive timer");
            return false;
        }

        self.angle = self.angle.advanced();
        trace!(angle = %self.angle, "indicator: tick");

        self.surface.request_redraw();
        true
    }

    pub fn paint(&self, painter: &mut dyn Painter) {
        if !self.displayed_when_stopped && !self.is_animated() {
            return;
        }

        let size = self.surface.current_size();
        let Some(layout) = CapsuleLayout::for_size(size) else {
            return;
        };
        let center = size.center();
        let rect = layout.capsule_rect();

        painter.set_antialiasing(true);

        for index in 0..CAPSULE_COUNT {
            painter.save();
            painter.translate(center.x, center.y);
            painter.rotate(capsule_rotation(self.angle, index));
            painter.fill_rounded_rect(
                rect,
                layout.capsule_radius,
                layout.capsule_radius,
                capsule_color(self.color, index),
            );
            painter.restore();
        }
    }

    fn interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.delay_ms))
    }
}

impl<T: TimerService, S: Surface> Drop for ProgressIndicator<T, S> {
    fn drop(&mut self) {
        if let Some(id) = self.timer_id.take() {
            self.timer.cancel(id);
        }
    }
}
