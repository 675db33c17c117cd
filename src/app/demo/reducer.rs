//! Applies demo actions to the indicator.
//!
//! Timer registration failures are returned unchanged so the embedding
//! application decides what to do with them.

use tracing::debug;

use super::action::Action;
use super::state::{DemoState, PALETTE};
use crate::ports::{Surface, TimerError, TimerService};

pub fn reduce<T: TimerService, S: Surface>(
    state: &mut DemoState<T, S>,
    action: Action,
) -> Result<(), TimerError> {
    match action {
        Action::None => {}
        Action::Render => state.mark_dirty(),
        Action::Quit => state.should_quit = true,
        Action::Resize(w, h) => {
            state.terminal_size = (w, h);
            state.mark_dirty();
        }
        Action::StartSpin => {
            state.indicator.start_animation()?;
            state.mark_dirty();
        }
        Action::StopSpin => {
            state.indicator.stop_animation();
            state.mark_dirty();
        }
        Action::SetDelay(value) => set_delay(state, value)?,
        Action::IncreaseDelay => {
            let value = state.slider.value().saturating_add(1);
            set_delay(state, value)?;
        }
        Action::DecreaseDelay => {
            let value = state.slider.value().saturating_sub(1);
            set_delay(state, value)?;
        }
        Action::ToggleDisplayedWhenStopped => {
            let displayed = !state.indicator.is_displayed_when_stopped();
            state.indicator.set_displayed_when_stopped(displayed);
            state.mark_dirty();
        }
        Action::CycleColor => {
            state.palette_index = (state.palette_index + 1) % PALETTE.len();
            state.indicator.set_color(PALETTE[state.palette_index]);
            state.mark_dirty();
        }
        Action::Timer(id) => {
            state.indicator.timer_event(id);
        }
    }
    Ok(())
}

/// Slider `valueChanged` semantics: the indicator is only touched when the
/// clamped value actually moves.
fn set_delay<T: TimerService, S: Surface>(
    state: &mut DemoState<T, S>,
    value: u32,
) -> Result<(), TimerError> {
    if state.slider.set(value) {
        debug!(delay_ms = state.slider.value(), "demo: delay slider moved");
        state.indicator.set_animation_delay(state.slider.value())?;
        state.mark_dirty();
    }
    Ok(())
}
