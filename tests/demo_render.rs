mod harness;

use harness::{
    create_test_state, create_test_terminal, half_block_count, indicator_shades,
    render_and_get_buffer, render_to_string,
};

use pinwheel::app::demo::{Action, reduce};
use pinwheel::app::ports::Surface;
use rstest::rstest;

#[test]
fn initial_screen_shows_controls() {
    let (state, _timer) = create_test_state();
    let mut terminal = create_test_terminal();

    let output = render_to_string(&mut terminal, &state);

    assert!(output.contains("pinwheel"));
    assert!(output.contains("[ start spin ]"));
    assert!(output.contains("[ stop spin ]"));
    assert!(output.contains("stopped"));
    assert!(output.contains("delay"));
}

#[test]
fn stopped_indicator_is_hidden() {
    let (state, _timer) = create_test_state();
    let mut terminal = create_test_terminal();

    let buffer = render_and_get_buffer(&mut terminal, &state);

    assert_eq!(half_block_count(&buffer), 0);
}

#[test]
fn spinning_indicator_is_drawn() {
    let (mut state, _timer) = create_test_state();
    let mut terminal = create_test_terminal();
    reduce(&mut state, Action::StartSpin).unwrap();

    let buffer = render_and_get_buffer(&mut terminal, &state);
    let output = render_to_string(&mut terminal, &state);

    assert!(half_block_count(&buffer) > 0);
    assert!(output.contains("spinning"));
}

#[test]
fn frozen_indicator_stays_visible_when_shown_while_stopped() {
    let (mut state, _timer) = create_test_state();
    let mut terminal = create_test_terminal();
    reduce(&mut state, Action::ToggleDisplayedWhenStopped).unwrap();

    let buffer = render_and_get_buffer(&mut terminal, &state);

    assert!(half_block_count(&buffer) > 0);
}

#[test]
fn tick_advances_angle_readout() {
    let (mut state, timer) = create_test_state();
    let mut terminal = create_test_terminal();
    reduce(&mut state, Action::StartSpin).unwrap();
    let (id, _) = timer.active().unwrap();

    reduce(&mut state, Action::Timer(id)).unwrap();
    let output = render_to_string(&mut terminal, &state);

    assert!(output.contains("30°"));
}

#[test]
fn rendering_sizes_the_surface() {
    let (state, _timer) = create_test_state();
    let mut terminal = create_test_terminal();

    render_and_get_buffer(&mut terminal, &state);

    let size = state.indicator.surface().current_size();
    assert_eq!(size.width, 20);
    assert_eq!(size.height, 20);
}

#[rstest]
#[case(Action::IncreaseDelay, " 41 ms")]
#[case(Action::DecreaseDelay, " 39 ms")]
#[case(Action::SetDelay(0), "  0 ms")]
#[case(Action::SetDelay(250), "100 ms")]
fn slider_readout_follows_delay(#[case] action: Action, #[case] expected: &str) {
    let (mut state, _timer) = create_test_state();
    let mut terminal = create_test_terminal();

    reduce(&mut state, action).unwrap();
    let output = render_to_string(&mut terminal, &state);

    assert!(output.contains(expected));
    assert_eq!(state.indicator.animation_delay(), state.slider.value());
}

mod indicator_snapshots {
    use super::*;

    #[test]
    fn stopped_and_hidden() {
        let (state, _timer) = create_test_state();
        let mut terminal = create_test_terminal();

        let buffer = render_and_get_buffer(&mut terminal, &state);

        insta::assert_snapshot!(indicator_shades(&buffer));
    }

    #[test]
    fn spinning_at_zero_degrees() {
        let (mut state, _timer) = create_test_state();
        let mut terminal = create_test_terminal();
        reduce(&mut state, Action::StartSpin).unwrap();

        let buffer = render_and_get_buffer(&mut terminal, &state);

        insta::assert_snapshot!(indicator_shades(&buffer));
    }

    #[test]
    fn spinning_after_one_tick() {
        let (mut state, timer) = create_test_state();
        let mut terminal = create_test_terminal();
        reduce(&mut state, Action::StartSpin).unwrap();
        let (id, _) = timer.active().unwrap();
        reduce(&mut state, Action::Timer(id)).unwrap();

        let buffer = render_and_get_buffer(&mut terminal, &state);

        insta::assert_snapshot!(indicator_shades(&buffer));
    }

    #[test]
    fn frozen_frame_shown_while_stopped() {
        let (mut state, timer) = create_test_state();
        let mut terminal = create_test_terminal();
        reduce(&mut state, Action::StartSpin).unwrap();
        let (id, _) = timer.active().unwrap();
        reduce(&mut state, Action::Timer(id)).unwrap();
        reduce(&mut state, Action::Timer(id)).unwrap();
        reduce(&mut state, Action::StopSpin).unwrap();
        reduce(&mut state, Action::ToggleDisplayedWhenStopped).unwrap();

        let buffer = render_and_get_buffer(&mut terminal, &state);

        insta::assert_snapshot!(indicator_shades(&buffer));
    }
}
