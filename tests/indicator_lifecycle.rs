use std::time::Duration;

use pinwheel::app::ProgressIndicator;
use pinwheel::app::ports::TimerError;
use pinwheel::app::test_support::{ManualTimer, RecordingPainter, RecordingSurface};
use pinwheel::domain::{PREFERRED_SIZE, Rgba, Size};

fn indicator() -> (ProgressIndicator<ManualTimer, RecordingSurface>, ManualTimer, RecordingSurface) {
    let timer = ManualTimer::new();
    let surface = RecordingSurface::new(PREFERRED_SIZE);
    let indicator = ProgressIndicator::new(timer.clone(), surface.clone());
    (indicator, timer, surface)
}

#[test]
fn start_tick_change_delay_stop() {
    let (mut indicator, timer, surface) = indicator();

    indicator.start_animation().unwrap();
    let (first, interval) = timer.active().unwrap();
    assert_eq!(interval, Duration::from_millis(40));

    for _ in 0..3 {
        assert!(indicator.timer_event(first));
    }
    assert_eq!(indicator.angle().degrees(), 90);
    assert_eq!(surface.redraw_count(), 3);

    indicator.set_animation_delay(100).unwrap();
    let (second, interval) = timer.active().unwrap();
    assert_ne!(first, second);
    assert_eq!(interval, Duration::from_millis(100));
    assert!(!indicator.timer_event(first));
    assert_eq!(indicator.angle().degrees(), 90);

    indicator.stop_animation();
    assert!(!indicator.is_animated());
    assert!(timer.active_ids().is_empty());
    assert!(!indicator.timer_event(second));
}

#[test]
fn full_turn_wraps_to_zero() {
    let (mut indicator, timer, _surface) = indicator();
    indicator.start_animation().unwrap();
    let (id, _) = timer.active().unwrap();

    for _ in 0..12 {
        indicator.timer_event(id);
    }

    assert_eq!(indicator.angle().degrees(), 0);
}

#[test]
fn paint_draws_twelve_fading_capsules() {
    let (mut indicator, _timer, _surface) = indicator();
    indicator.set_color(Rgba::rgb(0x20, 0x40, 0x60));
    indicator.start_animation().unwrap();

    let mut painter = RecordingPainter::new();
    indicator.paint(&mut painter);

    let colors = painter.fill_colors();
    assert_eq!(colors.len(), 12);
    assert!((colors[0].a - 1.0).abs() < 1e-9);
    assert!((colors[11].a - 1.0 / 12.0).abs() < 1e-9);
    assert!(colors.windows(2).all(|pair| pair[0].a > pair[1].a));
    assert!(colors.iter().all(|c| (c.r, c.g, c.b) == (0x20, 0x40, 0x60)));
}

#[test]
fn hidden_while_stopped_paints_nothing() {
    let (indicator, _timer, _surface) = indicator();

    let mut painter = RecordingPainter::new();
    indicator.paint(&mut painter);

    assert!(painter.ops.is_empty());
}

#[test]
fn degenerate_surface_paints_nothing() {
    let (mut indicator, _timer, surface) = indicator();
    indicator.start_animation().unwrap();
    surface.set_size(Size::new(0, 0));

    let mut painter = RecordingPainter::new();
    indicator.paint(&mut painter);

    assert!(painter.fill_colors().is_empty());
}

#[test]
fn failed_start_leaves_widget_stopped() {
    let (mut indicator, timer, _surface) = indicator();
    timer.fail_next_register(TimerError::Rejected("closed".to_string()));

    let result = indicator.start_animation();

    assert!(matches!(result, Err(TimerError::Rejected(_))));
    assert!(!indicator.is_animated());
    assert!(timer.active_ids().is_empty());
}

#[test]
fn drop_cancels_running_timer() {
    let (mut indicator, timer, _surface) = indicator();
    indicator.start_animation().unwrap();
    let (id, _) = timer.active().unwrap();

    drop(indicator);

    assert!(timer.active_ids().is_empty());
    assert!(timer.log().cancelled.contains(&id));
}
