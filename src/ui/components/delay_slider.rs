use ratatui::style::Style;
use ratatui::text::{Line, Span};

use pinwheel_app::demo::DelaySlider;

use crate::theme::Theme;

const FILLED: char = '━';
const EMPTY: char = '─';
const KNOB: char = '●';

/// Index of the knob on a track `width` cells wide.
pub fn knob_position(slider: DelaySlider, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    (slider.ratio() * f64::from(width - 1)).round() as u16
}

/// A horizontal slider line: `label  ━━━●────  40 ms`.
pub fn slider_line(label: &str, slider: DelaySlider, track_width: u16) -> Line<'static> {
    let knob = knob_position(slider, track_width);
    let filled: String = std::iter::repeat_n(FILLED, usize::from(knob)).collect();
    let empty: String =
        std::iter::repeat_n(EMPTY, usize::from(track_width.saturating_sub(knob + 1))).collect();

    let mut spans = vec![
        Span::styled(format!("{label}  "), Style::default().fg(Theme::TEXT_SECONDARY)),
        Span::styled(filled, Style::default().fg(Theme::SLIDER_FILL)),
    ];
    if track_width > 0 {
        spans.push(Span::styled(
            KNOB.to_string(),
            Style::default().fg(Theme::SLIDER_KNOB),
        ));
    }
    spans.push(Span::styled(empty, Style::default().fg(Theme::SLIDER_TRACK)));
    spans.push(Span::styled(
        format!("  {:>3} ms", slider.value()),
        Style::default().fg(Theme::TEXT_PRIMARY),
    ));

    Line::from(spans)
}
