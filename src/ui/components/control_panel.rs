use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use pinwheel_app::demo::DemoState;
use pinwheel_app::ports::{Surface, TimerService};

use super::atoms::{key_chip, panel_block};
use super::delay_slider::slider_line;
use crate::theme::{Theme, to_color};

/// Buttons, the delay slider, and a readout of the indicator state.
pub struct ControlPanel;

impl ControlPanel {
    pub fn render<T: TimerService, S: Surface>(
        frame: &mut Frame,
        area: Rect,
        state: &DemoState<T, S>,
    ) {
        let block = panel_block("controls", false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let track_width = inner.width.saturating_sub(16).max(1);
        let lines = Self::build_lines(state, track_width);
        frame.render_widget(Paragraph::new(lines), inner);
    }

    pub fn build_lines<T: TimerService, S: Surface>(
        state: &DemoState<T, S>,
        track_width: u16,
    ) -> Vec<Line<'static>> {
        let indicator = &state.indicator;
        let animated = indicator.is_animated();

        vec![
            Self::button_line("s", "start spin", animated),
            Self::button_line("x", "stop spin", !animated),
            Line::default(),
            slider_line("delay", state.slider, track_width),
            Line::default(),
            Self::field_line("state", if animated { "spinning" } else { "stopped" }),
            Self::field_line("angle", &indicator.angle().to_string()),
            Self::field_line(
                "shown when stopped",
                if indicator.is_displayed_when_stopped() {
                    "yes"
                } else {
                    "no"
                },
            ),
            Line::from(vec![
                Span::styled("color  ", Style::default().fg(Theme::TEXT_SECONDARY)),
                Span::styled("██", Style::default().fg(to_color(indicator.color()))),
                Span::styled(
                    format!(" {}", indicator.color()),
                    Style::default().fg(Theme::TEXT_PRIMARY),
                ),
            ]),
        ]
    }

    fn button_line(key: &str, label: &str, pressed: bool) -> Line<'static> {
        let style = if pressed {
            Style::default()
                .fg(Theme::TEXT_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::TEXT_PRIMARY)
        };
        Line::from(vec![
            key_chip(key),
            Span::raw(" "),
            Span::styled(format!("[ {label} ]"), style),
        ])
    }

    fn field_line(name: &str, value: &str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{name}  "), Style::default().fg(Theme::TEXT_SECONDARY)),
            Span::styled(value.to_string(), Style::default().fg(Theme::TEXT_PRIMARY)),
        ])
    }
}
