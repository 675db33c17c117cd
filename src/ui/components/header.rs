use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::theme::Theme;

pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                " pinwheel ",
                Style::default()
                    .fg(Theme::ACTIVE_BORDER)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "| busy indicator demo",
                Style::default().fg(Theme::TEXT_MUTED),
            ),
        ]);

        frame.render_widget(
            Paragraph::new(line).style(Style::default().bg(Theme::HEADER_BG)),
            area,
        );
    }
}
