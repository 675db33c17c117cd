use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};

use crate::theme::Theme;

/// Creates a titled panel block; `active` highlights the border.
pub fn panel_block(title: &str, active: bool) -> Block<'static> {
    let border_style = if active {
        Style::default().fg(Theme::ACTIVE_BORDER)
    } else {
        Style::default().fg(Theme::PANEL_BORDER)
    };

    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_style)
}
