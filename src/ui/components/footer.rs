use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

use super::molecules::hint_line;

/// Hint ordering: Buttons → Slider → Toggles → Quit
pub const FOOTER_HINTS: [(&str, &str); 6] = [
    ("s", "start"),
    ("x", "stop"),
    ("←/→", "delay"),
    ("d", "show stopped"),
    ("c", "color"),
    ("q", "quit"),
];

pub struct Footer;

impl Footer {
    pub fn render(frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(hint_line(&FOOTER_HINTS)), area);
    }
}
