use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::components::atoms::key_text;
use crate::theme::Theme;

/// Creates a hint line for footer display.
/// Format: "key1 desc1  key2 desc2  ..."
pub fn hint_line(hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(key_text(key));
        spans.push(Span::styled(
            format!(" {desc}"),
            Style::default().fg(Theme::TEXT_SECONDARY),
        ));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_are_separated_by_two_spaces() {
        let line = hint_line(&[("s", "start"), ("q", "quit")]);

        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "s start  q quit");
    }

    #[test]
    fn empty_hints_yield_empty_line() {
        assert!(hint_line(&[]).spans.is_empty());
    }
}
