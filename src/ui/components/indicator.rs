use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use pinwheel_app::ProgressIndicator;
use pinwheel_app::ports::TimerService;
use pinwheel_domain::Rgba;

use crate::adapters::{PixelCanvas, TerminalSurface};
use crate::theme::to_color;

/// Paints a [`ProgressIndicator`] into its area. The area becomes the
/// indicator's surface size before painting, as a layout pass would do.
pub struct IndicatorView<'a, T: TimerService> {
    indicator: &'a ProgressIndicator<T, TerminalSurface>,
    background: Rgba,
}

impl<'a, T: TimerService> IndicatorView<'a, T> {
    pub fn new(indicator: &'a ProgressIndicator<T, TerminalSurface>, background: Rgba) -> Self {
        Self {
            indicator,
            background,
        }
    }
}

impl<T: TimerService> Widget for IndicatorView<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(to_color(self.background)));

        let size = TerminalSurface::pixel_size(area);
        self.indicator.surface().resize(size);

        let mut canvas = PixelCanvas::new(size);
        self.indicator.paint(&mut canvas);
        canvas.flush(area, buf, self.background);
    }
}
