use std::cell::Cell;
use std::rc::Rc;

use ratatui::layout::Rect;

use pinwheel_app::ports::Surface;
use pinwheel_domain::Size;

/// Terminal-backed surface. Each cell holds two vertically stacked pixels.
///
/// Clones share state: the indicator owns one, and the host keeps another
/// to resize it at layout time and to poll redraw requests.
#[derive(Debug, Clone, Default)]
pub struct TerminalSurface {
    size: Rc<Cell<Size>>,
    redraw_requested: Rc<Cell<bool>>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resize(&self, size: Size) {
        self.size.set(size);
    }

    pub fn redraw_handle(&self) -> RedrawHandle {
        RedrawHandle {
            requested: Rc::clone(&self.redraw_requested),
        }
    }

    pub fn pixel_size(area: Rect) -> Size {
        Size::new(u32::from(area.width), u32::from(area.height) * 2)
    }

    /// Cells needed to show `pixels` rows.
    pub fn rows_for_pixels(pixels: u32) -> u16 {
        pixels.div_ceil(2).min(u32::from(u16::MAX)) as u16
    }
}

impl Surface for TerminalSurface {
    fn request_redraw(&self) {
        self.redraw_requested.set(true);
    }

    fn current_size(&self) -> Size {
        self.size.get()
    }
}

#[derive(Debug, Clone)]
pub struct RedrawHandle {
    requested: Rc<Cell<bool>>,
}

impl RedrawHandle {
    /// Returns whether a redraw was requested since the last call.
    pub fn take(&self) -> bool {
        self.requested.replace(false)
    }
}
