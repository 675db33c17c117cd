pub mod pixel_canvas;
pub mod surface;
pub mod timer;

pub use pixel_canvas::PixelCanvas;
pub use surface::{RedrawHandle, TerminalSurface};
pub use timer::{MIN_TIMER_INTERVAL, TokioTimerService};
