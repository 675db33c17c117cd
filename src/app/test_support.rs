//! Deterministic stand-ins for the host ports.
//!
//! `ManualTimer` never fires on its own: tests read the active id and feed
//! it to `ProgressIndicator::timer_event`, which is exactly what a host does.

use std::cell::{Cell, Ref, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use pinwheel_domain::{RectF, Rgba, Size};

use crate::ports::{Painter, Surface, TimerError, TimerId, TimerService};

#[derive(Debug, Default)]
pub struct TimerLog {
    next_id: u64,
    pub active: BTreeMap<TimerId, Duration>,
    pub registered: Vec<(TimerId, Duration)>,
    pub cancelled: Vec<TimerId>,
    fail_next: Option<TimerError>,
}

/// Shared handle: clones observe the same log, so a test can keep one
/// while the indicator owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualTimer {
    log: Rc<RefCell<TimerLog>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> Ref<'_, TimerLog> {
        self.log.borrow()
    }

    pub fn active_ids(&self) -> Vec<TimerId> {
        self.log.borrow().active.keys().copied().collect()
    }

    /// The single active registration, if exactly one exists.
    pub fn active(&self) -> Option<(TimerId, Duration)> {
        let log = self.log.borrow();
        if log.active.len() == 1 {
            log.active.iter().next().map(|(id, interval)| (*id, *interval))
        } else {
            None
        }
    }

    pub fn fail_next_register(&self, error: TimerError) {
        self.log.borrow_mut().fail_next = Some(error);
    }
}

impl TimerService for ManualTimer {
    fn register(&mut self, interval: Duration) -> Result<TimerId, TimerError> {
        let mut log = self.log.borrow_mut();
        if let Some(error) = log.fail_next.take() {
            return Err(error);
        }

        log.next_id += 1;
        let id = TimerId::new(log.next_id);
        log.active.insert(id, interval);
        log.registered.push((id, interval));
        Ok(id)
    }

    fn cancel(&mut self, id: TimerId) {
        let mut log = self.log.borrow_mut();
        log.active.remove(&id);
        log.cancelled.push(id);
    }
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Rc<Cell<Size>>,
    redraws: Rc<Cell<usize>>,
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size: Rc::new(Cell::new(size)),
            redraws: Rc::new(Cell::new(0)),
        }
    }

    pub fn set_size(&self, size: Size) {
        self.size.set(size);
    }

    pub fn redraw_count(&self) -> usize {
        self.redraws.get()
    }
}

impl Surface for RecordingSurface {
    fn request_redraw(&self) {
        self.redraws.set(self.redraws.get() + 1);
    }

    fn current_size(&self) -> Size {
        self.size.get()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    SetAntialiasing(bool),
    Save,
    Restore,
    Translate(f64, f64),
    Rotate(f64),
    FillRoundedRect {
        rect: RectF,
        x_radius: f64,
        y_radius: f64,
        color: Rgba,
    },
}

#[derive(Debug, Default)]
pub struct RecordingPainter {
    pub ops: Vec<PaintOp>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill_colors(&self) -> Vec<Rgba> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PaintOp::FillRoundedRect { color, .. } => Some(*color),
                _ => None,
            })
            .collect()
    }

    pub fn rotations(&self) -> Vec<f64> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PaintOp::Rotate(degrees) => Some(*degrees),
                _ => None,
            })
            .collect()
    }
}

impl Painter for RecordingPainter {
    fn set_antialiasing(&mut self, enabled: bool) {
        self.ops.push(PaintOp::SetAntialiasing(enabled));
    }

    fn save(&mut self) {
        self.ops.push(PaintOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(PaintOp::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.ops.push(PaintOp::Translate(dx, dy));
    }

    fn rotate(&mut self, degrees: f64) {
        self.ops.push(PaintOp::Rotate(degrees));
    }

    fn fill_rounded_rect(&mut self, rect: RectF, x_radius: f64, y_radius: f64, color: Rgba) {
        self.ops.push(PaintOp::FillRoundedRect {
            rect,
            x_radius,
            y_radius,
            color,
        });
    }
}
