/// Widget dimensions in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Side of the largest square that fits.
    pub fn square_side(self) -> u32 {
        self.width.min(self.height)
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Center pixel of the widget rect. Pixel `i` is centered on coordinate `i`,
    /// so a widget `w` pixels wide spans `[-0.5, w - 0.5]`.
    pub fn center(self) -> PointF {
        PointF::new(
            (f64::from(self.width) - 1.0) * 0.5,
            (f64::from(self.height) - 1.0) * 0.5,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle; `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectF {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn corners(&self) -> [PointF; 4] {
        [
            PointF::new(self.left(), self.top()),
            PointF::new(self.right(), self.top()),
            PointF::new(self.right(), self.bottom()),
            PointF::new(self.left(), self.bottom()),
        ]
    }

    /// Whether `point` lies inside the rect with elliptical corners of the given radii.
    /// Radii are clamped to half the rect extents.
    pub fn rounded_contains(&self, point: PointF, x_radius: f64, y_radius: f64) -> bool {
        if self.width <= 0.0 || self.height <= 0.0 {
            return false;
        }
        if point.x < self.left()
            || point.x > self.right()
            || point.y < self.top()
            || point.y > self.bottom()
        {
            return false;
        }

        let rx = x_radius.clamp(0.0, self.width * 0.5);
        let ry = y_radius.clamp(0.0, self.height * 0.5);
        if rx <= 0.0 || ry <= 0.0 {
            return true;
        }

        // Rounding can put the inner edges a hair past each other.
        let (x_lo, y_lo) = (self.left() + rx, self.top() + ry);
        let cx = point.x.clamp(x_lo, (self.right() - rx).max(x_lo));
        let cy = point.y.clamp(y_lo, (self.bottom() - ry).max(y_lo));
        let dx = (point.x - cx) / rx;
        let dy = (point.y - cy) / ry;
        dx * dx + dy * dy <= 1.0
    }
}

/// How a layout may stretch the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizePolicy {
    /// The size hint is the only acceptable size.
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPolicy {
    NoFocus,
}

/// Preferred size reported to layouts.
pub const PREFERRED_SIZE: Size = Size::new(20, 20);

/// The indicator is square.
pub fn height_for_width(width: u32) -> u32 {
    width
}
