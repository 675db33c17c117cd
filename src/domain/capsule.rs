//! Placement of the twelve capsules around the indicator center.
//!
//! Everything here is derived from the widget size and the current angle;
//! nothing is cached between frames.

use crate::angle::{ANGLE_STEP, Angle};
use crate::color::Rgba;
use crate::geometry::{RectF, Size};

pub const CAPSULE_COUNT: usize = 12;

const INNER_RADIUS_RATIO: f64 = 0.38;
const WIDE_CAPSULE_RATIO: f64 = 0.35;
const SLIM_CAPSULE_RATIO: f64 = 0.23;
/// Above this side length capsules are drawn thinner.
const SLIM_THRESHOLD: u32 = 32;

/// Radii and capsule dimensions for one drawing square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapsuleLayout {
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub capsule_width: f64,
    pub capsule_height: f64,
    pub capsule_radius: f64,
}

impl CapsuleLayout {
    /// Returns `None` when the square is too small to hold any capsule.
    pub fn for_size(size: Size) -> Option<Self> {
        let width = size.square_side();
        if width == 0 {
            return None;
        }

        let outer_radius = (f64::from(width) - 1.0) * 0.5;
        let inner_radius = outer_radius * INNER_RADIUS_RATIO;
        let capsule_height = outer_radius - inner_radius;
        if capsule_height <= 0.0 {
            return None;
        }

        let capsule_width = if width > SLIM_THRESHOLD {
            capsule_height * SLIM_CAPSULE_RATIO
        } else {
            capsule_height * WIDE_CAPSULE_RATIO
        };

        Some(Self {
            outer_radius,
            inner_radius,
            capsule_width,
            capsule_height,
            capsule_radius: capsule_width / 2.0,
        })
    }

    /// The capsule before rotation: centered on the vertical axis, pointing up
    /// from `inner_radius` to `inner_radius + capsule_height`.
    pub fn capsule_rect(&self) -> RectF {
        RectF::new(
            -self.capsule_width * 0.5,
            -(self.inner_radius + self.capsule_height),
            self.capsule_width,
            self.capsule_height,
        )
    }
}

/// Opacity of capsule `index`; the head is opaque and the tail fades.
pub fn capsule_alpha(index: usize) -> f64 {
    1.0 - index as f64 / CAPSULE_COUNT as f64
}

pub fn capsule_color(base: Rgba, index: usize) -> Rgba {
    base.with_alpha(capsule_alpha(index))
}

/// Rotation in degrees applied to capsule `index`.
pub fn capsule_rotation(angle: Angle, index: usize) -> f64 {
    f64::from(angle.degrees()) - index as f64 * f64::from(ANGLE_STEP)
}
