//! Pure values for the busy indicator: rotation, color, and capsule geometry.

pub mod angle;
pub mod capsule;
pub mod color;
pub mod geometry;

pub use angle::{ANGLE_STEP, Angle};
pub use capsule::{
    CAPSULE_COUNT, CapsuleLayout, capsule_alpha, capsule_color, capsule_rotation,
};
pub use color::{ParseColorError, Rgba};
pub use geometry::{FocusPolicy, PREFERRED_SIZE, PointF, RectF, Size, SizePolicy, height_for_width};
