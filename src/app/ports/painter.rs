use pinwheel_domain::{RectF, Rgba};

/// Immediate-mode drawing commands for one paint pass.
///
/// Transforms apply in the current coordinate system, so `translate` then
/// `rotate` rotates around the translated origin. `save`/`restore` push and
/// pop the transform.
pub trait Painter {
    fn set_antialiasing(&mut self, enabled: bool);

    fn save(&mut self);

    fn restore(&mut self);

    fn translate(&mut self, dx: f64, dy: f64);

    /// Clockwise on screen, in degrees.
    fn rotate(&mut self, degrees: f64);

    fn fill_rounded_rect(&mut self, rect: RectF, x_radius: f64, y_radius: f64, color: Rgba);
}
