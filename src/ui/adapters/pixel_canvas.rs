//! Software rasterizer behind the terminal painter.
//!
//! Pixels live on integer coordinates: pixel `(x, y)` is centered on
//! `(x, y)` and covers `[x - 0.5, x + 0.5]`. Shapes are composited
//! source-over into straight-alpha RGBA, then flushed into a ratatui buffer
//! as upper half blocks, so one cell shows two vertically stacked pixels.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

use pinwheel_app::ports::Painter;
use pinwheel_domain::{PointF, RectF, Rgba, Size};

/// Samples per axis when anti-aliasing.
const SUPERSAMPLE: u32 = 4;

const UPPER_HALF_BLOCK: &str = "▀";

/// Affine map `x' = a·x + c·y + e`, `y' = b·x + d·y + f`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Transform {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
}

impl Transform {
    const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            e: self.a * dx + self.c * dy + self.e,
            f: self.b * dx + self.d * dy + self.f,
            ..self
        }
    }

    fn rotated(self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            a: self.a * cos + self.c * sin,
            b: self.b * cos + self.d * sin,
            c: self.c * cos - self.a * sin,
            d: self.d * cos - self.b * sin,
            ..self
        }
    }

    fn map(&self, p: PointF) -> PointF {
        PointF::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    fn inverse(&self) -> Option<Self> {
        let det = self.a * self.d - self.b * self.c;
        if det.abs() < f64::EPSILON {
            return None;
        }
        Some(Self {
            a: self.d / det,
            b: -self.b / det,
            c: -self.c / det,
            d: self.a / det,
            e: (self.c * self.f - self.d * self.e) / det,
            f: (self.b * self.e - self.a * self.f) / det,
        })
    }
}

pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
    transform: Transform,
    saved: Vec<Transform>,
    antialiasing: bool,
}

impl PixelCanvas {
    pub fn new(size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
            pixels: vec![Rgba::TRANSPARENT; size.width as usize * size.height as usize],
            transform: Transform::IDENTITY,
            saved: Vec::new(),
            antialiasing: false,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Transparent for coordinates outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        if x >= self.width || y >= self.height {
            return Rgba::TRANSPARENT;
        }
        self.pixels[self.index(x, y)]
    }

    pub fn painted_pixels(&self) -> usize {
        self.pixels.iter().filter(|p| !p.is_transparent()).count()
    }

    /// Writes the canvas into `area`, two pixel rows per cell row. Cells
    /// whose pixels are both transparent are left untouched.
    pub fn flush(&self, area: Rect, buf: &mut Buffer, background: Rgba) {
        let rows = u32::from(area.height).min(self.height.div_ceil(2));
        let cols = u32::from(area.width).min(self.width);

        for row in 0..rows {
            for col in 0..cols {
                let top = self.pixel(col, row * 2);
                let bottom = self.pixel(col, row * 2 + 1);
                if top.is_transparent() && bottom.is_transparent() {
                    continue;
                }

                let position = (area.x + col as u16, area.y + row as u16);
                if let Some(cell) = buf.cell_mut(position) {
                    cell.set_symbol(UPPER_HALF_BLOCK)
                        .set_fg(composite(top, background))
                        .set_bg(composite(bottom, background));
                }
            }
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn blend(&mut self, x: u32, y: u32, src: Rgba) {
        let idx = self.index(x, y);
        let dst = self.pixels[idx];

        let out_a = src.a + dst.a * (1.0 - src.a);
        if out_a <= 0.0 {
            self.pixels[idx] = Rgba::TRANSPARENT;
            return;
        }

        let mix = |s: u8, d: u8| -> u8 {
            let value =
                (f64::from(s) * src.a + f64::from(d) * dst.a * (1.0 - src.a)) / out_a;
            value.round().clamp(0.0, 255.0) as u8
        };
        self.pixels[idx] = Rgba {
            r: mix(src.r, dst.r),
            g: mix(src.g, dst.g),
            b: mix(src.b, dst.b),
            a: out_a.min(1.0),
        };
    }

    /// Fraction of pixel `(x, y)` covered by the shape, in local coordinates
    /// reached through `inverse`.
    fn coverage(
        &self,
        inverse: &Transform,
        rect: &RectF,
        x_radius: f64,
        y_radius: f64,
        x: u32,
        y: u32,
    ) -> f64 {
        let (px, py) = (f64::from(x), f64::from(y));

        if !self.antialiasing {
            let local = inverse.map(PointF::new(px, py));
            return if rect.rounded_contains(local, x_radius, y_radius) {
                1.0
            } else {
                0.0
            };
        }

        let step = 1.0 / f64::from(SUPERSAMPLE);
        let mut hits = 0u32;
        for sy in 0..SUPERSAMPLE {
            for sx in 0..SUPERSAMPLE {
                let sample = PointF::new(
                    px - 0.5 + (f64::from(sx) + 0.5) * step,
                    py - 0.5 + (f64::from(sy) + 0.5) * step,
                );
                if rect.rounded_contains(inverse.map(sample), x_radius, y_radius) {
                    hits += 1;
                }
            }
        }
        f64::from(hits) / f64::from(SUPERSAMPLE * SUPERSAMPLE)
    }
}

impl Painter for PixelCanvas {
    fn set_antialiasing(&mut self, enabled: bool) {
        self.antialiasing = enabled;
    }

    fn save(&mut self) {
        self.saved.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(transform) = self.saved.pop() {
            self.transform = transform;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform = self.transform.translated(dx, dy);
    }

    fn rotate(&mut self, degrees: f64) {
        self.transform = self.transform.rotated(degrees);
    }

    fn fill_rounded_rect(&mut self, rect: RectF, x_radius: f64, y_radius: f64, color: Rgba) {
        if color.is_transparent() || self.size().is_empty() {
            return;
        }
        let Some(inverse) = self.transform.inverse() else {
            return;
        };

        let corners = rect.corners().map(|corner| self.transform.map(corner));
        let min_x = corners.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let max_x = corners.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let min_y = corners.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = corners.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

        let last_x = f64::from(self.width - 1);
        let last_y = f64::from(self.height - 1);
        if max_x < -0.5 || max_y < -0.5 || min_x > last_x + 0.5 || min_y > last_y + 0.5 {
            return;
        }

        let x0 = (min_x - 0.5).floor().max(0.0) as u32;
        let x1 = (max_x + 0.5).ceil().min(last_x) as u32;
        let y0 = (min_y - 0.5).floor().max(0.0) as u32;
        let y1 = (max_y + 0.5).ceil().min(last_y) as u32;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let coverage = self.coverage(&inverse, &rect, x_radius, y_radius, x, y);
                if coverage > 0.0 {
                    self.blend(x, y, color.with_alpha(color.a * coverage));
                }
            }
        }
    }
}

fn composite(pixel: Rgba, background: Rgba) -> Color {
    let (r, g, b) = pixel.over(background);
    Color::Rgb(r, g, b)
}
