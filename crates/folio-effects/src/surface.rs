//! Drawing surface abstraction.

/// Dimensions of a drawing surface in virtual pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether nothing can be drawn on a surface of this size.
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Something the particle field can paint onto.
///
/// Coordinates are virtual pixels; `alpha` is an opacity in `0.0..=1.0`.
/// Implementations clip shapes that fall outside their bounds.
pub trait Surface {
    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Draw a filled circle.
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, alpha: f32);

    /// Draw a one pixel wide line.
    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), alpha: f32);
}
