//! World-space to pixel-space mapping.
//!
//! World coordinates live in `[0, extent]` on both axes with Y growing upwards. Pixel rows grow
//! downwards, so the vertical axis is flipped. Scaling is bounds-inclusive: `extent` lands on the
//! last pixel column/row, not one past it.

use crate::foundation::core::{PixelPos, Point, Vec2};

/// Uniform linear mapping from a square world extent onto an image.
///
/// Cheap to copy and free of shared state, so every player task holds its own copy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapProjection {
    extent: f64,
    span: Vec2, // (width - 1, height - 1)
}

impl MapProjection {
    /// Build the projection for an image of `width` x `height` pixels.
    ///
    /// `extent` must be finite and positive; [`crate::RenderConfig::validate`] enforces that
    /// before rendering starts.
    pub fn new(extent: f64, width: u32, height: u32) -> Self {
        Self {
            extent,
            span: Vec2::new(
                f64::from(width.saturating_sub(1)),
                f64::from(height.saturating_sub(1)),
            ),
        }
    }

    /// Pixels per world unit on each axis.
    pub fn scale(&self) -> Vec2 {
        Vec2::new(self.span.x / self.extent, self.span.y / self.extent)
    }

    /// Map a world position to a pixel, truncating toward zero.
    ///
    /// Positions outside `[0, extent]` map outside the image.
    pub fn project(&self, world: Point) -> PixelPos {
        let x = world.x * self.span.x / self.extent;
        let y = self.span.y - world.y * self.span.y / self.extent;
        PixelPos::new(x as i32, y as i32)
    }

    /// Per-axis pixel radii of a world-space distance.
    pub fn scale_radius(&self, size: f64) -> Vec2 {
        Vec2::new(size * self.span.x / self.extent, size * self.span.y / self.extent)
    }
}

/// One-shot form of [`MapProjection::project`].
pub fn project(world_x: f64, world_y: f64, extent: f64, width: u32, height: u32) -> PixelPos {
    MapProjection::new(extent, width, height).project(Point::new(world_x, world_y))
}

#[cfg(test)]
#[path = "../../tests/unit/transform/projection.rs"]
mod tests;
