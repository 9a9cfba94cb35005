pub use kurbo::{Point, Vec2};

/// Straight (non-premultiplied) RGBA8 colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 is fully opaque.
    pub a: u8,
}

impl Color {
    /// Build a colour from its four channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build a fully opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same RGB, different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// The pixel value written into an [`image::RgbaImage`].
    pub const fn to_pixel(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(px: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Self { r, g, b, a }
    }
}

/// Integer pixel position. May lie outside the image; rasterizers clip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelPos {
    /// Column, growing to the right.
    pub x: i32,
    /// Row, growing downwards.
    pub y: i32,
}

impl PixelPos {
    /// Build a pixel position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift both axes by the same amount, saturating at the `i32` range.
    pub fn offset(self, d: i32) -> Self {
        Self {
            x: self.x.saturating_add(d),
            y: self.y.saturating_add(d),
        }
    }
}
