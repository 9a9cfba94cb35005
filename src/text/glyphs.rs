use std::path::Path;

use font8x8::UnicodeFonts as _;

use crate::foundation::error::{ZonemapError, ZonemapResult};

/// Coverage at or above this value counts as a stroke pixel.
pub const STROKE_THRESHOLD: u8 = 128;

/// A rasterized glyph positioned relative to the pen and the baseline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphMask {
    /// Horizontal offset of the mask's left column from the pen position.
    pub left: i32,
    /// Vertical offset of the mask's top row from the baseline (negative is above).
    pub top: i32,
    /// Mask width in pixels.
    pub width: u32,
    /// Mask height in pixels.
    pub height: u32,
    /// Pen advance after this glyph.
    pub advance: i32,
    /// Row-major 8-bit coverage, `width * height` entries.
    pub coverage: Vec<u8>,
}

impl GlyphMask {
    /// Iterate `(column, row)` of every stroke pixel.
    pub fn strokes(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let w = self.width.max(1);
        self.coverage
            .iter()
            .enumerate()
            .filter(|(_, c)| **c >= STROKE_THRESHOLD)
            .map(move |(i, _)| ((i as u32) % w, (i as u32) / w))
    }
}

/// Fixed text-rendering capability used by [`crate::draw_text`].
///
/// Implementations are shared by every player task, hence `Send + Sync`.
pub trait GlyphSource: Send + Sync {
    /// Mask for `ch`, or `None` when the font has no glyph for it.
    fn glyph(&self, ch: char) -> Option<GlyphMask>;

    /// Pen advance used for characters without a glyph.
    fn fallback_advance(&self) -> i32;
}

/// Built-in 8x8 bitmap font (basic Latin plus Latin-1), optionally scaled by an integer factor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitmapFont {
    scale: u32,
}

impl Default for BitmapFont {
    fn default() -> Self {
        Self { scale: 1 }
    }
}

impl BitmapFont {
    const CELL: u32 = 8;
    // Rows above the baseline; the last row holds descenders.
    const ASCENT: u32 = 7;

    /// Bitmap font with every glyph pixel drawn as a `scale` x `scale` block (minimum 1).
    pub fn with_scale(scale: u32) -> Self {
        Self {
            scale: scale.max(1),
        }
    }

    /// Current integer scale factor.
    pub fn scale(&self) -> u32 {
        self.scale
    }
}

impl GlyphSource for BitmapFont {
    fn glyph(&self, ch: char) -> Option<GlyphMask> {
        let rows = font8x8::BASIC_FONTS
            .get(ch)
            .or_else(|| font8x8::LATIN_FONTS.get(ch))?;

        let s = self.scale;
        let size = Self::CELL * s;
        let mut coverage = vec![0u8; (size * size) as usize];
        for (row, bits) in (0u32..).zip(rows) {
            for col in 0..Self::CELL {
                // Bit 0 is the leftmost pixel.
                if bits & (1u8 << col) == 0 {
                    continue;
                }
                for sy in 0..s {
                    let start = ((row * s + sy) * size + col * s) as usize;
                    coverage[start..start + s as usize].fill(u8::MAX);
                }
            }
        }

        Some(GlyphMask {
            left: 0,
            top: -((Self::ASCENT * s) as i32),
            width: size,
            height: size,
            advance: size as i32,
            coverage,
        })
    }

    fn fallback_advance(&self) -> i32 {
        (Self::CELL * self.scale) as i32
    }
}

/// TrueType/OpenType font rasterized with `fontdue` at a fixed pixel size.
pub struct TtfFont {
    font: fontdue::Font,
    px: f32,
}

impl std::fmt::Debug for TtfFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtfFont")
            .field("px", &self.px)
            .finish_non_exhaustive()
    }
}

impl TtfFont {
    /// Parse font bytes.
    pub fn from_bytes(bytes: &[u8], px: f32) -> ZonemapResult<Self> {
        if !(px.is_finite() && px > 0.0) {
            return Err(ZonemapError::validation(format!(
                "font size must be a positive number of pixels, got {px}"
            )));
        }
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| ZonemapError::font_load(format!("parse font: {e}")))?;
        Ok(Self { font, px })
    }

    /// Read and parse a font file.
    pub fn from_path(path: impl AsRef<Path>, px: f32) -> ZonemapResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            ZonemapError::font_load(format!("read font '{}': {e}", path.display()))
        })?;
        Self::from_bytes(&bytes, px)
    }
}

impl GlyphSource for TtfFont {
    fn glyph(&self, ch: char) -> Option<GlyphMask> {
        if self.font.lookup_glyph_index(ch) == 0 {
            return None;
        }
        let (metrics, coverage) = self.font.rasterize(ch, self.px);
        Some(GlyphMask {
            left: metrics.xmin,
            // `ymin` is the bitmap's bottom edge relative to the baseline, growing upwards.
            top: -(metrics.ymin + metrics.height as i32),
            width: metrics.width as u32,
            height: metrics.height as u32,
            advance: metrics.advance_width.round() as i32,
            coverage,
        })
    }

    fn fallback_advance(&self) -> i32 {
        (self.px / 2.0).round() as i32
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/glyphs.rs"]
mod tests;
