use image::RgbaImage;

use crate::foundation::core::{Color, PixelPos};
use crate::text::glyphs::GlyphSource;

/// Draw `text` left to right with its baseline at `origin`.
///
/// Stroke pixels are overwritten with `color`; everything else is left alone. There is no
/// wrapping, and glyph pixels that fall outside the image are dropped.
pub fn draw_text(
    img: &mut RgbaImage,
    origin: PixelPos,
    text: &str,
    color: Color,
    glyphs: &dyn GlyphSource,
) {
    let (w, h) = img.dimensions();
    let px = color.to_pixel();
    let baseline = i64::from(origin.y);
    let mut pen = i64::from(origin.x);

    for ch in text.chars() {
        let Some(mask) = glyphs.glyph(ch) else {
            pen += i64::from(glyphs.fallback_advance());
            continue;
        };

        let left = pen + i64::from(mask.left);
        let top = baseline + i64::from(mask.top);
        for (col, row) in mask.strokes() {
            let x = left + i64::from(col);
            let y = top + i64::from(row);
            if (0..i64::from(w)).contains(&x) && (0..i64::from(h)).contains(&y) {
                img.put_pixel(x as u32, y as u32, px);
            }
        }
        pen += i64::from(mask.advance);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/overlay.rs"]
mod tests;
