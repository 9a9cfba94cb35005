//! Scan conversion of filled circles and ellipses into an RGBA8 image.
//!
//! Both primitives clip their bounding box against the image before touching any pixel, so
//! centres and radii far outside the image are fine.

use image::RgbaImage;

use crate::foundation::core::{Color, PixelPos, Vec2};

/// Inclusive pixel range `[min, max]` on both axes, already clipped to an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ClipBox {
    min_x: u32,
    max_x: u32,
    min_y: u32,
    max_y: u32,
}

impl ClipBox {
    /// Clip `[cx - ex, cx + ex] x [cy - ey, cy + ey]` to the image; `None` when empty.
    fn around(img: &RgbaImage, center: PixelPos, ex: i64, ey: i64) -> Option<Self> {
        let (w, h) = img.dimensions();
        let (cx, cy) = (i64::from(center.x), i64::from(center.y));

        let min_x = cx.saturating_sub(ex).max(0);
        let max_x = cx.saturating_add(ex).min(i64::from(w) - 1);
        let min_y = cy.saturating_sub(ey).max(0);
        let max_y = cy.saturating_add(ey).min(i64::from(h) - 1);
        if min_x > max_x || min_y > max_y {
            return None;
        }

        // All four bounds are within [0, dim - 1] here.
        Some(Self {
            min_x: min_x as u32,
            max_x: max_x as u32,
            min_y: min_y as u32,
            max_y: max_y as u32,
        })
    }
}

/// Fill a disc with an opaque overwrite (no blending).
///
/// A pixel `(i, j)` is inside when `(i - cx)² + (j - cy)² <= radius²`. Radius 0 paints only the
/// centre; a negative radius paints nothing.
pub fn draw_filled_circle(img: &mut RgbaImage, center: PixelPos, radius: i32, color: Color) {
    let r = i64::from(radius);
    let Some(clip) = ClipBox::around(img, center, r, r) else {
        return;
    };

    let px = color.to_pixel();
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));
    // |dx|, |dy| <= radius < 2^31 inside the clip box, so the squared sum fits in u64.
    let r2 = r.unsigned_abs().pow(2);
    for x in clip.min_x..=clip.max_x {
        let dx2 = (i64::from(x) - cx).unsigned_abs().pow(2);
        for y in clip.min_y..=clip.max_y {
            let dy2 = (i64::from(y) - cy).unsigned_abs().pow(2);
            if dx2 + dy2 <= r2 {
                img.put_pixel(x, y, px);
            }
        }
    }
}

/// Fill an axis-aligned ellipse, tinting the existing pixels.
///
/// Inside pixels (`dx²/rx² + dy²/ry² <= 1`) get `old * (1 - α) + color * α` on each RGB channel
/// with `α = color.a / 255`. The destination alpha is left as it was. Non-positive radii are a
/// no-op.
pub fn draw_filled_ellipse(img: &mut RgbaImage, center: PixelPos, radii: Vec2, color: Color) {
    if !(radii.x > 0.0 && radii.y > 0.0) {
        return;
    }
    let Some(clip) = ClipBox::around(img, center, radii.x as i64, radii.y as i64) else {
        return;
    };

    let rx2 = radii.x * radii.x;
    let ry2 = radii.y * radii.y;
    let alpha = f64::from(color.a) / 255.0;
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));

    for x in clip.min_x..=clip.max_x {
        let dx = (i64::from(x) - cx) as f64;
        for y in clip.min_y..=clip.max_y {
            let dy = (i64::from(y) - cy) as f64;
            if (dx * dx) / rx2 + (dy * dy) / ry2 <= 1.0 {
                let dst = img.get_pixel_mut(x, y);
                *dst = tint(*dst, color, alpha);
            }
        }
    }
}

/// RGB mix of `dst` toward `src` by `alpha`, keeping `dst`'s alpha channel.
fn tint(dst: image::Rgba<u8>, src: Color, alpha: f64) -> image::Rgba<u8> {
    let mix = |old: u8, new: u8| -> u8 {
        (f64::from(old) * (1.0 - alpha) + f64::from(new) * alpha) as u8
    };
    let [r, g, b, a] = dst.0;
    image::Rgba([mix(r, src.r), mix(g, src.g), mix(b, src.b), a])
}

#[cfg(test)]
#[path = "../../tests/unit/raster/shapes.rs"]
mod tests;
