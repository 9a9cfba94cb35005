use std::path::Path;

use image::RgbaImage;

use crate::foundation::error::{ZonemapError, ZonemapResult};

/// Decode encoded image bytes (any format `image` supports) into straight RGBA8.
pub fn decode_map_image(bytes: &[u8]) -> ZonemapResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| ZonemapError::image_decode(format!("decode image from memory: {e}")))?;
    Ok(dyn_img.to_rgba8())
}

/// Read and decode the base map into straight RGBA8.
pub fn load_map_image(path: impl AsRef<Path>) -> ZonemapResult<RgbaImage> {
    let path = path.as_ref();
    let dyn_img = image::open(path)
        .map_err(|e| ZonemapError::image_decode(format!("open map '{}': {e}", path.display())))?;
    Ok(dyn_img.to_rgba8())
}

/// Encode `img` as PNG at `path`, creating parent directories as needed.
pub fn save_png(path: impl AsRef<Path>, img: &RgbaImage) -> ZonemapResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            ZonemapError::image_encode(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| ZonemapError::image_encode(format!("write png '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/image_io.rs"]
mod tests;
