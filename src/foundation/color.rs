use crate::foundation::core::Color;
use crate::foundation::error::{ZonemapError, ZonemapResult};

/// Parse `#RRGGBB` or `#RRGGBBAA` (case-insensitive) into a [`Color`].
///
/// Alpha defaults to 255 when omitted. Short forms, named colours and `rgb()` are rejected.
pub fn parse_hex_color(text: &str) -> ZonemapResult<Color> {
    let bytes = text.as_bytes();
    if bytes.len() != 7 && bytes.len() != 9 {
        return Err(ZonemapError::color_format(
            text,
            "hex color must be #RRGGBB or #RRGGBBAA",
        ));
    }
    if bytes[0] != b'#' {
        return Err(ZonemapError::color_format(text, "hex color must start with '#'"));
    }

    let byte_at = |i: usize| -> ZonemapResult<u8> {
        hex_byte(bytes[i], bytes[i + 1]).ok_or_else(|| {
            ZonemapError::color_format(
                text,
                format!(
                    "invalid hex byte \"{}\"",
                    String::from_utf8_lossy(&bytes[i..i + 2])
                ),
            )
        })
    };

    let r = byte_at(1)?;
    let g = byte_at(3)?;
    let b = byte_at(5)?;
    let a = if bytes.len() == 9 { byte_at(7)? } else { 255 };
    Ok(Color::rgba(r, g, b, a))
}

fn hex_byte(hi: u8, lo: u8) -> Option<u8> {
    fn nibble(c: u8) -> Option<u8> {
        char::from(c).to_digit(16).map(|d| d as u8)
    }
    Some((nibble(hi)? << 4) | nibble(lo)?)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
