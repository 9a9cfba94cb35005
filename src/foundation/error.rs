/// Convenience result type used across zonemap.
pub type ZonemapResult<T> = Result<T, ZonemapError>;

/// Top-level error taxonomy used by zonemap APIs.
#[derive(thiserror::Error, Debug)]
pub enum ZonemapError {
    /// A colour string is not `#RRGGBB` or `#RRGGBBAA`.
    #[error("invalid color {value:?}: {reason}")]
    ColorFormat {
        /// The offending input text.
        value: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A safe-zone record carries a non-numeric field. Non-fatal during rendering.
    #[error("zone {index}: failed to parse {field} from {value:?}")]
    ZoneParse {
        /// Position of the zone in the input sequence (0-based).
        index: usize,
        /// Name of the field as it appears in the document (`X`, `Y` or `Size`).
        field: &'static str,
        /// The offending text.
        value: String,
    },

    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// The base map image could not be read or decoded.
    #[error("image decode error: {0}")]
    ImageDecode(String),

    /// The match snapshot document could not be read or decoded.
    #[error("data decode error: {0}")]
    DataDecode(String),

    /// The output image could not be encoded or written.
    #[error("image encode error: {0}")]
    ImageEncode(String),

    /// A font file could not be read or parsed.
    #[error("font load error: {0}")]
    FontLoad(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ZonemapError {
    /// Build a [`ZonemapError::ColorFormat`] value.
    pub fn color_format(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ColorFormat {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Build a [`ZonemapError::ZoneParse`] value.
    pub fn zone_parse(index: usize, field: &'static str, value: impl Into<String>) -> Self {
        Self::ZoneParse {
            index,
            field,
            value: value.into(),
        }
    }

    /// Build a [`ZonemapError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ZonemapError::ImageDecode`] value.
    pub fn image_decode(msg: impl Into<String>) -> Self {
        Self::ImageDecode(msg.into())
    }

    /// Build a [`ZonemapError::DataDecode`] value.
    pub fn data_decode(msg: impl Into<String>) -> Self {
        Self::DataDecode(msg.into())
    }

    /// Build a [`ZonemapError::ImageEncode`] value.
    pub fn image_encode(msg: impl Into<String>) -> Self {
        Self::ImageEncode(msg.into())
    }

    /// Build a [`ZonemapError::FontLoad`] value.
    pub fn font_load(msg: impl Into<String>) -> Self {
        Self::FontLoad(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
