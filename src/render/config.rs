use crate::foundation::core::Color;
use crate::foundation::error::{ZonemapError, ZonemapResult};

/// Default world extent in game units (centimetres on an 8 km map).
pub const DEFAULT_WORLD_EXTENT: f64 = 800_000.0;

/// Immutable drawing parameters for one render.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// World units spanned by the map on each axis.
    pub world_extent: f64,
    /// Player marker radius in pixels.
    pub marker_radius: i32,
    /// Player marker colour.
    pub marker_color: Color,
    /// Colour of player names and summary labels.
    pub name_color: Color,
    /// Base safe-zone colour; its alpha drives the blend.
    pub zone_color: Color,
    /// Draw player names next to markers.
    pub show_names: bool,
    /// Pixel offset (both axes) from the marker centre to the name baseline origin.
    pub name_offset: i32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            world_extent: DEFAULT_WORLD_EXTENT,
            marker_radius: 3,
            marker_color: Color::rgb(0xFF, 0x00, 0x00),
            name_color: Color::rgb(0x05, 0xED, 0x0A),
            zone_color: Color::rgba(0x00, 0xFF, 0x00, 0x80),
            show_names: true,
            name_offset: 5,
        }
    }
}

impl RenderConfig {
    /// Reject values the rasterizers cannot work with.
    pub fn validate(&self) -> ZonemapResult<()> {
        if !(self.world_extent.is_finite() && self.world_extent > 0.0) {
            return Err(ZonemapError::validation(format!(
                "world extent must be a positive finite number, got {}",
                self.world_extent
            )));
        }
        if self.marker_radius < 0 {
            return Err(ZonemapError::validation(format!(
                "marker radius must be >= 0, got {}",
                self.marker_radius
            )));
        }
        Ok(())
    }
}

/// How the player phase is scheduled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderThreading {
    /// One task per player when `true`; a plain loop in input order otherwise.
    pub parallel: bool,
    /// Dedicated rayon pool size. `None` uses the global pool.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
        }
    }
}

impl RenderThreading {
    /// Single-threaded rendering.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            threads: None,
        }
    }

    pub(crate) fn build_pool(&self) -> ZonemapResult<Option<rayon::ThreadPool>> {
        let Some(n) = self.threads else {
            return Ok(None);
        };
        if n == 0 {
            return Err(ZonemapError::validation(
                "render threading 'threads' must be >= 1 when set",
            ));
        }
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build()
            .map(Some)
            .map_err(|e| ZonemapError::validation(format!("failed to build rayon thread pool: {e}")))
    }
}
