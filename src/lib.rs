//! zonemap renders a multiplayer match snapshot onto a map image.
//!
//! Given a decoded base map and a [`MatchSnapshot`] (player positions plus a list of safe-zone
//! circles), a [`Compositor`] draws:
//!
//! 1. an opaque marker per player, with an optional name label, one concurrent task per player
//!    writing into the shared image under a single lock;
//! 2. every safe zone as an alpha-tinted ellipse, in input order, each later zone fainter than
//!    the one before (alpha divided by `index + 1`);
//! 3. two summary lines with the player and zone counts.
//!
//! The design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No writes outside the image**: every primitive clips before touching pixels.
//! - **No IO in the compositor**: decoding and encoding live in [`load_map_image`],
//!   [`save_png`] and [`MatchSnapshot::from_path`].
//! - **One bad zone is not fatal**: it is skipped and reported in [`RenderStats`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;
mod raster;
mod render;
mod scene;
mod text;
mod transform;

pub use assets::image_io::{decode_map_image, load_map_image, save_png};
pub use foundation::color::parse_hex_color;
pub use foundation::core::{Color, PixelPos, Point, Vec2};
pub use foundation::error::{ZonemapError, ZonemapResult};
pub use raster::shapes::{draw_filled_circle, draw_filled_ellipse};
pub use render::compositor::{
    Compositor, PLAYER_COUNT_ORIGIN, RenderStats, ZONE_COUNT_ORIGIN, zone_color,
};
pub use render::config::{DEFAULT_WORLD_EXTENT, RenderConfig, RenderThreading};
pub use scene::model::{MatchSnapshot, PlayerRecord, WorldPoint, ZoneGeometry, ZoneRecord};
pub use text::glyphs::{BitmapFont, GlyphMask, GlyphSource, STROKE_THRESHOLD, TtfFont};
pub use text::overlay::draw_text;
pub use transform::projection::{MapProjection, project};
