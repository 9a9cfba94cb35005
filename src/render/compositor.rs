use std::sync::{Mutex, PoisonError};

use image::RgbaImage;

use crate::foundation::core::{Color, PixelPos};
use crate::foundation::error::{ZonemapError, ZonemapResult};
use crate::raster::shapes::{draw_filled_circle, draw_filled_ellipse};
use crate::render::config::{RenderConfig, RenderThreading};
use crate::scene::model::{MatchSnapshot, PlayerRecord, ZoneRecord};
use crate::text::glyphs::GlyphSource;
use crate::text::overlay::draw_text;
use crate::transform::projection::MapProjection;

/// Baseline origin of the player count label.
pub const PLAYER_COUNT_ORIGIN: PixelPos = PixelPos::new(10, 20);
/// Baseline origin of the zone count label.
pub const ZONE_COUNT_ORIGIN: PixelPos = PixelPos::new(10, 40);

/// What a render actually drew.
#[derive(Debug, Default)]
pub struct RenderStats {
    /// Player markers drawn (one per player).
    pub players_drawn: usize,
    /// Player name labels drawn.
    pub labels_drawn: usize,
    /// Safe zones drawn.
    pub zones_drawn: usize,
    /// Safe zones skipped because a field did not parse, in input order.
    pub zones_skipped: Vec<ZonemapError>,
}

/// Colour of the zone at `index`: the base colour for the first zone, then the same RGB with
/// alpha divided by `index + 1` (integer division).
pub fn zone_color(base: Color, index: usize) -> Color {
    if index == 0 {
        return base;
    }
    let a = usize::from(base.a) / index.saturating_add(1);
    base.with_alpha(a as u8)
}

/// Draws a [`MatchSnapshot`] onto a map image.
///
/// Rendering runs in three phases:
///
/// 1. **Players**, one task per player. Projection runs unlocked; the marker and optional name
///    label of a player are drawn together under a single lock on the image.
/// 2. **Safe zones**, after every player task has finished, in input order. Zones whose fields
///    do not parse are reported and skipped.
/// 3. **Summary labels** with the player and zone counts.
pub struct Compositor<'a> {
    config: RenderConfig,
    glyphs: &'a dyn GlyphSource,
    threading: RenderThreading,
}

impl<'a> Compositor<'a> {
    /// Validate `config` and build a compositor drawing text with `glyphs`.
    pub fn new(config: RenderConfig, glyphs: &'a dyn GlyphSource) -> ZonemapResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            glyphs,
            threading: RenderThreading::default(),
        })
    }

    /// Replace the player-phase scheduling.
    pub fn with_threading(mut self, threading: RenderThreading) -> Self {
        self.threading = threading;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `snapshot` onto `canvas` and hand the image back.
    ///
    /// Only thread-pool setup can fail; malformed zones end up in
    /// [`RenderStats::zones_skipped`].
    #[tracing::instrument(
        skip_all,
        fields(
            width = canvas.width(),
            height = canvas.height(),
            players = snapshot.players().len(),
            zones = snapshot.zones().len()
        )
    )]
    pub fn render(
        &self,
        canvas: RgbaImage,
        snapshot: &MatchSnapshot,
    ) -> ZonemapResult<(RgbaImage, RenderStats)> {
        let proj = MapProjection::new(self.config.world_extent, canvas.width(), canvas.height());
        let players = snapshot.players();
        let zones = snapshot.zones();

        let mut canvas = self.draw_players(canvas, players, proj)?;
        let mut stats = RenderStats {
            players_drawn: players.len(),
            labels_drawn: players.iter().filter(|p| self.wants_label(p)).count(),
            ..RenderStats::default()
        };
        tracing::debug!(
            players = stats.players_drawn,
            labels = stats.labels_drawn,
            "players drawn"
        );

        self.draw_zones(&mut canvas, zones, proj, &mut stats);
        tracing::debug!(
            drawn = stats.zones_drawn,
            skipped = stats.zones_skipped.len(),
            "safe zones drawn"
        );

        self.draw_summary(&mut canvas, players.len(), zones.len());
        Ok((canvas, stats))
    }

    fn wants_label(&self, player: &PlayerRecord) -> bool {
        self.config.show_names && !player.name.is_empty()
    }

    fn draw_player(&self, canvas: &mut RgbaImage, player: &PlayerRecord, at: PixelPos) {
        draw_filled_circle(
            canvas,
            at,
            self.config.marker_radius,
            self.config.marker_color,
        );
        if self.wants_label(player) {
            draw_text(
                canvas,
                at.offset(self.config.name_offset),
                &player.name,
                self.config.name_color,
                self.glyphs,
            );
        }
    }

    #[tracing::instrument(
        skip_all,
        fields(players = players.len(), parallel = self.threading.parallel)
    )]
    fn draw_players(
        &self,
        mut canvas: RgbaImage,
        players: &[PlayerRecord],
        proj: MapProjection,
    ) -> ZonemapResult<RgbaImage> {
        if !self.threading.parallel {
            for player in players {
                self.draw_player(&mut canvas, player, proj.project(player.position.xy()));
            }
            return Ok(canvas);
        }

        let pool = self.threading.build_pool()?;
        let shared = Mutex::new(canvas);
        // Both scopes return only after every spawned task has finished.
        match &pool {
            Some(pool) => pool.scope(|s| self.spawn_players(s, &shared, players, proj)),
            None => rayon::scope(|s| self.spawn_players(s, &shared, players, proj)),
        }
        Ok(shared.into_inner().unwrap_or_else(PoisonError::into_inner))
    }

    fn spawn_players<'scope>(
        &'scope self,
        s: &rayon::Scope<'scope>,
        shared: &'scope Mutex<RgbaImage>,
        players: &'scope [PlayerRecord],
        proj: MapProjection,
    ) {
        for player in players {
            s.spawn(move |_| {
                let at = proj.project(player.position.xy());
                let mut canvas = shared.lock().unwrap_or_else(PoisonError::into_inner);
                self.draw_player(&mut canvas, player, at);
            });
        }
    }

    #[tracing::instrument(skip_all, fields(zones = zones.len()))]
    fn draw_zones(
        &self,
        canvas: &mut RgbaImage,
        zones: &[ZoneRecord],
        proj: MapProjection,
        stats: &mut RenderStats,
    ) {
        for (index, zone) in zones.iter().enumerate() {
            let geom = match zone.parse(index) {
                Ok(geom) => geom,
                Err(err) => {
                    tracing::warn!(zone = index, %err, "skipping safe zone");
                    stats.zones_skipped.push(err);
                    continue;
                }
            };
            draw_filled_ellipse(
                canvas,
                proj.project(geom.center),
                proj.scale_radius(geom.radius),
                zone_color(self.config.zone_color, index),
            );
            stats.zones_drawn += 1;
        }
    }

    #[tracing::instrument(skip_all)]
    fn draw_summary(&self, canvas: &mut RgbaImage, players: usize, zones: usize) {
        let color = self.config.name_color;
        draw_text(
            canvas,
            PLAYER_COUNT_ORIGIN,
            &format!("Players: {players}"),
            color,
            self.glyphs,
        );
        draw_text(
            canvas,
            ZONE_COUNT_ORIGIN,
            &format!("Safe Zones: {zones}"),
            color,
            self.glyphs,
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
