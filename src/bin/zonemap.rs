use std::io::IsTerminal as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;
use zonemap::{
    BitmapFont, Compositor, GlyphSource, MatchSnapshot, RenderConfig, RenderThreading, TtfFont,
    parse_hex_color,
};

#[derive(Parser, Debug)]
#[command(
    name = "zonemap",
    version,
    about = "Draw player positions, names and safe zones from a match snapshot onto a map image"
)]
struct Cli {
    /// Path to the map image.
    #[arg(long, default_value = "erangel.png")]
    map: PathBuf,

    /// Path to the match JSON data file.
    #[arg(long, default_value = "message.json")]
    data: PathBuf,

    /// Path for the output PNG.
    #[arg(long, default_value = "mapDone.png")]
    output: PathBuf,

    /// Map size in game units (typically cm).
    #[arg(long, default_value_t = zonemap::DEFAULT_WORLD_EXTENT)]
    size: f64,

    /// Radius of player markers in pixels.
    #[arg(long, default_value_t = 3)]
    player_radius: i32,

    /// Colour of player markers (#RRGGBB or #RRGGBBAA).
    #[arg(long, default_value = "#FF0000")]
    player_color: String,

    /// Colour of player names and summary labels (#RRGGBB or #RRGGBBAA).
    #[arg(long, default_value = "#05ED0A")]
    name_color: String,

    /// Colour of safe zones; the alpha channel sets the tint strength.
    #[arg(long, default_value = "#00FF0080")]
    zone_color: String,

    /// Show player names on the map.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    show_names: bool,

    /// Offset of player names from their marker, in pixels.
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    name_offset: i32,

    /// TrueType/OpenType font for labels. The built-in 8x8 bitmap font is used when omitted.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Pixel size for `--font`.
    #[arg(long, default_value_t = 13.0)]
    font_size: f32,

    /// Integer scale of the built-in bitmap font.
    #[arg(long, default_value_t = 1)]
    text_scale: u32,

    /// Draw players on the calling thread instead of one task per player.
    #[arg(long, default_value_t = false)]
    sequential: bool,

    /// Override rayon worker threads for the player phase.
    #[arg(long)]
    threads: Option<usize>,

    /// Log phase summaries (overridden by RUST_LOG).
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = render_config(&cli)?;
    let glyphs: Box<dyn GlyphSource> = match &cli.font {
        Some(path) => Box::new(TtfFont::from_path(path, cli.font_size)?),
        None => Box::new(BitmapFont::with_scale(cli.text_scale)),
    };
    let compositor = Compositor::new(config, glyphs.as_ref())?.with_threading(RenderThreading {
        parallel: !cli.sequential,
        threads: cli.threads,
    });

    let map = zonemap::load_map_image(&cli.map)?;
    let snapshot = MatchSnapshot::from_path(&cli.data)?;
    let (img, stats) = compositor.render(map, &snapshot)?;
    zonemap::save_png(&cli.output, &img)?;

    tracing::info!(
        players = stats.players_drawn,
        labels = stats.labels_drawn,
        zones = stats.zones_drawn,
        skipped_zones = stats.zones_skipped.len(),
        "render complete"
    );
    eprintln!("wrote {}", cli.output.display());
    Ok(())
}

/// Colours are parsed before any file is touched, so a typo fails fast.
fn render_config(cli: &Cli) -> anyhow::Result<RenderConfig> {
    Ok(RenderConfig {
        world_extent: cli.size,
        marker_radius: cli.player_radius,
        marker_color: parse_hex_color(&cli.player_color).context("invalid --player-color")?,
        name_color: parse_hex_color(&cli.name_color).context("invalid --name-color")?,
        zone_color: parse_hex_color(&cli.zone_color).context("invalid --zone-color")?,
        show_names: cli.show_names,
        name_offset: cli.name_offset,
    })
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
