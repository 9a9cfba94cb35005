use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::core::Point;
use crate::foundation::error::{ZonemapError, ZonemapResult};

/// Game-world position. Only `x` and `y` are projected; `z` is carried through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint {
    /// East-west coordinate.
    #[serde(default)]
    pub x: f64,
    /// North-south coordinate, growing northwards (up on the map).
    #[serde(default)]
    pub y: f64,
    /// Altitude, unused by rendering.
    #[serde(default)]
    pub z: f64,
}

impl WorldPoint {
    /// The projected plane position.
    pub fn xy(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// One match participant.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Player id.
    #[serde(rename = "uId", default)]
    pub id: i64,
    /// Display name; an empty name gets no label.
    #[serde(rename = "playerName", default)]
    pub name: String,
    /// Current position.
    #[serde(rename = "location", default)]
    pub position: WorldPoint,
}

/// One safe-zone circle as it appears in the document: numeric fields encoded as text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRecord {
    /// Centre X in world units.
    #[serde(rename = "X", default)]
    pub x: String,
    /// Centre Y in world units.
    #[serde(rename = "Y", default)]
    pub y: String,
    /// Radius in world units.
    #[serde(rename = "Size", default)]
    pub size: String,
}

/// A zone whose fields parsed as numbers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneGeometry {
    /// Centre in world units.
    pub center: Point,
    /// Radius in world units.
    pub radius: f64,
}

impl ZoneRecord {
    /// Build a record from numeric values.
    pub fn new(x: f64, y: f64, size: f64) -> Self {
        Self {
            x: x.to_string(),
            y: y.to_string(),
            size: size.to_string(),
        }
    }

    /// Parse the textual fields; `index` is the zone's position, used for error context.
    ///
    /// Values that overflow `f64` (such as `"1e400"`) are rejected; only a literal `inf` or
    /// `infinity` spelling parses as infinite.
    pub fn parse(&self, index: usize) -> ZonemapResult<ZoneGeometry> {
        let field = |name: &'static str, text: &str| -> ZonemapResult<f64> {
            match text.parse::<f64>() {
                Ok(v) if v.is_infinite() && !spells_infinity(text) => {
                    Err(ZonemapError::zone_parse(index, name, text))
                }
                Ok(v) => Ok(v),
                Err(_) => Err(ZonemapError::zone_parse(index, name, text)),
            }
        };
        Ok(ZoneGeometry {
            center: Point::new(field("X", &self.x)?, field("Y", &self.y)?),
            radius: field("Size", &self.size)?,
        })
    }
}

fn spells_infinity(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct InGameData {
    #[serde(rename = "TotalPlayerList", default)]
    players: Vec<PlayerRecord>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct GameGlobalInfo {
    #[serde(rename = "CircleArray", default)]
    zones: Vec<ZoneRecord>,
}

/// Decoded match-state document.
///
/// ```json
/// { "inGameData": { "TotalPlayerList": [ { "uId": 1, "playerName": "a",
///                                          "location": { "x": 0, "y": 0, "z": 0 } } ] },
///   "gameGlobalInfo": { "CircleArray": [ { "X": "1", "Y": "2", "Size": "3" } ] } }
/// ```
///
/// Missing sections decode as empty lists; unknown fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    #[serde(rename = "inGameData", default)]
    in_game: InGameData,
    #[serde(rename = "gameGlobalInfo", default)]
    global: GameGlobalInfo,
}

impl MatchSnapshot {
    /// Build a snapshot directly from records.
    pub fn new(players: Vec<PlayerRecord>, zones: Vec<ZoneRecord>) -> Self {
        Self {
            in_game: InGameData { players },
            global: GameGlobalInfo { zones },
        }
    }

    /// Players, in document order.
    pub fn players(&self) -> &[PlayerRecord] {
        &self.in_game.players
    }

    /// Safe zones, in document order.
    pub fn zones(&self) -> &[ZoneRecord] {
        &self.global.zones
    }

    /// Decode a snapshot from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ZonemapResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ZonemapError::data_decode(format!("parse match JSON: {e}")))
    }

    /// Decode a snapshot from a JSON string.
    pub fn from_json_str(s: &str) -> ZonemapResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| ZonemapError::data_decode(format!("parse match JSON: {e}")))
    }

    /// Decode a snapshot from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ZonemapResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ZonemapError::data_decode(format!("open match JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f)).map_err(|e| match e {
            ZonemapError::DataDecode(msg) => {
                ZonemapError::data_decode(format!("'{}': {msg}", path.display()))
            }
            other => other,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
