use super::*;
use serde_json::json;

fn sample() -> serde_json::Value {
    json!({
        "inGameData": {
            "TotalPlayerList": [
                { "uId": 7, "playerName": "alpha", "location": { "x": 1.5, "y": 2.5, "z": 3.5 } },
                { "uId": 8, "playerName": "", "location": { "x": 0.0, "y": 0.0, "z": 0.0 } }
            ]
        },
        "gameGlobalInfo": {
            "CircleArray": [
                { "X": "400000", "Y": "300000.5", "Size": "1e5" },
                { "X": "abc", "Y": "1", "Size": "2" }
            ]
        },
        "unrelated": { "ignored": true }
    })
}

#[test]
fn decodes_players_and_zones_in_order() {
    let snap: MatchSnapshot = serde_json::from_value(sample()).unwrap();
    assert_eq!(snap.players().len(), 2);
    assert_eq!(snap.players()[0].id, 7);
    assert_eq!(snap.players()[0].name, "alpha");
    assert_eq!(
        snap.players()[0].position,
        WorldPoint {
            x: 1.5,
            y: 2.5,
            z: 3.5
        }
    );
    assert_eq!(snap.zones().len(), 2);
    assert_eq!(snap.zones()[1].x, "abc");
}

#[test]
fn missing_sections_decode_empty() {
    let snap = MatchSnapshot::from_json_str("{}").unwrap();
    assert!(snap.players().is_empty());
    assert!(snap.zones().is_empty());

    let snap = MatchSnapshot::from_json_str(r#"{"inGameData":{}}"#).unwrap();
    assert!(snap.players().is_empty());
}

#[test]
fn malformed_json_is_data_decode_error() {
    let err = MatchSnapshot::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ZonemapError::DataDecode(_)));

    // Zone fields are text in the document schema.
    let err = MatchSnapshot::from_json_str(r#"{"gameGlobalInfo":{"CircleArray":[{"X":1}]}}"#)
        .unwrap_err();
    assert!(matches!(err, ZonemapError::DataDecode(_)));
}

#[test]
fn missing_file_names_the_path() {
    let err = MatchSnapshot::from_path("target/definitely/missing.json").unwrap_err();
    assert!(matches!(err, ZonemapError::DataDecode(_)));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn zone_parse_accepts_decimal_and_exponent_forms() {
    let snap: MatchSnapshot = serde_json::from_value(sample()).unwrap();
    let g = snap.zones()[0].parse(0).unwrap();
    assert_eq!(g.center, Point::new(400000.0, 300000.5));
    assert_eq!(g.radius, 100000.0);
}

#[test]
fn zone_parse_error_names_index_field_and_value() {
    let snap: MatchSnapshot = serde_json::from_value(sample()).unwrap();
    match snap.zones()[1].parse(1).unwrap_err() {
        ZonemapError::ZoneParse {
            index,
            field,
            value,
        } => {
            assert_eq!(index, 1);
            assert_eq!(field, "X");
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error: {other}"),
    }

    let bad_size = ZoneRecord {
        x: "1".into(),
        y: "2".into(),
        size: " 3".into(),
    };
    assert!(matches!(
        bad_size.parse(4),
        Err(ZonemapError::ZoneParse {
            index: 4,
            field: "Size",
            ..
        })
    ));
}

#[test]
fn zone_parse_rejects_values_out_of_f64_range() {
    let huge_size = ZoneRecord {
        x: "400000".into(),
        y: "400000".into(),
        size: "1e400".into(),
    };
    assert!(matches!(
        huge_size.parse(2),
        Err(ZonemapError::ZoneParse {
            index: 2,
            field: "Size",
            ..
        })
    ));

    let huge_x = ZoneRecord {
        x: "-1e400".into(),
        y: "0".into(),
        size: "1".into(),
    };
    assert!(matches!(
        huge_x.parse(0),
        Err(ZonemapError::ZoneParse { field: "X", .. })
    ));

    // Tiny values underflow to zero and still parse.
    let tiny = ZoneRecord {
        x: "1e-400".into(),
        y: "0".into(),
        size: "1".into(),
    };
    assert_eq!(tiny.parse(0).unwrap().center, Point::new(0.0, 0.0));
}

#[test]
fn zone_parse_accepts_spelled_out_infinity() {
    let zone = ZoneRecord {
        x: "0".into(),
        y: "-Infinity".into(),
        size: "inf".into(),
    };
    let g = zone.parse(0).unwrap();
    assert_eq!(g.center.y, f64::NEG_INFINITY);
    assert_eq!(g.radius, f64::INFINITY);
}

#[test]
fn zone_new_round_trips_through_parse() {
    let g = ZoneRecord::new(1.25, -2.0, 3e5).parse(0).unwrap();
    assert_eq!(g.center, Point::new(1.25, -2.0));
    assert_eq!(g.radius, 3e5);
}

#[test]
fn snapshot_new_exposes_records() {
    let snap = MatchSnapshot::new(
        vec![PlayerRecord {
            id: 1,
            name: "p".into(),
            position: WorldPoint::default(),
        }],
        vec![ZoneRecord::new(0.0, 0.0, 1.0)],
    );
    assert_eq!(snap.players().len(), 1);
    assert_eq!(snap.zones().len(), 1);
    assert_eq!(snap.players()[0].position.xy(), Point::new(0.0, 0.0));
}
