use super::*;

#[test]
fn bitmap_letters_have_strokes_and_space_has_none() {
    let font = BitmapFont::default();
    let a = font.glyph('A').unwrap();
    assert_eq!((a.width, a.height, a.advance, a.top), (8, 8, 8, -7));
    assert_eq!(a.coverage.len(), 64);
    assert!(a.strokes().count() > 0);

    let space = font.glyph(' ').unwrap();
    assert_eq!(space.strokes().count(), 0);
    assert_eq!(space.advance, 8);
}

#[test]
fn bitmap_covers_latin1() {
    let font = BitmapFont::default();
    assert!(font.glyph('é').is_some());
}

#[test]
fn bitmap_has_no_cjk_glyphs() {
    let font = BitmapFont::default();
    assert!(font.glyph('\u{4e00}').is_none());
    assert_eq!(font.fallback_advance(), 8);
}

#[test]
fn bitmap_scale_multiplies_strokes_and_metrics() {
    let one = BitmapFont::default().glyph('W').unwrap();
    let three = BitmapFont::with_scale(3).glyph('W').unwrap();
    assert_eq!((three.width, three.height, three.advance), (24, 24, 24));
    assert_eq!(three.top, -21);
    assert_eq!(three.strokes().count(), one.strokes().count() * 9);

    // Every scaled stroke maps back onto an unscaled stroke.
    let base: Vec<_> = one.strokes().collect();
    assert!(three.strokes().all(|(x, y)| base.contains(&(x / 3, y / 3))));
}

#[test]
fn bitmap_scale_zero_is_clamped() {
    assert_eq!(BitmapFont::with_scale(0).scale(), 1);
}

#[test]
fn strokes_apply_threshold() {
    let mask = GlyphMask {
        left: 0,
        top: 0,
        width: 2,
        height: 2,
        advance: 2,
        coverage: vec![0, 127, 128, 255],
    };
    assert_eq!(mask.strokes().collect::<Vec<_>>(), vec![(0, 1), (1, 1)]);
}

#[test]
fn ttf_rejects_garbage_bytes_and_bad_sizes() {
    assert!(matches!(
        TtfFont::from_bytes(b"not a font", 13.0),
        Err(ZonemapError::FontLoad(_))
    ));
    assert!(matches!(
        TtfFont::from_bytes(b"not a font", 0.0),
        Err(ZonemapError::Validation(_))
    ));
}

#[test]
fn ttf_missing_file_is_font_load_error() {
    let err = TtfFont::from_path("target/definitely/missing.ttf", 13.0).unwrap_err();
    assert!(matches!(err, ZonemapError::FontLoad(_)));
    assert!(err.to_string().contains("missing.ttf"));
}
