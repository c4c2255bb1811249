use super::{dial_glyph, style_line};

#[test]
fn test_dial_glyph_quarter_turns() {
    assert_eq!(dial_glyph(0.0), '↑');
    assert_eq!(dial_glyph(90.0), '→');
    assert_eq!(dial_glyph(180.0), '↓');
    assert_eq!(dial_glyph(270.0), '←');
    assert_eq!(dial_glyph(360.0), '↑', "a full turn returns to the origin");
}

#[test]
fn test_dial_glyph_rounds_to_nearest_spoke() {
    assert_eq!(dial_glyph(44.0), '↗');
    assert_eq!(dial_glyph(50.0), '↗');
    assert_eq!(dial_glyph(210.0), '↙');
}

#[test]
fn test_heading_markup_is_stripped() {
    let line = style_line("# Inicio");
    assert_eq!(line.spans[0].content, "Inicio");

    let line = style_line("## Rutinas");
    assert_eq!(line.spans[0].content, "Rutinas");
}

#[test]
fn test_bullets_are_rendered_as_dots() {
    let line = style_line("- Calendario básico");
    assert_eq!(line.spans[0].content, "• Calendario básico");
}

#[test]
fn test_backdrop_marker_renders_blank() {
    let line = style_line("%%threads");
    assert_eq!(line.width(), 0);
}
