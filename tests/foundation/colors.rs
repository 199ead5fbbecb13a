//! Integration tests for color values
//!
//! Tests palette lookup, hex parsing, and escape sequences.

use tinct_foundation::{Color, Format, Formatting, NamedColor, Rgb, StyleCode};

// =============================================================================
// Named Colors
// =============================================================================

#[test]
fn palette_codes_round_trip() {
    for code in "0123456789abcdef".chars() {
        let color = NamedColor::from_code(code).unwrap();
        assert_eq!(color.code(), code);
    }
}

#[test]
fn palette_rgb_values() {
    assert_eq!(NamedColor::Black.rgb(), Rgb::new(0, 0, 0));
    assert_eq!(NamedColor::Green.rgb().to_hex(), "55FF55");
    assert_eq!(NamedColor::White.rgb().to_hex(), "FFFFFF");
}

#[test]
fn color_resolves_to_rgb() {
    assert_eq!(Color::Named(NamedColor::Gold).to_rgb(), Rgb::from_u32(0xFF_AA00));
    assert_eq!(Color::from(Rgb::new(1, 2, 3)).to_rgb(), Rgb::new(1, 2, 3));
}

// =============================================================================
// Hex Parsing
// =============================================================================

#[test]
fn hex_parse_is_case_insensitive() {
    assert_eq!(Rgb::from_hex("abcdef"), Rgb::from_hex("ABCDEF"));
}

#[test]
fn hex_parse_rejects_wrong_length() {
    assert_eq!(Rgb::from_hex("#FFFFFF"), None);
    assert_eq!(Rgb::from_short_hex("FFFF"), None);
}

#[test]
fn rgb_display() {
    assert_eq!(Rgb::new(0x12, 0xAB, 0x00).to_string(), "#12AB00");
}

#[test]
fn escape_sequence() {
    assert_eq!(Rgb::new(0x12, 0xAB, 0x00).to_escape_sequence(), "§x§1§2§A§B§0§0");
}

// =============================================================================
// Style Codes
// =============================================================================

#[test]
fn style_code_decoding() {
    assert_eq!(StyleCode::from_char('L'), Some(StyleCode::Format(Format::Bold)));
    assert_eq!(StyleCode::from_char('r'), Some(StyleCode::Reset));
    assert_eq!(StyleCode::from_char('x'), Some(StyleCode::Hex));
    assert_eq!(StyleCode::from_char('4'), Some(StyleCode::Color(NamedColor::DarkRed)));
    assert_eq!(StyleCode::from_char('z'), None);
}

#[test]
fn formatting_accumulates() {
    let f = Formatting::none().with(Format::Bold).with(Format::Italic);
    assert!(f.has(Format::Bold));
    assert!(f.has(Format::Italic));
    assert!(!f.has(Format::Underline));
    assert!(Formatting::none().is_empty());
}
