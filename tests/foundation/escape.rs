//! Integration tests for the marker escaper
//!
//! Tests conversion of `&` codes to the internal escape and back.

use tinct_foundation::{STYLE_ESCAPE, escape, is_style_code, strip, visible_len};

// =============================================================================
// Style Codes
// =============================================================================

#[test]
fn every_code_is_recognized() {
    for c in "0123456789abcdefklmnorxABCDEFKLMNORX".chars() {
        assert!(is_style_code(c), "{c} should be a style code");
    }
}

#[test]
fn non_codes_are_rejected() {
    for c in "ghijpqstuvwyz &#".chars() {
        assert!(!is_style_code(c), "{c} should not be a style code");
    }
}

// =============================================================================
// Escaping
// =============================================================================

#[test]
fn escape_converts_marker_pairs() {
    assert_eq!(escape('&', "&aGreen &lbold"), "§aGreen §lbold");
}

#[test]
fn escape_keeps_non_code_markers() {
    assert_eq!(escape('&', "AT&T & more&"), "AT&T & more&");
}

#[test]
fn escape_double_marker() {
    assert_eq!(escape('&', "&&a"), "&§a");
}

#[test]
fn escape_custom_marker() {
    assert_eq!(escape('$', "$c&c"), "§c&c");
}

#[test]
fn escape_uses_section_sign() {
    assert_eq!(STYLE_ESCAPE, '§');
}

// =============================================================================
// Stripping
// =============================================================================

#[test]
fn strip_removes_both_forms() {
    assert_eq!(strip("&aone §ltwo", '&'), "one two");
}

#[test]
fn strip_true_color_sequence() {
    assert_eq!(strip("§x§F§F§0§0§0§0red", '&'), "red");
}

#[test]
fn visible_len_matches_strip() {
    for text in ["", "plain", "&a&lHi", "§x§1§2§3§4§5§6é", "a & b"] {
        assert_eq!(visible_len(text, '&'), strip(text, '&').chars().count());
    }
}
