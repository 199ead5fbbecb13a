//! Conversion between author markers and the internal style escape.
//!
//! Authors write `&a` or `&l`; compiled output uses [`STYLE_ESCAPE`]
//! followed by the same code. Only a marker directly followed by a valid
//! style code is converted, so `AT&T` and a trailing `&` pass through.

use crate::style::StyleCode;

/// The internal one-character style escape.
pub const STYLE_ESCAPE: char = '\u{a7}';

/// Returns true if `c` is a valid style code (case-insensitive).
#[must_use]
pub fn is_style_code(c: char) -> bool {
    StyleCode::from_char(c).is_some()
}

/// Replaces every `marker` that precedes a style code with [`STYLE_ESCAPE`].
///
/// The code character itself is kept. Scanning is left to right and a
/// converted pair is skipped as a whole, so `&&a` becomes `&§a`.
#[must_use]
pub fn escape(marker: char, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if c == marker && is_style_code(next) => {
                out.push(STYLE_ESCAPE);
                out.push(next);
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}

/// Removes every `marker` or [`STYLE_ESCAPE`] pair that precedes a style
/// code, leaving only the visible text.
#[must_use]
pub fn strip(text: &str, marker: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if (c == marker || c == STYLE_ESCAPE) && is_style_code(next) => {
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}

/// Counts the characters [`strip`] would keep, without allocating.
#[must_use]
pub fn visible_len(text: &str, marker: char) -> usize {
    let mut count = 0;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if (c == marker || c == STYLE_ESCAPE) && is_style_code(next) => {
                chars.next();
            }
            _ => count += 1,
        }
    }
    count
}
