//! Single-anchor hex colors.
//!
//! `#RRGGBB` (and `#RGB` in simple mode) becomes the internal true-color
//! sequence. The digit scan is greedy up to six digits:
//!
//! | digits found | simple mode      | strict mode      |
//! |--------------|------------------|------------------|
//! | 6            | six-digit match  | six-digit match  |
//! | 4 or 5       | first three only | first three only |
//! | 3            | three-digit      | literal `#`      |
//! | 0 to 2       | literal `#`      | literal `#`      |
//!
//! A three-digit match doubles each digit. Digits keep their case. There
//! is no minimum input length: a bare `#F0a` converts in simple mode just
//! like one embedded in a longer message.

use tinct_foundation::color::true_color_sequence;

/// Compiles every hex color in `text`.
#[must_use]
pub fn apply_hex(text: &str, simple: bool) -> String {
    if !text.contains('#') {
        return text.to_string();
    }

    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len() * 2);
    let mut last = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'#' {
            let width = match_width(bytes, i + 1, simple);
            if width > 0 {
                let digits = &text[i + 1..i + 1 + width];
                out.push_str(&text[last..i]);
                if width == 3 {
                    out.push_str(&true_color_sequence(digits.chars().flat_map(|c| [c, c])));
                } else {
                    out.push_str(&true_color_sequence(digits.chars()));
                }
                i += 1 + width;
                last = i;
                continue;
            }
        }
        i += 1;
    }
    out.push_str(&text[last..]);
    out
}

/// Number of digits a `#` at `start - 1` consumes, or 0 for no match.
fn match_width(bytes: &[u8], start: usize, simple: bool) -> usize {
    let run = bytes
        .iter()
        .skip(start)
        .take(6)
        .take_while(|b| b.is_ascii_hexdigit())
        .count();
    match run {
        6 => 6,
        4 | 5 => 3,
        3 if simple => 3,
        _ => 0,
    }
}
