//! Decoding compiled style escapes into spans.
//!
//! Input is the output of the color pipeline: visible text interleaved
//! with [`STYLE_ESCAPE`] pairs. Each change of style closes the current
//! span. The style is threaded through a `&mut Style` so formatting carries
//! from one segment into the next.

use tinct_foundation::{Color, Formatting, Rgb, STYLE_ESCAPE, StyleCode};

use crate::span::{Style, StyledSpan};

/// Decodes `text` into spans.
#[must_use]
pub fn decode(text: &str) -> Vec<StyledSpan> {
    let mut spans = Vec::new();
    decode_into(text, &mut Style::default(), &mut spans);
    spans
}

/// Decodes `text` starting from `style`, appending spans to `out`.
///
/// On return `style` is the style in effect at the end of `text`. Empty
/// spans are never produced. An escape followed by anything other than a
/// style code is kept as visible text, and an incomplete `x` sequence is
/// dropped.
pub fn decode_into(text: &str, style: &mut Style, out: &mut Vec<StyledSpan>) {
    let mut buffer = String::new();
    let mut chars = text.char_indices().peekable();

    while let Some((at, c)) = chars.next() {
        let code = if c == STYLE_ESCAPE {
            chars.peek().and_then(|&(_, next)| StyleCode::from_char(next))
        } else {
            None
        };
        let Some(code) = code else {
            buffer.push(c);
            continue;
        };
        chars.next();

        flush(&mut buffer, *style, out);
        match code {
            StyleCode::Color(named) => {
                *style = Style {
                    color: Some(Color::Named(named)),
                    formatting: Formatting::none(),
                    reset: false,
                };
            }
            StyleCode::Format(format) => style.formatting.enable(format),
            StyleCode::Reset => *style = Style::after_reset(),
            StyleCode::Hex => {
                if let Some(rgb) = true_color(&text[at..]) {
                    // Skip the six escape/digit pairs.
                    for _ in 0..12 {
                        chars.next();
                    }
                    *style = Style {
                        color: Some(Color::Rgb(rgb)),
                        formatting: Formatting::none(),
                        reset: false,
                    };
                }
            }
        }
    }
    flush(&mut buffer, *style, out);
}

fn flush(buffer: &mut String, style: Style, out: &mut Vec<StyledSpan>) {
    if !buffer.is_empty() {
        out.push(StyledSpan::styled(std::mem::take(buffer), style));
    }
}

/// Parses `§x§R§R§G§G§B§B` at the start of `text`.
fn true_color(text: &str) -> Option<Rgb> {
    let mut chars = text.chars();
    if chars.next() != Some(STYLE_ESCAPE) || !matches!(chars.next(), Some('x' | 'X')) {
        return None;
    }
    let mut digits = String::with_capacity(6);
    for _ in 0..6 {
        if chars.next() != Some(STYLE_ESCAPE) {
            return None;
        }
        digits.push(chars.next().filter(char::is_ascii_hexdigit)?);
    }
    Rgb::from_hex(&digits)
}
