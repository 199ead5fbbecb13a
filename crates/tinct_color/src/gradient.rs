//! Dual-anchor gradients.
//!
//! `<#RRGGBB text #RRGGBB>` paints every visible character of `text` with
//! one color of a linear ramp from the first anchor to the second. In
//! simple mode the short form `<#RGB text #RGB>` is also recognized.
//!
//! All six-digit gradients are resolved before the short form is searched,
//! so a three-digit matcher never splits a six-digit anchor that has a
//! matching close.

use std::array;

use tinct_foundation::escape::visible_len;
use tinct_foundation::{Rgb, STYLE_ESCAPE, StyleCode};

/// A resolved gradient: its endpoints and the number of colors needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradientSpec {
    /// Color of the first visible character.
    pub start: Rgb,
    /// Color the ramp walks towards.
    pub end: Rgb,
    /// Number of visible characters, one ramp color each.
    pub step: usize,
    /// True if the anchors used the three-digit form.
    pub short_form: bool,
}

impl GradientSpec {
    /// Creates a gradient spec.
    #[must_use]
    pub const fn new(start: Rgb, end: Rgb, step: usize) -> Self {
        Self {
            start,
            end,
            step,
            short_form: false,
        }
    }

    /// Computes one color per step.
    ///
    /// Each channel moves by `|start - end| / (step - 1)` (integer
    /// division) per character in the direction of `end`, so the last
    /// color can fall short of `end` when the division truncates. A single
    /// step yields exactly `start`.
    #[must_use]
    pub fn ramp(&self) -> Vec<Rgb> {
        match self.step {
            0 => Vec::new(),
            1 => vec![self.start],
            steps => {
                let start = self.start.channels().map(i64::from);
                let end = self.end.channels().map(i64::from);
                let divisor = i64::try_from(steps - 1).unwrap_or(i64::MAX);
                let delta: [i64; 3] = array::from_fn(|c| (start[c] - end[c]).abs() / divisor);
                let direction: [i64; 3] =
                    array::from_fn(|c| if start[c] < end[c] { 1 } else { -1 });

                (0..steps)
                    .map(|i| {
                        let i = i64::try_from(i).unwrap_or(i64::MAX);
                        let [r, g, b] = array::from_fn(|c| {
                            let value = start[c] + i.saturating_mul(delta[c]) * direction[c];
                            u8::try_from(value.clamp(0, 255)).unwrap_or(u8::MAX)
                        });
                        Rgb::new(r, g, b)
                    })
                    .collect()
            }
        }
    }
}

/// Compiles every gradient in `text`.
///
/// `marker` is the author-facing style marker (usually `&`); pairs of it or
/// of the internal escape inside the gradient do not take a ramp color.
#[must_use]
pub fn apply_gradients(text: &str, simple: bool, marker: char) -> String {
    if !text.contains("<#") {
        return text.to_string();
    }
    let out = resolve(text, 6, marker);
    if simple { resolve(&out, 3, marker) } else { out }
}

struct GradientMatch {
    start: usize,
    end: usize,
    inner_start: usize,
    inner_end: usize,
    from: Rgb,
    to: Rgb,
}

fn resolve(text: &str, width: usize, marker: char) -> String {
    let mut out = String::with_capacity(text.len() * 4);
    let mut cursor = 0;
    let mut count = 0usize;

    while let Some(m) = find_gradient(text, cursor, width) {
        let inner = &text[m.inner_start..m.inner_end];
        let spec = GradientSpec {
            start: m.from,
            end: m.to,
            step: visible_len(inner, marker),
            short_form: width == 3,
        };
        out.push_str(&text[cursor..m.start]);
        out.push_str(&paint(inner, &spec.ramp(), marker));
        cursor = m.end;
        count += 1;
    }
    out.push_str(&text[cursor..]);

    if count > 0 {
        tracing::trace!(count, width, "resolved gradients");
    }
    out
}

fn find_gradient(text: &str, from: usize, width: usize) -> Option<GradientMatch> {
    let bytes = text.as_bytes();
    let mut search = from;

    while let Some(rel) = text[search..].find("<#") {
        let open = search + rel;
        let digits = open + 2;
        let inner_start = digits + width;
        if let Some(from_color) = anchor_color(text, digits, width) {
            if let Some(close) = find_close(bytes, inner_start, width) {
                if let Some(to_color) = anchor_color(text, close + 1, width) {
                    return Some(GradientMatch {
                        start: open,
                        end: close + width + 2,
                        inner_start,
                        inner_end: close,
                        from: from_color,
                        to: to_color,
                    });
                }
            }
        }
        search = open + 1;
    }
    None
}

/// Index of the `#` of the first `#<width hex digits>>` at or after `from`,
/// without crossing a line break.
fn find_close(bytes: &[u8], from: usize, width: usize) -> Option<usize> {
    for (i, &b) in bytes.iter().enumerate().skip(from) {
        match b {
            b'\n' | b'\r' => return None,
            b'#' if is_hex_run(bytes, i + 1, width) && bytes.get(i + 1 + width) == Some(&b'>') => {
                return Some(i);
            }
            _ => {}
        }
    }
    None
}

fn is_hex_run(bytes: &[u8], at: usize, width: usize) -> bool {
    bytes
        .get(at..at + width)
        .is_some_and(|run| run.iter().all(u8::is_ascii_hexdigit))
}

fn anchor_color(text: &str, at: usize, width: usize) -> Option<Rgb> {
    if !is_hex_run(text.as_bytes(), at, width) {
        return None;
    }
    let digits = &text[at..at + width];
    if width == 3 {
        Rgb::from_short_hex(digits)
    } else {
        Rgb::from_hex(digits)
    }
}

/// Emits `[color][formatting][char]` for each visible character.
///
/// Formatting toggles accumulate and are repeated before every following
/// character; a reset clears them. Color codes inside the gradient are
/// dropped. None of these take a ramp slot.
fn paint(inner: &str, ramp: &[Rgb], marker: char) -> String {
    let mut out = String::with_capacity(inner.len() * 16);
    let mut formatting = String::new();
    let mut colors = ramp.iter();
    let mut chars = inner.chars().peekable();

    while let Some(c) = chars.next() {
        if c == marker || c == STYLE_ESCAPE {
            if let Some(code) = chars.peek().copied().and_then(StyleCode::from_char) {
                chars.next();
                match code {
                    StyleCode::Format(format) => {
                        formatting.push(STYLE_ESCAPE);
                        formatting.push(format.code());
                    }
                    StyleCode::Reset => formatting.clear(),
                    StyleCode::Color(_) | StyleCode::Hex => {}
                }
                continue;
            }
        }
        if let Some(color) = colors.next() {
            out.push_str(&color.to_escape_sequence());
        }
        out.push_str(&formatting);
        out.push(c);
    }
    out
}
