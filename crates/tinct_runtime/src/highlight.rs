//! Markup highlighting for the REPL.

use std::borrow::Cow;

const DIM: &str = "\x1b[2m";
const MAGENTA: &str = "\x1b[35m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

/// Highlighter for template markup.
///
/// Style codes are dimmed, hex colors are shown in their own color,
/// bracketed markup is magenta, and `%token%` placeholders are yellow.
pub struct MarkupHighlighter {
    marker: char,
}

impl MarkupHighlighter {
    /// Creates a highlighter for style codes introduced by `marker`.
    pub const fn new(marker: char) -> Self {
        Self { marker }
    }

    /// Highlight a line of input.
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with(':') {
            return Cow::Owned(format!("{BLUE}{line}{RESET}"));
        }
        if !line
            .chars()
            .any(|c| c == self.marker || matches!(c, '<' | '#' | '%'))
        {
            return Cow::Borrowed(line);
        }

        let chars: Vec<char> = line.chars().collect();
        let mut result = String::with_capacity(line.len() * 2);
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            if c == self.marker && chars.get(i + 1).is_some_and(|n| n.is_ascii_alphanumeric()) {
                result.push_str(DIM);
                result.push(c);
                result.push(chars[i + 1]);
                result.push_str(RESET);
                i += 2;
            } else if let Some(len) = hex_len(&chars[i..]) {
                let digits: String = chars[i + 1..i + len].iter().collect();
                result.push_str(&hex_escape(&digits));
                result.extend(&chars[i..i + len]);
                result.push_str(RESET);
                i += len;
            } else if c == '<' {
                let end = chars[i..].iter().position(|&c| c == '>').map_or(chars.len(), |p| i + p + 1);
                result.push_str(MAGENTA);
                result.extend(&chars[i..end]);
                result.push_str(RESET);
                i = end;
            } else if c == '%' {
                match chars[i + 1..].iter().position(|&c| c == '%') {
                    Some(p) if p > 0 => {
                        let end = i + p + 2;
                        result.push_str(YELLOW);
                        result.extend(&chars[i..end]);
                        result.push_str(RESET);
                        i = end;
                    }
                    _ => {
                        result.push(c);
                        i += 1;
                    }
                }
            } else {
                result.push(c);
                i += 1;
            }
        }
        Cow::Owned(result)
    }

    /// The style-code marker.
    #[must_use]
    pub const fn marker(&self) -> char {
        self.marker
    }
}

impl Default for MarkupHighlighter {
    fn default() -> Self {
        Self::new(tinct_engine::EngineConfig::default().marker)
    }
}

/// Length of a `#RRGGBB` or `#RGB` color at the start of `chars`.
///
/// Four or five digits match the short form, as the hex pattern does.
fn hex_len(chars: &[char]) -> Option<usize> {
    if chars.first() != Some(&'#') {
        return None;
    }
    let digits = chars[1..].iter().take_while(|c| c.is_ascii_hexdigit()).count();
    match digits {
        6.. => Some(7),
        3..=5 => Some(4),
        _ => None,
    }
}

fn hex_escape(digits: &str) -> String {
    let rgb = if digits.len() == 6 {
        tinct_foundation::Rgb::from_hex(digits)
    } else {
        tinct_foundation::Rgb::from_short_hex(digits)
    };
    rgb.map_or_else(String::new, |rgb| {
        format!("\x1b[38;2;{};{};{}m", rgb.r, rgb.g, rgb.b)
    })
}
