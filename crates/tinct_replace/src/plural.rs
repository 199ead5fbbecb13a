//! Numeric pluralization: `<n:singular:plural>`.

/// Resolves every `<n:singular:plural>` bracket in `text`.
///
/// A bracket resolves when its interior splits on `:` into exactly three
/// parts and the first parses as an integer. Trailing empty parts are
/// discarded before counting, so `<1:a:>` has two parts and stays literal
/// while `<2::s>` keeps its empty singular. It becomes `singular` when
/// `|n| == 1` and `plural` otherwise. Any other bracket is kept literally
/// and the scan resumes after its `>`, so brackets nested inside a skipped
/// one are never looked at.
///
/// ```
/// use tinct_replace::apply_plurals;
///
/// assert_eq!(apply_plurals("<1:life:lives> left"), "life left");
/// assert_eq!(apply_plurals("<3:life:lives> left"), "lives left");
/// assert_eq!(apply_plurals("<many:life:lives>"), "<many:life:lives>");
/// ```
#[must_use]
pub fn apply_plurals(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    while let Some(open) = text[cursor..].find('<').map(|i| cursor + i) {
        let Some(close) = text[open..].find('>').map(|i| open + i) else {
            break;
        };
        out.push_str(&text[cursor..open]);
        match choose(&text[open + 1..close]) {
            Some(form) => out.push_str(form),
            None => out.push_str(&text[open..=close]),
        }
        cursor = close + 1;
    }
    out.push_str(&text[cursor..]);
    out
}

fn choose(interior: &str) -> Option<&str> {
    let mut parts: Vec<&str> = interior.split(':').collect();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }
    let [count, singular, plural] = parts[..] else {
        return None;
    };
    let n: i64 = count.parse().ok()?;
    Some(if n.unsigned_abs() == 1 { singular } else { plural })
}
