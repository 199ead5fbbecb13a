//! String helpers shared by the pattern layers.

/// Returns true if the text contains at least one non-whitespace character.
#[must_use]
pub fn has_content(text: &str) -> bool {
    text.chars().any(|c| !c.is_whitespace())
}

/// Joins the items that have content, separated by `separator`.
///
/// Blank items are skipped entirely, so no doubled separators appear.
#[must_use]
pub fn join_with_content<I, S>(items: I, separator: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for item in items {
        let item = item.as_ref();
        if !has_content(item) {
            continue;
        }
        if !out.is_empty() {
            out.push_str(separator);
        }
        out.push_str(item);
    }
    out
}

/// Finds every `open` … `close` region, in order, and replaces it with the
/// output of `f` applied to the inner text.
///
/// Scanning continues after each replaced region, so replacement output is
/// never rescanned. An `open` with no following `close` ends the scan and
/// is left untouched.
///
/// # Errors
///
/// Returns the first error produced by `f`; regions before it have
/// already been handed to `f`.
pub fn try_match_tagged<F, E>(text: &str, open: &str, close: &str, mut f: F) -> Result<String, E>
where
    F: FnMut(&str) -> Result<String, E>,
{
    let Some(first) = text.find(open) else {
        return Ok(text.to_string());
    };

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut start = first;
    loop {
        let inner_start = start + open.len();
        let Some(rel_end) = text[inner_start..].find(close) else {
            break;
        };
        let end = inner_start + rel_end;
        out.push_str(&text[last..start]);
        out.push_str(&f(&text[inner_start..end])?);
        last = end + close.len();

        match text[last..].find(open) {
            Some(next) => start = last + next,
            None => break,
        }
    }
    out.push_str(&text[last..]);
    Ok(out)
}

/// Infallible form of [`try_match_tagged`].
#[must_use]
pub fn match_tagged<F>(text: &str, open: &str, close: &str, mut f: F) -> String
where
    F: FnMut(&str) -> String,
{
    let result: Result<String, std::convert::Infallible> =
        try_match_tagged(text, open, close, |inner| Ok(f(inner)));
    match result {
        Ok(out) => out,
        Err(never) => match never {},
    }
}
