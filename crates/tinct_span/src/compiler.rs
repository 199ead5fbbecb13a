//! The event span compiler.
//!
//! Grammar: `<` action-list `>` visible-text `/>`, where the action list is
//! `key;value;key;value...`. Matching is non-greedy: the visible text ends
//! at the first `/>`, and when several `<` precede the same `>` the one
//! closest to it opens the match.
//!
//! An action list that splits into zero or an odd number of elements fails
//! the whole message. [`try_compile`] reports that as `MalformedMarkup`;
//! [`compile`] logs it and falls back to one unstyled span holding the raw
//! input.

use std::ops::Range;

use tinct_foundation::{Error, Result};

use crate::action::{ActionKey, Actions, split_actions};
use crate::legacy::decode_into;
use crate::span::{Style, StyledSpan};

/// Closes the visible text of an event span.
pub const EVENT_CLOSE: &str = "/>";

/// One event match, as byte ranges into the scanned text.
#[derive(Clone, Debug, PartialEq, Eq)]
struct EventMatch {
    /// The whole match, `<` through `/>`.
    whole: Range<usize>,
    /// The action list between `<` and `>`.
    actions: Range<usize>,
    /// The visible text between `>` and `/>`.
    visible: Range<usize>,
}

fn find_event(text: &str, from: usize) -> Option<EventMatch> {
    let first = from + text[from..].find('<')?;
    let close = first + text[first..].find('>')?;
    // Tightest opening `<` for this `>`.
    let open = first + text[first..close].rfind('<')?;
    let end = close + 1 + text[close + 1..].find(EVENT_CLOSE)?;
    Some(EventMatch {
        whole: open..end + EVENT_CLOSE.len(),
        actions: open + 1..close,
        visible: close + 1..end,
    })
}

/// Compiles `text` into spans, failing on a malformed action list.
///
/// Plain segments between matches are decoded for style escapes; event
/// spans inherit the style in effect where they start and carry the
/// resolved click and hover actions on every span of their visible text.
///
/// # Errors
///
/// Returns `MalformedMarkup` if any action list splits into zero or an odd
/// number of elements.
pub fn try_compile(text: &str) -> Result<Vec<StyledSpan>> {
    let mut spans = Vec::new();
    let mut style = Style::default();
    let mut cursor = 0;
    let mut events = 0usize;

    while let Some(m) = find_event(text, cursor) {
        let parts = split_actions(&text[m.actions.clone()]);
        if parts.is_empty() || parts.len() % 2 != 0 {
            let reason = format!(
                "action list `{}` has {} elements, expected a non-zero even count",
                &text[m.actions],
                parts.len()
            );
            return Err(Error::malformed_markup(reason, text));
        }

        decode_into(&text[cursor..m.whole.start], &mut style, &mut spans);
        let actions = Actions::resolve(&parts);
        let first = spans.len();
        decode_into(&text[m.visible], &mut style, &mut spans);
        for span in &mut spans[first..] {
            span.click.clone_from(&actions.click);
            span.hover.clone_from(&actions.hover);
        }
        cursor = m.whole.end;
        events += 1;
    }
    decode_into(&text[cursor..], &mut style, &mut spans);

    tracing::trace!(events, spans = spans.len(), "compiled event spans");
    Ok(spans)
}

/// Compiles `text` into spans, never failing.
///
/// On malformed markup this logs a warning and returns a single unstyled
/// span with the raw input. Empty input yields no spans.
#[must_use]
pub fn compile(text: &str) -> Vec<StyledSpan> {
    match try_compile(text) {
        Ok(spans) => spans,
        Err(err) => {
            tracing::warn!(error = %err, "event markup is malformed, sending unstyled text");
            if text.is_empty() {
                Vec::new()
            } else {
                vec![StyledSpan::plain(text)]
            }
        }
    }
}

/// Removes event markup, keeping visible text.
///
/// In strict mode only matches carrying a click action are reduced to their
/// visible text; hover-only and unrecognized matches stay as literal
/// markup. Action lists are not arity-checked here.
///
/// ```
/// use tinct_span::strip_events;
///
/// let text = "<run;/spawn>home/> <text;hi>there/>";
/// assert_eq!(strip_events(text, false), "home there");
/// assert_eq!(strip_events(text, true), "home <text;hi>there/>");
/// ```
#[must_use]
pub fn strip_events(text: &str, strict: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    while let Some(m) = find_event(text, cursor) {
        out.push_str(&text[cursor..m.whole.start]);
        let keep_visible = !strict || has_click(&text[m.actions.clone()]);
        if keep_visible {
            out.push_str(&text[m.visible]);
        } else {
            out.push_str(&text[m.whole.clone()]);
        }
        cursor = m.whole.end;
    }
    out.push_str(&text[cursor..]);
    out
}

fn has_click(list: &str) -> bool {
    split_actions(list)
        .chunks_exact(2)
        .any(|pair| ActionKey::parse(&pair[0]).is_some_and(ActionKey::is_click))
}
