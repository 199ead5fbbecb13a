//! Action lists: `key;value;key;value`.

use crate::span::{ClickAction, ClickKind, HoverAction, HoverKind};

/// A recognized action key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKey {
    /// A click action.
    Click(ClickKind),
    /// A hover action.
    Hover(HoverKind),
}

impl ActionKey {
    /// Looks up an action key, ignoring case. Unknown keys return `None`.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        let key = key.to_ascii_lowercase();
        let action = match key.as_str() {
            "text" | "show_text" | "hover" | "hover_text" => Self::Hover(HoverKind::ShowText),
            "item" | "show_item" | "hover_item" => Self::Hover(HoverKind::ShowItem),
            "entity" | "show_entity" | "hover_entity" => Self::Hover(HoverKind::ShowEntity),
            "url" | "open_url" => Self::Click(ClickKind::OpenUrl),
            "file" | "open_file" => Self::Click(ClickKind::OpenFile),
            "run" | "run_cmd" | "run_command" => Self::Click(ClickKind::RunCommand),
            "suggest" | "suggest_cmd" | "suggest_command" => Self::Click(ClickKind::SuggestCommand),
            "copy" | "copy_to_clipboard" => Self::Click(ClickKind::CopyToClipboard),
            _ => return None,
        };
        Some(action)
    }

    /// Returns true for click keys.
    #[must_use]
    pub const fn is_click(self) -> bool {
        matches!(self, Self::Click(_))
    }
}

/// The actions resolved from one action list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Actions {
    /// The last click action in the list.
    pub click: Option<ClickAction>,
    /// The last hover action in the list.
    pub hover: Option<HoverAction>,
}

impl Actions {
    /// Resolves `key, value` pairs. Later keys of the same category replace
    /// earlier ones; unknown keys are skipped. A trailing unpaired key is
    /// ignored.
    #[must_use]
    pub fn resolve<S: AsRef<str>>(parts: &[S]) -> Self {
        let mut actions = Self::default();
        for pair in parts.chunks_exact(2) {
            let value = pair[1].as_ref().to_string();
            match ActionKey::parse(pair[0].as_ref()) {
                Some(ActionKey::Click(kind)) => actions.click = Some(ClickAction { kind, value }),
                Some(ActionKey::Hover(kind)) => actions.hover = Some(HoverAction { kind, value }),
                None => {}
            }
        }
        actions
    }

    /// Returns true if neither action is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.click.is_none() && self.hover.is_none()
    }
}

/// Splits an action list on `;`.
///
/// A `"` toggles literal mode, in which `;` does not split; the quotes are
/// dropped. A trailing empty element is not produced, so `run;` yields one
/// element and the empty list yields none.
///
/// ```
/// use tinct_span::action::split_actions;
///
/// assert_eq!(split_actions(r#"text;"x;y;z""#), vec!["text", "x;y;z"]);
/// assert_eq!(split_actions("run;"), vec!["run"]);
/// ```
#[must_use]
pub fn split_actions(list: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut literal = false;

    for c in list.chars() {
        match c {
            '"' => literal = !literal,
            ';' if !literal => parts.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}
