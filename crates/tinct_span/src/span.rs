//! Styled spans and their interaction metadata.

use std::fmt;

use tinct_foundation::{Color, Formatting};

/// The visual style of a span.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Text color, or `None` to inherit the channel default.
    pub color: Option<Color>,
    /// Active formats.
    pub formatting: Formatting,
    /// True if this style was produced by an explicit reset.
    pub reset: bool,
}

impl Style {
    /// The style left behind by a reset code.
    #[must_use]
    pub const fn after_reset() -> Self {
        Self {
            color: None,
            formatting: Formatting::none(),
            reset: true,
        }
    }

    /// Returns true if nothing is set.
    #[must_use]
    pub const fn is_plain(&self) -> bool {
        self.color.is_none() && self.formatting.is_empty()
    }
}

/// What happens when a span is clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClickKind {
    /// Open the value as a URL.
    OpenUrl,
    /// Open the value as a local file path.
    OpenFile,
    /// Run the value as a command.
    RunCommand,
    /// Put the value in the input box.
    SuggestCommand,
    /// Copy the value to the clipboard.
    CopyToClipboard,
}

/// What is shown when a span is hovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HoverKind {
    /// Show the value as text.
    ShowText,
    /// Show the item the value names.
    ShowItem,
    /// Show the entity the value names.
    ShowEntity,
}

/// A click action and its payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClickAction {
    /// The action kind.
    pub kind: ClickKind,
    /// The payload (URL, path, command...).
    pub value: String,
}

/// A hover action and its payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HoverAction {
    /// The action kind.
    pub kind: HoverKind,
    /// The payload shown on hover.
    pub value: String,
}

/// A run of text with one style and optional interactions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyledSpan {
    /// Visible text.
    pub text: String,
    /// Visual style.
    pub style: Style,
    /// Click action, if any.
    pub click: Option<ClickAction>,
    /// Hover action, if any.
    pub hover: Option<HoverAction>,
}

impl StyledSpan {
    /// Creates an unstyled span with no interactions.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Creates a span with the given style.
    #[must_use]
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            ..Self::default()
        }
    }

    /// Sets the click action.
    #[must_use]
    pub fn with_click(mut self, kind: ClickKind, value: impl Into<String>) -> Self {
        self.click = Some(ClickAction {
            kind,
            value: value.into(),
        });
        self
    }

    /// Sets the hover action.
    #[must_use]
    pub fn with_hover(mut self, kind: HoverKind, value: impl Into<String>) -> Self {
        self.hover = Some(HoverAction {
            kind,
            value: value.into(),
        });
        self
    }

    /// Returns true if the span carries a click or hover action.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        self.click.is_some() || self.hover.is_some()
    }
}

impl fmt::Display for StyledSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.text)?;
        if let Some(color) = self.style.color {
            write!(f, " color={color}")?;
        }
        let formats = &self.style.formatting;
        for (on, name) in [
            (formats.bold, "bold"),
            (formats.italic, "italic"),
            (formats.underline, "underline"),
            (formats.strikethrough, "strikethrough"),
            (formats.obfuscated, "obfuscated"),
        ] {
            if on {
                write!(f, " {name}")?;
            }
        }
        if self.style.reset {
            write!(f, " reset")?;
        }
        if let Some(click) = &self.click {
            write!(f, " click={:?}({:?})", click.kind, click.value)?;
        }
        if let Some(hover) = &self.hover {
            write!(f, " hover={:?}({:?})", hover.kind, hover.value)?;
        }
        Ok(())
    }
}

/// Concatenates the visible text of `spans`.
#[must_use]
pub fn plain_text(spans: &[StyledSpan]) -> String {
    spans.iter().map(|span| span.text.as_str()).collect()
}
