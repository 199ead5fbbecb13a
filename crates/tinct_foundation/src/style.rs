//! Legacy style codes.
//!
//! A style code is the single character that follows a style marker:
//! `0`-`9` and `a`-`f` select a named color, `k`-`o` toggle a format,
//! `r` resets, and `x` introduces a true-color sequence. Codes are
//! case-insensitive.

use crate::color::NamedColor;

/// A text format toggled by the `k`-`o` codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Format {
    /// `k`
    Obfuscated,
    /// `l`
    Bold,
    /// `m`
    Strikethrough,
    /// `n`
    Underline,
    /// `o`
    Italic,
}

impl Format {
    /// Returns the lowercase code character for this format.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Obfuscated => 'k',
            Self::Bold => 'l',
            Self::Strikethrough => 'm',
            Self::Underline => 'n',
            Self::Italic => 'o',
        }
    }
}

/// A decoded style code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleCode {
    /// One of the sixteen named colors.
    Color(NamedColor),
    /// A formatting toggle.
    Format(Format),
    /// `r`: clears color and formatting.
    Reset,
    /// `x`: the start of a six-digit true-color sequence.
    Hex,
}

impl StyleCode {
    /// Decodes a style code character, ignoring case.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let lower = c.to_ascii_lowercase();
        let code = match lower {
            'k' => Self::Format(Format::Obfuscated),
            'l' => Self::Format(Format::Bold),
            'm' => Self::Format(Format::Strikethrough),
            'n' => Self::Format(Format::Underline),
            'o' => Self::Format(Format::Italic),
            'r' => Self::Reset,
            'x' => Self::Hex,
            _ => Self::Color(NamedColor::from_code(lower)?),
        };
        Some(code)
    }

    /// Returns the lowercase code character.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Color(color) => color.code(),
            Self::Format(format) => format.code(),
            Self::Reset => 'r',
            Self::Hex => 'x',
        }
    }

    /// Returns true for the `k`-`o` formatting toggles.
    #[must_use]
    pub const fn is_format(self) -> bool {
        matches!(self, Self::Format(_))
    }
}

/// The set of formats active on a run of text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(clippy::struct_excessive_bools)]
pub struct Formatting {
    /// Bold text.
    pub bold: bool,
    /// Italic text.
    pub italic: bool,
    /// Underlined text.
    pub underline: bool,
    /// Struck-through text.
    pub strikethrough: bool,
    /// Obfuscated (scrambled) text.
    pub obfuscated: bool,
}

impl Formatting {
    /// Creates formatting with nothing set.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            strikethrough: false,
            obfuscated: false,
        }
    }

    /// Turns on the given format.
    pub fn enable(&mut self, format: Format) {
        match format {
            Format::Bold => self.bold = true,
            Format::Italic => self.italic = true,
            Format::Underline => self.underline = true,
            Format::Strikethrough => self.strikethrough = true,
            Format::Obfuscated => self.obfuscated = true,
        }
    }

    /// Builder form of [`Formatting::enable`].
    #[must_use]
    pub fn with(mut self, format: Format) -> Self {
        self.enable(format);
        self
    }

    /// Returns true if the given format is on.
    #[must_use]
    pub const fn has(&self, format: Format) -> bool {
        match format {
            Format::Bold => self.bold,
            Format::Italic => self.italic,
            Format::Underline => self.underline,
            Format::Strikethrough => self.strikethrough,
            Format::Obfuscated => self.obfuscated,
        }
    }

    /// Returns true if no format is on.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.bold || self.italic || self.underline || self.strikethrough || self.obfuscated)
    }
}
