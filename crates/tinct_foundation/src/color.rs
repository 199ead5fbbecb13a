//! Color values.
//!
//! [`Rgb`] is a true color, [`NamedColor`] is one of the sixteen legacy
//! palette entries, and [`Color`] is either.

use std::fmt;

use crate::escape::STYLE_ESCAPE;

/// A 24-bit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses exactly six hex digits (`RRGGBB`, no `#`).
    #[must_use]
    pub fn from_hex(digits: &str) -> Option<Self> {
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        Some(Self::from_u32(value))
    }

    /// Parses exactly three hex digits (`RGB`), doubling each nibble.
    ///
    /// `F0A` becomes `FF00AA`.
    #[must_use]
    pub fn from_short_hex(digits: &str) -> Option<Self> {
        if digits.len() != 3 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
        Self::from_hex(&expanded)
    }

    /// Creates a color from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Returns the channels as an array.
    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Uppercase `RRGGBB` hex digits.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// The internal true-color sequence: escape + `x`, then escape + digit
    /// for each of the six hex digits.
    #[must_use]
    pub fn to_escape_sequence(self) -> String {
        true_color_sequence(self.to_hex().chars())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

/// Builds a true-color escape sequence from six hex digit characters,
/// keeping their case.
#[must_use]
pub fn true_color_sequence(digits: impl IntoIterator<Item = char>) -> String {
    let mut out = String::with_capacity(14 * STYLE_ESCAPE.len_utf8());
    out.push(STYLE_ESCAPE);
    out.push('x');
    for digit in digits {
        out.push(STYLE_ESCAPE);
        out.push(digit);
    }
    out
}

/// The sixteen legacy palette colors, selected by codes `0`-`9` and `a`-`f`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl NamedColor {
    const ALL: [Self; 16] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkAqua,
        Self::DarkRed,
        Self::DarkPurple,
        Self::Gold,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Aqua,
        Self::Red,
        Self::LightPurple,
        Self::Yellow,
        Self::White,
    ];

    /// Looks up a color by its code character (case-insensitive).
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        let index = code.to_ascii_lowercase().to_digit(16)?;
        Self::ALL.get(index as usize).copied()
    }

    /// Returns the lowercase code character.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Black => '0',
            Self::DarkBlue => '1',
            Self::DarkGreen => '2',
            Self::DarkAqua => '3',
            Self::DarkRed => '4',
            Self::DarkPurple => '5',
            Self::Gold => '6',
            Self::Gray => '7',
            Self::DarkGray => '8',
            Self::Blue => '9',
            Self::Green => 'a',
            Self::Aqua => 'b',
            Self::Red => 'c',
            Self::LightPurple => 'd',
            Self::Yellow => 'e',
            Self::White => 'f',
        }
    }

    /// The canonical snake-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::DarkBlue => "dark_blue",
            Self::DarkGreen => "dark_green",
            Self::DarkAqua => "dark_aqua",
            Self::DarkRed => "dark_red",
            Self::DarkPurple => "dark_purple",
            Self::Gold => "gold",
            Self::Gray => "gray",
            Self::DarkGray => "dark_gray",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Aqua => "aqua",
            Self::Red => "red",
            Self::LightPurple => "light_purple",
            Self::Yellow => "yellow",
            Self::White => "white",
        }
    }

    /// The palette's RGB value for this color.
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Black => Rgb::new(0x00, 0x00, 0x00),
            Self::DarkBlue => Rgb::new(0x00, 0x00, 0xAA),
            Self::DarkGreen => Rgb::new(0x00, 0xAA, 0x00),
            Self::DarkAqua => Rgb::new(0x00, 0xAA, 0xAA),
            Self::DarkRed => Rgb::new(0xAA, 0x00, 0x00),
            Self::DarkPurple => Rgb::new(0xAA, 0x00, 0xAA),
            Self::Gold => Rgb::new(0xFF, 0xAA, 0x00),
            Self::Gray => Rgb::new(0xAA, 0xAA, 0xAA),
            Self::DarkGray => Rgb::new(0x55, 0x55, 0x55),
            Self::Blue => Rgb::new(0x55, 0x55, 0xFF),
            Self::Green => Rgb::new(0x55, 0xFF, 0x55),
            Self::Aqua => Rgb::new(0x55, 0xFF, 0xFF),
            Self::Red => Rgb::new(0xFF, 0x55, 0x55),
            Self::LightPurple => Rgb::new(0xFF, 0x55, 0xFF),
            Self::Yellow => Rgb::new(0xFF, 0xFF, 0x55),
            Self::White => Rgb::new(0xFF, 0xFF, 0xFF),
        }
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A span color: a palette entry or a true color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// A named palette color.
    Named(NamedColor),
    /// A true color.
    Rgb(Rgb),
}

impl Color {
    /// Resolves the color to RGB.
    #[must_use]
    pub const fn to_rgb(self) -> Rgb {
        match self {
            Self::Named(named) => named.rgb(),
            Self::Rgb(rgb) => rgb,
        }
    }
}

impl From<NamedColor> for Color {
    fn from(value: NamedColor) -> Self {
        Self::Named(value)
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(named) => write!(f, "{named}"),
            Self::Rgb(rgb) => write!(f, "{rgb}"),
        }
    }
}
