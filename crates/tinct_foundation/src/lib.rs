//! Core types, style codes, colors, and errors for Tinct.
//!
//! This crate provides:
//! - [`StyleCode`] and [`Formatting`] - The legacy style-code vocabulary
//! - [`escape`] - Converting `&` markers to the internal style escape and back
//! - [`Rgb`], [`NamedColor`], [`Color`] - Color values used by every layer
//! - [`Error`] - Rich error types with context
//! - [`text`] - Small string helpers shared by the pattern layers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod color;
pub mod error;
pub mod escape;
pub mod style;
pub mod text;

pub use color::{Color, NamedColor, Rgb};
pub use error::{Error, ErrorContext, ErrorKind};
pub use escape::{STYLE_ESCAPE, escape, is_style_code, strip, visible_len};
pub use style::{Format, Formatting, StyleCode};

/// Result type alias using the Tinct error type.
pub type Result<T> = std::result::Result<T, Error>;
