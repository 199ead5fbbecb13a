//! Event span compilation for Tinct.
//!
//! This crate turns compiled text (style escapes plus inline event markup)
//! into a flat sequence of [`StyledSpan`]s for a wire collaborator:
//! - [`compiler`] - `<actions>text/>` event markup, lenient and strict
//! - [`action`] - Action list splitting and key synonyms
//! - [`legacy`] - Style escape decoding into span styles
//! - [`span`] - The span model

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod compiler;
pub mod legacy;
pub mod span;

pub use action::{ActionKey, Actions, split_actions};
pub use compiler::{compile, strip_events, try_compile};
pub use legacy::decode;
pub use span::{ClickAction, ClickKind, HoverAction, HoverKind, Style, StyledSpan, plain_text};
