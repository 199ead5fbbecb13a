//! Color patterns for Tinct.
//!
//! A color pattern is a pure `text -> text` transform. Patterns run in
//! registration order inside a [`ColorPipeline`], each one feeding the next:
//!
//! ```text
//! "<#FF0000Hi#0000FF> &lthere #0F0!"
//!          │
//!          ▼
//! ┌──────────────┐
//! │   GRADIENT   │  → per-character true-color ramp
//! └──────────────┘
//!          │
//!          ▼
//! ┌──────────────┐
//! │     HEX      │  → `#0F0` becomes `§x§0§0§F§F§0§0`
//! └──────────────┘
//!          │
//!          ▼
//! ┌──────────────┐
//! │   CLASSIC    │  → `&l` becomes `§l`
//! └──────────────┘
//! ```
//!
//! Markup a pattern does not recognize passes through untouched.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod gradient;
pub mod hex;
pub mod pattern;

pub use gradient::{GradientSpec, apply_gradients};
pub use hex::apply_hex;
pub use pattern::{ColorPattern, ColorPipeline, ColorTransform, DEFAULT_MARKER};
