//! Tinct - styled-message markup engine
//!
//! This crate re-exports all layers of the Tinct system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: tinct_runtime     - Preview REPL, CLI, ANSI span rendering
//! Layer 3: tinct_engine      - Recipients, format routing, registry, render/send
//! Layer 2: tinct_span        - Event span compiler, legacy style decoding
//!          tinct_replace     - Token replacement and pluralization
//! Layer 1: tinct_color       - Gradient, hex, and classic color patterns
//! Layer 0: tinct_foundation  - Core types (Error, Rgb, StyleCode, escaper)
//! ```

pub use tinct_color as color;
pub use tinct_engine as engine;
pub use tinct_foundation as foundation;
pub use tinct_replace as replace;
pub use tinct_runtime as runtime;
pub use tinct_span as span;
