//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: style codes, colors, the escaper, and errors.

mod colors;
mod errors;
mod escape;
