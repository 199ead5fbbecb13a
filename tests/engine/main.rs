//! Integration tests for Layer 3: Engine
//!
//! Tests for channel routing, the shared registry, and render/send.

mod registry;
mod rendering;
mod routing;
