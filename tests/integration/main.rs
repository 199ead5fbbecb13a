//! End-to-end tests across every layer
//!
//! Templates go in, deliveries come out: replacement, pluralization,
//! color compilation, routing, span compilation, and terminal rendering.

mod messages;
mod terminal;
