//! Rendering, routing, and delivery for Tinct.
//!
//! This crate provides:
//! - [`Engine`] - `render`, `send`, and `broadcast` entry points
//! - [`Recipient`] - The capability a message target exposes
//! - [`FormatPattern`] and [`FormatPipeline`] - Channel routing
//! - [`Registry`] and [`SharedRegistry`] - Color and format pattern lists
//! - [`EngineConfig`] - Simple mode, marker, and event compilation
//!
//! # Data flow
//!
//! ```text
//! template ─► Replacer ─► plurals ─► ColorPipeline ─► FormatPipeline ─► sinks
//!                                                          │
//!                                     remainder ──► event spans (interactive)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod engine;
pub mod format;
pub mod recipient;
pub mod registry;

pub use config::EngineConfig;
pub use engine::{BroadcastReport, Engine};
pub use format::{Dispatch, FormatPattern, FormatPipeline, FormatTransform, namespaced_sound};
pub use recipient::{Channel, Delivery, Recipient, RecordingRecipient};
pub use registry::{Registry, SharedRegistry};
