//! QuickCut Core - Foundation types for the video editor
//!
//! This crate provides the fundamental types used throughout QuickCut:
//! - Error types and the shared `Result` alias
//! - Time formatting and time spans
//! - Colors for overlay styling
//! - Geometric primitives (percent positions, pixel sizes)
//! - Unique identifier generation

pub mod color;
pub mod error;
pub mod geometry;
pub mod id;
pub mod time;

pub use color::Color;
pub use error::{EditorError, Result};
pub use geometry::{PixelSize, Position};
pub use id::generate_id;
pub use time::{format_timecode, format_timecode_centis, TimeSpan};
