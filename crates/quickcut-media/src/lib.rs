//! QuickCut Media - media intake and export
//!
//! This crate handles the two media boundaries of the editor:
//! - Upload intake: MIME-class acceptance and object-URL lifetimes
//! - The export pipeline (currently a simulated encoder)

pub mod export;
pub mod intake;

pub use export::{ExportSimulator, ExportTick};
pub use intake::{MediaKind, MediaUpload, UrlPool};
