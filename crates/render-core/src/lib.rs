//! Core rendering abstractions for report output.
//!
//! This crate provides what PDF backends share:
//! - `DocumentRenderer` trait for abstracting PDF writing operations
//! - `DocumentMetadata` for the document information dictionary
//! - Error types for rendering operations
//! - Coordinate helpers

mod error;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use traits::{DocumentMetadata, DocumentRenderer};
