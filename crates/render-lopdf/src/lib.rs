//! Streaming PDF renderer using lopdf.
//!
//! Objects are written as soon as they are complete; only the small shared
//! dictionaries (resources, page tree, catalog, info) are buffered until
//! `finish`. Output is byte-for-byte deterministic for the same input.

mod helpers;
mod renderer;
mod writer;

pub use helpers::{render_elements_to_content, to_win_ansi};
pub use renderer::LopdfRenderer;
pub use writer::StreamingPdfWriter;
