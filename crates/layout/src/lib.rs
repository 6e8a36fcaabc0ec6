//! Turns a report snapshot into pages of positioned elements.
//!
//! Layout happens in two steps:
//! 1. [`build_report`] maps a snapshot and its labels onto a flat list of
//!    [`Block`]s (paragraphs, spacers, rules) in reading order.
//! 2. [`LayoutEngine::layout`] wraps paragraphs to the content width and
//!    flows everything onto pages.

mod block;
mod elements;
mod engine;
mod report;
pub mod text;

pub use block::{Block, ParagraphRole, Span};
pub use elements::{LaidOutDocument, LayoutElement, PositionedElement, RuleElement, TextElement, TextRun};
pub use engine::LayoutEngine;
pub use report::build_report;
