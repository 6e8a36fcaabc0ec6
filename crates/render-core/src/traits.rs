use crate::error::RenderError;
use revpdf_layout::PositionedElement;
use std::io::{Seek, Write};

/// Values for the PDF document information dictionary.
///
/// Only fixed strings go here; nothing time-dependent, so two renders of the
/// same report produce identical bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub title: String,
    pub author: String,
    pub producer: String,
}

impl DocumentMetadata {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            producer: concat!("revpdf ", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// A trait for document renderers, abstracting the PDF-writing primitives.
///
/// Pages are rendered in order between `begin_document` and `finish`.
pub trait DocumentRenderer<W: Write + Seek> {
    fn begin_document(&mut self, writer: W, metadata: &DocumentMetadata) -> Result<(), RenderError>;

    fn render_page(
        &mut self,
        elements: &[PositionedElement],
        page_width: f32,
        page_height: f32,
    ) -> Result<(), RenderError>;

    fn finish(self: Box<Self>) -> Result<W, RenderError>;
}
