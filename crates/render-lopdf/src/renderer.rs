use crate::helpers;
use crate::writer::StreamingPdfWriter;
use lopdf::{Dictionary, Object, StringFormat, dictionary};
use revpdf_layout::PositionedElement;
use revpdf_render_core::{DocumentMetadata, DocumentRenderer, RenderError};
use revpdf_style::FontWeight;
use std::io::{Cursor, Seek, Write};

/// A PDF renderer using the `lopdf` library. Reports use the two standard
/// Helvetica faces, so no font data is embedded.
pub struct LopdfRenderer<W: Write + Seek> {
    writer: Option<StreamingPdfWriter<W>>,
}

impl<W: Write + Seek> LopdfRenderer<W> {
    pub fn new() -> Self {
        Self { writer: None }
    }

    fn writer_mut(&mut self) -> Result<&mut StreamingPdfWriter<W>, RenderError> {
        self.writer
            .as_mut()
            .ok_or_else(|| RenderError::Other("Document not started".into()))
    }

    fn font_dictionary() -> Dictionary {
        let mut font_dict = Dictionary::new();
        for weight in FontWeight::ALL {
            let single_font_dict = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => weight.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            };
            font_dict.set(weight.resource_name(), Object::Dictionary(single_font_dict));
        }
        font_dict
    }

    fn info_dictionary(metadata: &DocumentMetadata) -> Dictionary {
        let text = |value: &str| Object::String(helpers::to_win_ansi(value), StringFormat::Literal);
        dictionary! {
            "Title" => text(&metadata.title),
            "Author" => text(&metadata.author),
            "Producer" => text(&metadata.producer),
        }
    }
}

impl<W: Write + Seek> Default for LopdfRenderer<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl LopdfRenderer<Cursor<Vec<u8>>> {
    /// Convenience method for in-memory completion.
    pub fn finish_into_buffer(self) -> Result<Vec<u8>, RenderError> {
        let cursor = Box::new(self).finish()?;
        Ok(cursor.into_inner())
    }
}

impl<W: Write + Seek> DocumentRenderer<W> for LopdfRenderer<W> {
    fn begin_document(&mut self, writer: W, metadata: &DocumentMetadata) -> Result<(), RenderError> {
        if self.writer.is_some() {
            return Err(RenderError::Other("Document already started".into()));
        }
        self.writer = Some(StreamingPdfWriter::new(
            writer,
            "1.7",
            Self::font_dictionary(),
            Self::info_dictionary(metadata),
        )?);
        Ok(())
    }

    fn render_page(
        &mut self,
        elements: &[PositionedElement],
        page_width: f32,
        page_height: f32,
    ) -> Result<(), RenderError> {
        let writer = self.writer_mut()?;
        let content = helpers::render_elements_to_content(elements, page_height);
        let content_id = writer.write_content_stream(content)?;

        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => writer.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), page_width.into(), page_height.into()],
            "Contents" => content_id,
            "Resources" => writer.resources_id,
        };
        let page_id = writer.write_object(page_dict.into())?;
        writer.add_page_id(page_id);
        log::debug!("Rendered page {} with {} elements", writer.page_count(), elements.len());
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<W, RenderError> {
        let mut renderer = *self;
        match renderer.writer.take() {
            Some(internal_writer) => Ok(internal_writer.finish()?),
            None => Err(RenderError::Other(
                "Document was never started with begin_document".into(),
            )),
        }
    }
}
