use crate::error::PipelineError;
use revpdf_layout::{LaidOutDocument, LayoutEngine, build_report};
use revpdf_locale::Labels;
use revpdf_model::FormState;
use revpdf_render_core::{DocumentMetadata, DocumentRenderer};
use revpdf_render_lopdf::LopdfRenderer;
use revpdf_style::ReportStyles;
use revpdf_types::ReportSnapshot;
use std::io::{Cursor, Seek, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Turns report snapshots into PDF documents.
///
/// Labels and styles are fixed for the generator's lifetime; each call works
/// on an owned snapshot and never touches the form it was taken from.
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    labels: Labels,
    engine: LayoutEngine,
    author: String,
}

impl ReportGenerator {
    pub fn new(labels: Labels) -> Self {
        Self {
            labels,
            engine: LayoutEngine::default(),
            author: "revpdf".to_string(),
        }
    }

    pub fn with_styles(mut self, styles: ReportStyles) -> Self {
        self.engine = LayoutEngine::new(styles);
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Lays the report out without rendering it.
    pub fn layout(&self, snapshot: &ReportSnapshot) -> LaidOutDocument {
        let blocks = build_report(snapshot, &self.labels, self.engine.styles());
        self.engine.layout(&blocks)
    }

    /// Renders a snapshot to PDF bytes in memory.
    pub fn render(&self, snapshot: &ReportSnapshot) -> Result<Vec<u8>, PipelineError> {
        let cursor = self.render_to_writer(snapshot, Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }

    pub fn render_to_writer<W: Write + Seek + 'static>(
        &self,
        snapshot: &ReportSnapshot,
        writer: W,
    ) -> Result<W, PipelineError> {
        let document = self.layout(snapshot);
        let metadata = DocumentMetadata::new(snapshot.header.title.as_str(), self.author.as_str());

        let mut renderer: Box<dyn DocumentRenderer<W>> = Box::new(LopdfRenderer::new());
        renderer.begin_document(writer, &metadata)?;
        for page in &document.pages {
            renderer.render_page(page, document.page_width, document.page_height)?;
        }
        Ok(renderer.finish()?)
    }

    /// Renders a snapshot and replaces the file at `path` with it.
    ///
    /// The PDF is written to a temporary file next to the destination and
    /// moved into place only once complete, so a failure leaves any existing
    /// file at `path` as it was.
    pub fn generate_to_file<P: AsRef<Path>>(
        &self,
        snapshot: &ReportSnapshot,
        path: P,
    ) -> Result<(), PipelineError> {
        let path = path.as_ref();
        log::info!(
            "Generating report with {} segment(s) to {}",
            snapshot.segments.len(),
            path.display()
        );
        let bytes = self.render(snapshot)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(&bytes)?;
        file.flush()?;
        file.as_file().sync_all()?;
        file.persist(path).map_err(|e| e.error)?;

        log::info!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    /// Snapshots `form` with today's date and writes the report to `path`.
    /// Returns the snapshot that was rendered.
    pub fn generate(&self, form: &FormState, path: impl AsRef<Path>) -> Result<ReportSnapshot, PipelineError> {
        let snapshot = form.snapshot_today(&self.labels);
        self.generate_to_file(&snapshot, path)?;
        Ok(snapshot)
    }
}
