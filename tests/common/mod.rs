pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use revpdf::{Labels, PipelineError, ReportGenerator, ReportSnapshot};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Extracted text split into trimmed, non-empty lines in reading order
    pub fn lines(&self) -> Vec<String> {
        pdf_assertions::extract_text(&self.doc)
            .lines()
            .map(|line| line.trim_end().to_string())
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Labels from the shipped English language file
pub fn english_labels() -> Labels {
    Labels::from_json("en", include_str!("../../lang/en.json")).expect("lang/en.json is complete")
}

pub fn generator() -> ReportGenerator {
    ReportGenerator::new(english_labels()).with_author("tests")
}

/// Render a snapshot with English labels
pub fn render_snapshot(snapshot: &ReportSnapshot) -> Result<GeneratedPdf, PipelineError> {
    let bytes = generator().render(snapshot)?;
    Ok(GeneratedPdf::from_bytes(bytes).expect("renderer output parses"))
}
