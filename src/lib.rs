//! Code review segment forms rendered to paginated PDF reports.
//!
//! The live form ([`FormState`]) is edited through the [`SegmentModel`]
//! operations. Generating a report snapshots the form, lays the snapshot out
//! on A4 pages and writes a PDF:
//!
//! ```no_run
//! use revpdf::{FilesystemLocaleProvider, FormState, LocaleProvider, ReportGenerator};
//!
//! # fn main() -> Result<(), revpdf::PipelineError> {
//! let labels = FilesystemLocaleProvider::new("lang").load("en")?;
//! let mut form = FormState::with_initial_segments(2);
//! form.header.file_name = "report.py".to_string();
//! form.segments.get_mut(0)?.line_from = "10".to_string();
//!
//! let generator = ReportGenerator::new(labels);
//! generator.generate(&form, "output.pdf")?;
//! # Ok(())
//! # }
//! ```

pub mod config;
mod error;
pub mod form;
mod generator;

pub use config::Settings;
pub use error::PipelineError;
pub use form::{FormInput, SegmentInput};
pub use generator::ReportGenerator;

pub use revpdf_layout::{LaidOutDocument, LayoutEngine};
pub use revpdf_locale::{
    FilesystemLocaleProvider, InMemoryLocaleProvider, LabelKey, Labels, LocaleError, LocaleProvider,
    available_languages,
};
pub use revpdf_model::{FormState, HeaderFields, ModelError, SegmentModel, SegmentMut};
pub use revpdf_render_core::RenderError;
pub use revpdf_style::ReportStyles;
pub use revpdf_types::{Category, FileType, FormHeader, ReportSnapshot, Segment};
