//! The live, editable side of a review form.
//!
//! [`SegmentModel`] owns the ordered segment list; [`FormState`] adds the
//! header fields and produces the [`ReportSnapshot`](revpdf_types::ReportSnapshot)
//! that a renderer consumes.

mod error;
mod form;
mod segments;

pub use error::ModelError;
pub use form::{FormState, HeaderFields};
pub use segments::{SegmentModel, SegmentMut};
