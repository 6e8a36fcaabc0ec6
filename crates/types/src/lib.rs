//! Foundation types shared by every revpdf crate.
//!
//! These are plain value records: the segment model owns `Segment`s, and a
//! `ReportSnapshot` is an owned copy of the form taken at generation time.

pub mod color;
pub mod header;
pub mod segment;

pub use color::Color;
pub use header::{FileType, FormHeader, ReportSnapshot};
pub use segment::{Category, Segment};
