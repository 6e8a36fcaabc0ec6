//! Report header metadata and the immutable snapshot handed to the renderer.

use crate::segment::Segment;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of file under review. Option names are rendered verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FileType {
    #[default]
    Python,
    JavaScript,
    #[serde(rename = "HTML")]
    Html,
    #[serde(rename = "CSS")]
    Css,
    Other,
}

impl FileType {
    pub const ALL: [FileType; 5] = [
        FileType::Python,
        FileType::JavaScript,
        FileType::Html,
        FileType::Css,
        FileType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Python => "Python",
            FileType::JavaScript => "JavaScript",
            FileType::Html => "HTML",
            FileType::Css => "CSS",
            FileType::Other => "Other",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header block of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormHeader {
    pub title: String,
    pub file_name: String,
    pub controller_name: String,
    pub generation_date: NaiveDate,
    pub file_type: FileType,
}

impl FormHeader {
    /// The generation date as it appears in reports.
    pub fn formatted_date(&self) -> String {
        self.generation_date.format("%Y-%m-%d").to_string()
    }
}

/// A point-in-time copy of the form used to produce exactly one document.
///
/// Segments are in display order and their `index` fields match their
/// positions. Nothing in a snapshot refers back to the live form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSnapshot {
    pub header: FormHeader,
    pub segments: Vec<Segment>,
}
