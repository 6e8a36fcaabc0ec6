use crate::segments::SegmentModel;
use chrono::{Local, NaiveDate};
use revpdf_locale::{LabelKey, Labels};
use revpdf_types::{FileType, FormHeader, ReportSnapshot, Segment};
use serde::{Deserialize, Serialize};

/// Header values the user types or selects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeaderFields {
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub controller_name: String,
    #[serde(default)]
    pub file_type: FileType,
}

/// Everything a review form holds between user actions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub header: HeaderFields,
    pub segments: SegmentModel,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A blank form pre-populated with `count` empty segments.
    pub fn with_initial_segments(count: usize) -> Self {
        let mut form = Self::new();
        for _ in 0..count {
            form.segments.add();
        }
        form
    }

    /// Freezes the form into a snapshot dated `generation_date`.
    ///
    /// The title comes from the `app_title` label, descriptions are trimmed
    /// and a blank `line_to` takes the value of `line_from`. The live form is
    /// left exactly as it was.
    pub fn snapshot(&self, labels: &Labels, generation_date: NaiveDate) -> ReportSnapshot {
        let header = FormHeader {
            title: labels.get(LabelKey::AppTitle).to_string(),
            file_name: self.header.file_name.clone(),
            controller_name: self.header.controller_name.clone(),
            generation_date,
            file_type: self.header.file_type,
        };

        let segments = self
            .segments
            .list()
            .iter()
            .enumerate()
            .map(|(position, segment)| Segment {
                index: position,
                line_from: segment.line_from.clone(),
                line_to: segment.effective_line_to().to_string(),
                description: segment.description.trim().to_string(),
                category: segment.category,
            })
            .collect::<Vec<_>>();

        log::debug!(
            "Snapshot taken: {} segments, dated {}",
            segments.len(),
            header.formatted_date()
        );
        ReportSnapshot { header, segments }
    }

    /// Snapshot dated with the local calendar day at the moment of the call.
    pub fn snapshot_today(&self, labels: &Labels) -> ReportSnapshot {
        self.snapshot(labels, Local::now().date_naive())
    }
}
