//! JSON form descriptions read by the command line shell.
//!
//! A description is applied to a fresh [`FormState`] through the same
//! operations an interactive shell would use: `add` for each segment, then
//! an in-place edit through `get_mut`.

use crate::error::PipelineError;
use revpdf_model::{FormState, HeaderFields};
use revpdf_types::{Category, FileType};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentInput {
    pub line_from: String,
    pub line_to: String,
    pub description: String,
    pub category: Category,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormInput {
    pub file_name: String,
    pub controller_name: String,
    pub file_type: FileType,
    /// `None` leaves the form with its initial empty segments.
    pub segments: Option<Vec<SegmentInput>>,
}

impl FormInput {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Builds the live form. `initial_segments` only applies when the
    /// description lists no segments of its own.
    pub fn to_form_state(&self, initial_segments: usize) -> Result<FormState, PipelineError> {
        let Some(inputs) = &self.segments else {
            let mut form = FormState::with_initial_segments(initial_segments);
            form.header = self.header();
            return Ok(form);
        };

        let mut form = FormState::new();
        form.header = self.header();
        for input in inputs {
            let number = form.segments.add();
            let mut segment = form.segments.get_mut(number - 1)?;
            segment.line_from = input.line_from.clone();
            segment.line_to = input.line_to.clone();
            segment.description = input.description.clone();
            segment.category = input.category;
        }
        log::debug!("Form populated with {} segment(s)", form.segments.len());
        Ok(form)
    }

    fn header(&self) -> HeaderFields {
        HeaderFields {
            file_name: self.file_name.clone(),
            controller_name: self.controller_name.clone(),
            file_type: self.file_type,
        }
    }
}
