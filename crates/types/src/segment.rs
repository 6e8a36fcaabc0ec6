//! A single reviewed code region.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity-like classification of a segment.
///
/// The first variant is the default selection for a freshly added segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(alias = "note")]
    Note,
    #[serde(alias = "possible_problem", alias = "possible-problem")]
    PossibleProblem,
    #[serde(alias = "error")]
    Error,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Note, Category::PossibleProblem, Category::Error];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Note => "Note",
            Category::PossibleProblem => "PossibleProblem",
            Category::Error => "Error",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the segment list.
///
/// `index` is 0-based and always equals the segment's position in its model;
/// the number shown to the user is `index + 1`. `line_from` and `line_to` are
/// kept as entered and never validated as numbers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Segment {
    pub index: usize,
    #[serde(default)]
    pub line_from: String,
    #[serde(default)]
    pub line_to: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Category,
}

impl Segment {
    /// An empty segment at the given position.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            ..Default::default()
        }
    }

    /// 1-based number used in captions and report headings.
    pub fn display_number(&self) -> usize {
        self.index + 1
    }

    /// `line_to` as it should appear in a report: a blank value falls back to `line_from`.
    pub fn effective_line_to(&self) -> &str {
        if self.line_to.trim().is_empty() {
            &self.line_from
        } else {
            &self.line_to
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_category_is_first_option() {
        assert_eq!(Category::default(), Category::ALL[0]);
        assert_eq!(Segment::new(3).category, Category::Note);
    }

    #[test]
    fn display_number_is_one_based() {
        assert_eq!(Segment::new(0).display_number(), 1);
        assert_eq!(Segment::new(4).display_number(), 5);
    }

    #[test]
    fn blank_line_to_falls_back_to_line_from() {
        let mut segment = Segment::new(0);
        segment.line_from = "12".into();
        assert_eq!(segment.effective_line_to(), "12");
        segment.line_to = "  ".into();
        assert_eq!(segment.effective_line_to(), "12");
        segment.line_to = "20".into();
        assert_eq!(segment.effective_line_to(), "20");
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!(serde_json::from_str::<Category>("\"warning\"").is_err());
    }

    #[test]
    fn category_serde_accepts_snake_case_alias() {
        let c: Category = serde_json::from_str("\"possible_problem\"").unwrap();
        assert_eq!(c, Category::PossibleProblem);
        assert_eq!(serde_json::to_string(&Category::Error).unwrap(), "\"Error\"");
    }
}
