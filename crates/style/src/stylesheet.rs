//! The fixed typographic structure of a review report.

use crate::dimension::{INCH, PageLayout};
use crate::font::FontWeight;
use crate::text::TextAlign;
use revpdf_types::Color;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStyle {
    pub font_size: f32,
    /// Baseline-to-baseline distance.
    pub leading: f32,
    pub weight: FontWeight,
    pub text_align: TextAlign,
    pub color: Color,
}

/// All styles and fixed spacings used when building a report.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportStyles {
    pub page: PageLayout,
    pub title: ParagraphStyle,
    pub heading: ParagraphStyle,
    pub normal: ParagraphStyle,
    pub after_title: f32,
    pub after_header: f32,
    pub after_heading: f32,
    pub between_fields: f32,
    pub around_rule: f32,
    pub rule_thickness: f32,
    pub rule_color: Color,
}

impl Default for ReportStyles {
    fn default() -> Self {
        Self {
            page: PageLayout::default(),
            title: ParagraphStyle {
                font_size: 24.0,
                leading: 28.0,
                weight: FontWeight::Bold,
                text_align: TextAlign::Center,
                color: Color::rgb(0x4B, 0x8B, 0xBE),
            },
            heading: ParagraphStyle {
                font_size: 14.0,
                leading: 18.0,
                weight: FontWeight::Bold,
                text_align: TextAlign::Left,
                color: Color::rgb(0x30, 0x69, 0x98),
            },
            normal: ParagraphStyle {
                font_size: 12.0,
                leading: 15.0,
                weight: FontWeight::Regular,
                text_align: TextAlign::Left,
                color: Color::BLACK,
            },
            after_title: 0.3 * INCH,
            after_header: 0.3 * INCH,
            after_heading: 0.1 * INCH,
            between_fields: 0.05 * INCH,
            around_rule: 0.2 * INCH,
            rule_thickness: 0.5,
            rule_color: Color::BLACK,
        }
    }
}
