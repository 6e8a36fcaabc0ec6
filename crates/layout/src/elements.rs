use revpdf_style::FontWeight;
use revpdf_types::Color;

/// A piece of a laid-out line drawn in a single font.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub weight: FontWeight,
}

/// One line of text. Runs are drawn left to right without gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub runs: Vec<TextRun>,
    pub font_size: f32,
    pub color: Color,
}

impl TextElement {
    /// The line's text with font changes flattened away.
    pub fn content(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuleElement {
    pub thickness: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutElement {
    Text(TextElement),
    Rule(RuleElement),
}

/// An element placed on a page. Coordinates use a top-left origin in points.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

/// The result of laying out one report.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutDocument {
    /// Pages of positioned elements ready for rendering. Never empty.
    pub pages: Vec<Vec<PositionedElement>>,
    pub page_width: f32,
    pub page_height: f32,
}
