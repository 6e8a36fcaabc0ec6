use revpdf_style::FontWeight;

/// Which paragraph style of the report a paragraph uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphRole {
    Title,
    Heading,
    Normal,
}

/// A run of text inside a paragraph. `weight: None` inherits the paragraph
/// style's weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub weight: Option<FontWeight>,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            weight: None,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            weight: Some(FontWeight::Bold),
        }
    }
}

/// One item of the document flow.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph { role: ParagraphRole, spans: Vec<Span> },
    /// Fixed vertical space in points; dropped at the top of a page.
    Spacer(f32),
    /// Horizontal rule across the content width.
    Rule,
}

impl Block {
    pub fn paragraph(role: ParagraphRole, spans: Vec<Span>) -> Self {
        Block::Paragraph { role, spans }
    }

    /// A `label:` value pair with the label in bold.
    pub fn labelled(label: &str, value: &str) -> Self {
        Block::paragraph(
            ParagraphRole::Normal,
            vec![Span::bold(format!("{}:", label)), Span::plain(format!(" {}", value))],
        )
    }
}
