use crate::block::{Block, ParagraphRole};
use crate::elements::{LaidOutDocument, LayoutElement, PositionedElement, RuleElement, TextElement};
use crate::text::wrap_spans;
use revpdf_style::{ParagraphStyle, ReportStyles, TextAlign};

/// Flows blocks onto fixed-size pages.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    styles: ReportStyles,
}

/// Mutable cursor over the page currently being filled.
struct PageCursor {
    pages: Vec<Vec<PositionedElement>>,
    current: Vec<PositionedElement>,
    y: f32,
    top: f32,
    bottom: f32,
}

impl PageCursor {
    fn new(top: f32, bottom: f32) -> Self {
        Self {
            pages: Vec::new(),
            current: Vec::new(),
            y: top,
            top,
            bottom,
        }
    }

    /// Starts a new page if `height` does not fit below the cursor. A page
    /// that is still empty takes the element regardless.
    fn reserve(&mut self, height: f32) {
        if !self.current.is_empty() && self.y + height > self.bottom {
            log::debug!(
                "Page {} full at y={:.2}; starting a new page",
                self.pages.len() + 1,
                self.y
            );
            self.pages.push(std::mem::take(&mut self.current));
            self.y = self.top;
        }
    }

    fn place(&mut self, x: f32, width: f32, height: f32, element: LayoutElement) {
        self.current.push(PositionedElement {
            x,
            y: self.y,
            width,
            height,
            element,
        });
        self.y += height;
    }

    fn finish(mut self) -> Vec<Vec<PositionedElement>> {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        self.pages
    }
}

impl LayoutEngine {
    pub fn new(styles: ReportStyles) -> Self {
        Self { styles }
    }

    pub fn styles(&self) -> &ReportStyles {
        &self.styles
    }

    pub fn style_for(&self, role: ParagraphRole) -> &ParagraphStyle {
        match role {
            ParagraphRole::Title => &self.styles.title,
            ParagraphRole::Heading => &self.styles.heading,
            ParagraphRole::Normal => &self.styles.normal,
        }
    }

    pub fn layout(&self, blocks: &[Block]) -> LaidOutDocument {
        let page = &self.styles.page;
        let left = page.margins.left;
        let content_width = page.content_width();
        let mut cursor = PageCursor::new(page.margins.top, page.content_bottom());

        for block in blocks {
            match block {
                Block::Spacer(height) => {
                    if !cursor.current.is_empty() {
                        cursor.y += height;
                    }
                }
                Block::Paragraph { role, spans } => {
                    let style = self.style_for(*role);
                    for line in wrap_spans(spans, style.weight, style.font_size, content_width) {
                        cursor.reserve(style.leading);
                        let x = match style.text_align {
                            TextAlign::Left => left,
                            TextAlign::Center => left + (content_width - line.width).max(0.0) / 2.0,
                            TextAlign::Right => left + (content_width - line.width).max(0.0),
                        };
                        let element = LayoutElement::Text(TextElement {
                            runs: line.runs,
                            font_size: style.font_size,
                            color: style.color.clone(),
                        });
                        cursor.place(x, line.width, style.leading, element);
                    }
                }
                Block::Rule => {
                    let thickness = self.styles.rule_thickness;
                    cursor.reserve(thickness);
                    let element = LayoutElement::Rule(RuleElement {
                        thickness,
                        color: self.styles.rule_color.clone(),
                    });
                    cursor.place(left, content_width, thickness, element);
                }
            }
        }

        let pages = cursor.finish();
        log::debug!("Laid out {} blocks onto {} page(s)", blocks.len(), pages.len());
        LaidOutDocument {
            pages,
            page_width: page.width(),
            page_height: page.height(),
        }
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(ReportStyles::default())
    }
}
