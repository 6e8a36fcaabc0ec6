//! Page content generation: turns positioned layout elements into a PDF
//! content stream.

use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use revpdf_layout::{LayoutElement, PositionedElement, RuleElement, TextElement};
use revpdf_render_core::utils::{baseline_y, flip_y};
use revpdf_style::FontWeight;
use revpdf_types::Color;

/// Builds the content stream for one page.
pub fn render_elements_to_content(elements: &[PositionedElement], page_height: f32) -> Content {
    let mut page_ctx = PageContext::new(page_height);
    for el in elements {
        page_ctx.draw_element(el);
    }
    page_ctx.finish()
}

struct PageContext {
    page_height: f32,
    content: Content,
    state: LopdfPageRenderState,
}

#[derive(Default, Clone, PartialEq)]
struct LopdfPageRenderState {
    font: Option<(FontWeight, f32)>,
    fill_color: Color,
}

impl PageContext {
    fn new(page_height: f32) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: Default::default(),
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn draw_element(&mut self, el: &PositionedElement) {
        match &el.element {
            LayoutElement::Text(text) => self.draw_text(text, el),
            LayoutElement::Rule(rule) => self.draw_rule(rule, el),
        }
    }

    fn set_font(&mut self, weight: FontWeight, size: f32) {
        if self.state.font != Some((weight, size)) {
            self.push(
                "Tf",
                vec![Object::Name(weight.resource_name().as_bytes().to_vec()), size.into()],
            );
            self.state.font = Some((weight, size));
        }
    }

    fn set_fill_color(&mut self, color: &Color) {
        if self.state.fill_color != *color {
            let [r, g, b] = color.to_unit_rgb();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = color.clone();
        }
    }

    fn draw_text(&mut self, text: &TextElement, el: &PositionedElement) {
        if text.runs.iter().all(|run| run.text.trim().is_empty()) {
            return;
        }
        self.push("BT", vec![]);
        self.set_fill_color(&text.color);
        let pdf_y = baseline_y(el.y, text.font_size, self.page_height);
        self.push("Td", vec![el.x.into(), pdf_y.into()]);
        for run in &text.runs {
            self.set_font(run.weight, text.font_size);
            self.push(
                "Tj",
                vec![Object::String(to_win_ansi(&run.text), StringFormat::Literal)],
            );
        }
        self.push("ET", vec![]);
    }

    fn draw_rule(&mut self, rule: &RuleElement, el: &PositionedElement) {
        let [r, g, b] = rule.color.to_unit_rgb();
        let line_y = flip_y(el.y + el.height / 2.0, self.page_height);
        self.push("w", vec![rule.thickness.into()]);
        self.push("RG", vec![r.into(), g.into(), b.into()]);
        self.push("m", vec![el.x.into(), line_y.into()]);
        self.push("l", vec![(el.x + el.width).into(), line_y.into()]);
        self.push("S", vec![]);
    }
}

/// Encodes text for a WinAnsiEncoding font. Characters outside the code page
/// become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    let mut replaced = 0usize;
    let bytes = s
        .chars()
        .map(|c| {
            win_ansi_byte(c).unwrap_or_else(|| {
                replaced += 1;
                b'?'
            })
        })
        .collect();
    if replaced > 0 {
        log::warn!("Replaced {} character(s) not representable in WinAnsiEncoding in {:?}", replaced, s);
    }
    bytes
}

fn win_ansi_byte(c: char) -> Option<u8> {
    let byte = match c {
        '\t' => b' ',
        ' '..='~' | '\u{A0}'..='\u{FF}' => c as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '•' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => return None,
    };
    Some(byte)
}
