//! Line breaking for styled paragraphs.
//!
//! Paragraph text is split at `\n` into hard lines first; each hard line is
//! then filled greedily word by word. Runs of whitespace collapse to a single
//! space, and a word wider than the line is broken at character boundaries
//! into pieces that each fit.

use crate::block::Span;
use crate::elements::TextRun;
use revpdf_style::{FontWeight, measure_char, measure_text};

/// A wrapped line and its measured width.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub runs: Vec<TextRun>,
    pub width: f32,
}

#[derive(Debug)]
struct Word<'a> {
    text: &'a str,
    weight: FontWeight,
    space_before: bool,
}

/// Splits spans into hard lines at embedded newlines.
fn hard_lines(spans: &[Span], base_weight: FontWeight) -> Vec<Vec<(&str, FontWeight)>> {
    let mut lines = vec![Vec::new()];
    for span in spans {
        let weight = span.weight.unwrap_or(base_weight);
        for (i, piece) in span.text.split('\n').enumerate() {
            if i > 0 {
                lines.push(Vec::new());
            }
            let piece = piece.strip_suffix('\r').unwrap_or(piece);
            if let Some(current) = lines.last_mut() {
                current.push((piece, weight));
            }
        }
    }
    lines
}

fn words<'a>(pieces: &[(&'a str, FontWeight)]) -> Vec<Word<'a>> {
    let mut words = Vec::new();
    let mut pending_space = false;
    for (piece, weight) in pieces {
        let mut rest = *piece;
        loop {
            let trimmed = rest.trim_start();
            if trimmed.len() != rest.len() {
                pending_space = true;
            }
            if trimmed.is_empty() {
                break;
            }
            let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
            words.push(Word {
                text: &trimmed[..end],
                weight: *weight,
                space_before: pending_space,
            });
            pending_space = false;
            rest = &trimmed[end..];
        }
    }
    words
}

fn push_text(runs: &mut Vec<TextRun>, text: &str, weight: FontWeight) {
    match runs.last_mut() {
        Some(last) if last.weight == weight => last.text.push_str(text),
        _ => runs.push(TextRun {
            text: text.to_string(),
            weight,
        }),
    }
}

/// Breaks a word wider than `max_width` into slices that fit, with widths.
///
/// A slice always holds at least one character, so a line narrower than a
/// single glyph still makes progress.
fn split_word(text: &str, weight: FontWeight, font_size: f32, max_width: f32) -> Vec<(&str, f32)> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut width = 0.0f32;
    for (offset, c) in text.char_indices() {
        let char_width = measure_char(c, weight, font_size);
        if offset > start && width + char_width > max_width {
            pieces.push((&text[start..offset], width));
            start = offset;
            width = 0.0;
        }
        width += char_width;
    }
    pieces.push((&text[start..], width));
    pieces
}

/// Wraps `spans` to `max_width` points at `font_size`.
///
/// Always returns at least one line; blank hard lines come back as lines
/// without runs so they still take up vertical space.
pub fn wrap_spans(
    spans: &[Span],
    base_weight: FontWeight,
    font_size: f32,
    max_width: f32,
) -> Vec<Line> {
    let mut lines = Vec::new();

    for pieces in hard_lines(spans, base_weight) {
        let mut runs: Vec<TextRun> = Vec::new();
        let mut width = 0.0f32;

        for word in words(&pieces) {
            let word_width = measure_text(word.text, word.weight, font_size);
            let space_width = if word.space_before && !runs.is_empty() {
                measure_text(" ", word.weight, font_size)
            } else {
                0.0
            };

            if word_width > max_width {
                if !runs.is_empty() {
                    lines.push(Line {
                        runs: std::mem::take(&mut runs),
                        width,
                    });
                }
                let mut slices = split_word(word.text, word.weight, font_size, max_width);
                let (last, last_width) = slices.pop().unwrap_or(("", 0.0));
                for (piece, piece_width) in slices {
                    lines.push(Line {
                        runs: vec![TextRun {
                            text: piece.to_string(),
                            weight: word.weight,
                        }],
                        width: piece_width,
                    });
                }
                push_text(&mut runs, last, word.weight);
                width = last_width;
                continue;
            }

            if !runs.is_empty() && width + space_width + word_width > max_width {
                lines.push(Line {
                    runs: std::mem::take(&mut runs),
                    width,
                });
                push_text(&mut runs, word.text, word.weight);
                width = word_width;
                continue;
            }

            if space_width > 0.0 {
                push_text(&mut runs, " ", word.weight);
            }
            push_text(&mut runs, word.text, word.weight);
            width += space_width + word_width;
        }

        lines.push(Line { runs, width });
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line) -> String {
        line.runs.iter().map(|r| r.text.as_str()).collect()
    }

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap_spans(&[Span::plain("off-by-one")], FontWeight::Regular, 12.0, 400.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(text_of(&lines[0]), "off-by-one");
        assert!((lines[0].width - measure_text("off-by-one", FontWeight::Regular, 12.0)).abs() < 1e-3);
    }

    #[test]
    fn label_and_value_keep_separate_weights() {
        let spans = [Span::bold("Type:"), Span::plain(" Error")];
        let lines = wrap_spans(&spans, FontWeight::Regular, 12.0, 400.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0].runs,
            vec![
                TextRun { text: "Type:".into(), weight: FontWeight::Bold },
                TextRun { text: " Error".into(), weight: FontWeight::Regular },
            ]
        );
    }

    #[test]
    fn embedded_newline_produces_separate_lines() {
        let spans = [Span::bold("Description:"), Span::plain(" first\nsecond")];
        let lines = wrap_spans(&spans, FontWeight::Regular, 12.0, 400.0);
        assert_eq!(lines.len(), 2);
        assert_eq!(text_of(&lines[0]), "Description: first");
        assert_eq!(text_of(&lines[1]), "second");
    }

    #[test]
    fn blank_hard_lines_are_kept() {
        let lines = wrap_spans(&[Span::plain("a\n\nb")], FontWeight::Regular, 12.0, 400.0);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].runs.is_empty());
        assert_eq!(lines[1].width, 0.0);
    }

    #[test]
    fn crlf_line_endings_do_not_leak_carriage_returns() {
        let lines = wrap_spans(&[Span::plain("a\r\nb")], FontWeight::Regular, 12.0, 400.0);
        assert_eq!(text_of(&lines[0]), "a");
        assert_eq!(text_of(&lines[1]), "b");
    }

    #[test]
    fn long_text_wraps_within_width() {
        let text = "word ".repeat(60);
        let lines = wrap_spans(&[Span::plain(text)], FontWeight::Regular, 12.0, 200.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.width <= 200.0 + 1e-3, "line too wide: {}", line.width);
            assert!(!text_of(line).starts_with(' '));
        }
        let words: usize = lines.iter().map(|l| text_of(l).split_whitespace().count()).sum();
        assert_eq!(words, 60);
    }

    #[test]
    fn oversized_word_is_broken_to_fit() {
        let long = "x".repeat(100);
        let spans = [Span::plain(format!("a {} b", long))];
        let lines = wrap_spans(&spans, FontWeight::Regular, 12.0, 100.0);
        assert!(lines.len() > 3);
        assert_eq!(text_of(&lines[0]), "a");
        for line in &lines {
            assert!(line.width <= 100.0 + 1e-3, "line too wide: {}", line.width);
            assert!((line.width - measure_text(&text_of(line), FontWeight::Regular, 12.0)).abs() < 1e-3);
        }
        let joined: String = lines.iter().map(text_of).collect();
        assert_eq!(joined, format!("a{} b", long));
    }

    #[test]
    fn broken_word_tail_shares_a_line_with_following_words() {
        let path = "src/very/deeply/nested/module/path/".repeat(6) + "file.py";
        let spans = [Span::bold("Description:"), Span::plain(format!(" {} done", path))];
        let lines = wrap_spans(&spans, FontWeight::Regular, 12.0, 451.28);
        assert!(lines.len() >= 3);
        assert_eq!(text_of(&lines[0]), "Description:");
        for line in &lines {
            assert!(line.width <= 451.28 + 1e-3, "line too wide: {}", line.width);
        }
        let body: String = lines[1..].iter().map(text_of).collect();
        assert_eq!(body, format!("{} done", path));
    }

    #[test]
    fn glyph_wider_than_line_still_advances() {
        let lines = wrap_spans(&[Span::plain("WWW")], FontWeight::Bold, 12.0, 1.0);
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| text_of(l) == "W"));
    }

    #[test]
    fn empty_paragraph_is_one_empty_line() {
        let lines = wrap_spans(&[Span::plain("")], FontWeight::Regular, 12.0, 100.0);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].runs.is_empty());
    }

    #[test]
    fn inherited_weight_comes_from_style() {
        let lines = wrap_spans(&[Span::plain("Title")], FontWeight::Bold, 24.0, 400.0);
        assert_eq!(lines[0].runs[0].weight, FontWeight::Bold);
    }
}
