use crate::block::{Block, ParagraphRole, Span};
use revpdf_locale::{LabelKey, Labels};
use revpdf_style::ReportStyles;
use revpdf_types::ReportSnapshot;

/// Builds the document flow for a snapshot: the title, the four header
/// fields, then one section per segment closed by a rule.
///
/// Segments are numbered by their position in the snapshot, starting at 1.
pub fn build_report(snapshot: &ReportSnapshot, labels: &Labels, styles: &ReportStyles) -> Vec<Block> {
    let header = &snapshot.header;
    let mut blocks = Vec::with_capacity(7 + snapshot.segments.len() * 9);

    blocks.push(Block::paragraph(ParagraphRole::Title, vec![Span::plain(header.title.as_str())]));
    blocks.push(Block::Spacer(styles.after_title));

    blocks.push(Block::labelled(labels.get(LabelKey::FileName), &header.file_name));
    blocks.push(Block::labelled(labels.get(LabelKey::ControllerName), &header.controller_name));
    blocks.push(Block::labelled(labels.get(LabelKey::CurrentDate), &header.formatted_date()));
    blocks.push(Block::labelled(labels.get(LabelKey::FileType), header.file_type.as_str()));
    blocks.push(Block::Spacer(styles.after_header));

    for (position, segment) in snapshot.segments.iter().enumerate() {
        let heading = format!("{} {}", labels.get(LabelKey::SegmentTitle), position + 1);
        blocks.push(Block::paragraph(ParagraphRole::Heading, vec![Span::plain(heading)]));
        blocks.push(Block::Spacer(styles.after_heading));

        let range = format!(
            "{} {} - {} {}",
            labels.get(LabelKey::LineFrom),
            segment.line_from,
            labels.get(LabelKey::LineTo),
            segment.line_to
        );
        blocks.push(Block::paragraph(ParagraphRole::Normal, vec![Span::plain(range)]));
        blocks.push(Block::Spacer(styles.between_fields));

        blocks.push(Block::labelled(labels.get(LabelKey::Description), &segment.description));
        blocks.push(Block::Spacer(styles.between_fields));

        blocks.push(Block::labelled(
            labels.get(LabelKey::CategoryLabel),
            labels.category(segment.category),
        ));
        blocks.push(Block::Spacer(styles.around_rule));
        blocks.push(Block::Rule);
        blocks.push(Block::Spacer(styles.around_rule));
    }

    log::debug!(
        "Built {} blocks for {} segment(s)",
        blocks.len(),
        snapshot.segments.len()
    );
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use revpdf_types::{Category, FileType, FormHeader, Segment};

    const ENGLISH: &str = r#"{
        "app_title": "Code Review",
        "file_name": "File name",
        "controller_name": "Controller",
        "current_date": "Date",
        "file_type": "File type",
        "segment_title_main": "Segment",
        "line_from": "Line from",
        "line_to": "Line to",
        "description": "Description",
        "menu_label": "Type",
        "menu_option_note": "Note",
        "menu_option_possible_problem": "Possible problem",
        "menu_option_error": "Error"
    }"#;

    fn snapshot(segments: Vec<Segment>) -> ReportSnapshot {
        ReportSnapshot {
            header: FormHeader {
                title: "Code Review".to_string(),
                file_name: "report.py".to_string(),
                controller_name: "Jane".to_string(),
                generation_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                file_type: FileType::Python,
            },
            segments,
        }
    }

    fn texts(blocks: &[Block]) -> Vec<String> {
        blocks
            .iter()
            .filter_map(|block| match block {
                Block::Paragraph { spans, .. } => {
                    Some(spans.iter().map(|s| s.text.as_str()).collect::<String>())
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn header_only_for_empty_snapshot() {
        let labels = Labels::from_json("en", ENGLISH).unwrap();
        let blocks = build_report(&snapshot(vec![]), &labels, &ReportStyles::default());
        assert_eq!(
            texts(&blocks),
            vec![
                "Code Review",
                "File name: report.py",
                "Controller: Jane",
                "Date: 2024-01-01",
                "File type: Python",
            ]
        );
        assert!(!blocks.contains(&Block::Rule));
    }

    #[test]
    fn segment_section_order() {
        let labels = Labels::from_json("en", ENGLISH).unwrap();
        let segment = Segment {
            index: 7,
            line_from: "10".to_string(),
            line_to: "10".to_string(),
            description: "off-by-one".to_string(),
            category: Category::Error,
        };
        let blocks = build_report(&snapshot(vec![segment]), &labels, &ReportStyles::default());
        let lines = texts(&blocks);
        assert_eq!(
            &lines[5..],
            &[
                "Segment 1".to_string(),
                "Line from 10 - Line to 10".to_string(),
                "Description: off-by-one".to_string(),
                "Type: Error".to_string(),
            ]
        );
        assert_eq!(blocks.iter().filter(|b| **b == Block::Rule).count(), 1);
        assert!(matches!(blocks.last(), Some(Block::Spacer(_))));
    }

    #[test]
    fn labels_are_bold_values_plain() {
        let labels = Labels::from_json("en", ENGLISH).unwrap();
        let blocks = build_report(&snapshot(vec![]), &labels, &ReportStyles::default());
        let Block::Paragraph { role, spans } = &blocks[2] else {
            panic!("expected a paragraph");
        };
        assert_eq!(*role, ParagraphRole::Normal);
        assert_eq!(spans[0], Span::bold("File name:"));
        assert_eq!(spans[1], Span::plain(" report.py"));
    }

    #[test]
    fn headings_follow_position() {
        let labels = Labels::from_json("en", ENGLISH).unwrap();
        let segments = vec![Segment::new(3), Segment::new(9), Segment::new(1)];
        let blocks = build_report(&snapshot(segments), &labels, &ReportStyles::default());
        let headings: Vec<String> = texts(&blocks)
            .into_iter()
            .filter(|line| line.starts_with("Segment "))
            .collect();
        assert_eq!(headings, vec!["Segment 1", "Segment 2", "Segment 3"]);
    }
}
