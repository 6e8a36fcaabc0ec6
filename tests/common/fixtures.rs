use chrono::NaiveDate;
use revpdf::{Category, FileType, FormHeader, ReportSnapshot, Segment};

pub fn header() -> FormHeader {
    FormHeader {
        title: "Code Review Report".to_string(),
        file_name: "report.py".to_string(),
        controller_name: "Jane".to_string(),
        generation_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        file_type: FileType::Python,
    }
}

pub fn segment(index: usize, line_from: &str, line_to: &str, description: &str, category: Category) -> Segment {
    Segment {
        index,
        line_from: line_from.to_string(),
        line_to: line_to.to_string(),
        description: description.to_string(),
        category,
    }
}

pub fn snapshot(segments: Vec<Segment>) -> ReportSnapshot {
    ReportSnapshot {
        header: header(),
        segments,
    }
}

/// `count` filled-in segments numbered from zero
pub fn many_segments(count: usize) -> Vec<Segment> {
    (0..count)
        .map(|i| {
            let from = (i * 10 + 1).to_string();
            let to = (i * 10 + 9).to_string();
            segment(i, &from, &to, &format!("finding number {}", i + 1), Category::ALL[i % 3])
        })
        .collect()
}
