use lopdf::{Document as LopdfDocument, Object};

/// Extract all text content from a PDF document
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

/// Extract text of a single page (1-based)
pub fn extract_page_text(doc: &LopdfDocument, page_num: u32) -> String {
    doc.extract_text(&[page_num]).unwrap_or_default()
}

/// BaseFont names of every font dictionary in the file
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts: Vec<String> = doc
        .objects
        .values()
        .filter_map(|obj| obj.as_dict().ok())
        .flat_map(|dict| {
            let mut found = Vec::new();
            if let Ok(base_font) = dict.get(b"BaseFont").and_then(Object::as_name) {
                found.push(String::from_utf8_lossy(base_font).to_string());
            }
            if let Ok(font_dict) = dict.get(b"Font").and_then(Object::as_dict) {
                for (_name, font) in font_dict.iter() {
                    if let Ok(base_font) = font
                        .as_dict()
                        .and_then(|f| f.get(b"BaseFont"))
                        .and_then(Object::as_name)
                    {
                        found.push(String::from_utf8_lossy(base_font).to_string());
                    }
                }
            }
            found
        })
        .collect();
    fonts.sort();
    fonts.dedup();
    fonts
}

/// Get page dimensions (width, height) from the MediaBox
pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let pages = doc.get_pages();
    let page_id = pages.get(&page_num)?;
    let page_dict = doc.get_object(*page_id).ok()?.as_dict().ok()?;
    let arr = page_dict.get(b"MediaBox").ok()?.as_array().ok()?;
    if arr.len() < 4 {
        return None;
    }
    let width = arr[2].as_f32().ok()? - arr[0].as_f32().ok()?;
    let height = arr[3].as_f32().ok()? - arr[1].as_f32().ok()?;
    Some((width, height))
}

/// A string entry of the document information dictionary
pub fn get_info_string(doc: &LopdfDocument, key: &str) -> Option<String> {
    let info_id = doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
    let info = doc.get_object(info_id).ok()?.as_dict().ok()?;
    match info.get(key.as_bytes()).ok()? {
        Object::String(bytes, _) => Some(String::from_utf8_lossy(bytes).to_string()),
        _ => None,
    }
}

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert minimum number of pages
#[macro_export]
macro_rules! assert_pdf_min_pages {
    ($pdf:expr, $min:expr) => {
        assert!(
            $pdf.page_count() >= $min,
            "Expected at least {} pages, got {}",
            $min,
            $pdf.page_count()
        );
    };
}

/// Assert that PDF contains a font matching a pattern
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f.contains($pattern)),
            "PDF should contain font matching '{}', fonts found: {:?}",
            $pattern,
            fonts
        );
    };
}

/// Assert page dimensions within tolerance
#[macro_export]
macro_rules! assert_pdf_page_size {
    ($pdf:expr, $page:expr, $width:expr, $height:expr) => {
        let dims = $crate::common::pdf_assertions::get_page_dimensions(&$pdf.doc, $page);
        assert!(dims.is_some(), "Could not get dimensions for page {}", $page);
        let (w, h) = dims.unwrap();
        assert!((w - $width).abs() < 1.0, "Page {} width expected ~{}, got {}", $page, $width, w);
        assert!((h - $height).abs() < 1.0, "Page {} height expected ~{}, got {}", $page, $height, h);
    };
}
