/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// PDF baseline of a text line whose box starts at layout `y`.
pub fn baseline_y(y: f32, font_size: f32, page_height: f32) -> f32 {
    flip_y(y + font_size * 0.8, page_height)
}
