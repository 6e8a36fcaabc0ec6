pub mod dimension;
pub mod font;
pub mod metrics;
pub mod stylesheet;
pub mod text;

pub use dimension::{Margins, PageLayout, PageSize, INCH};
pub use font::FontWeight;
pub use metrics::{measure_char, measure_text};
pub use stylesheet::{ParagraphStyle, ReportStyles};
pub use text::TextAlign;
