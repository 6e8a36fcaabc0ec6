use serde::{Deserialize, Serialize};

/// The two weights a report uses. Both map onto the standard 14 PDF fonts,
/// so nothing has to be embedded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    pub const ALL: [FontWeight; 2] = [FontWeight::Regular, FontWeight::Bold];

    /// PostScript name of the standard Helvetica face for this weight.
    pub fn postscript_name(&self) -> &'static str {
        match self {
            FontWeight::Regular => "Helvetica",
            FontWeight::Bold => "Helvetica-Bold",
        }
    }

    /// Resource name used in page content streams.
    pub fn resource_name(&self) -> &'static str {
        match self {
            FontWeight::Regular => "F1",
            FontWeight::Bold => "F2",
        }
    }
}
