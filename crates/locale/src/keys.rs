use revpdf_types::Category;
use std::fmt;

/// Keys of the labels a report needs, named after their entries in the
/// language files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
    AppTitle,
    FileName,
    ControllerName,
    CurrentDate,
    FileType,
    SegmentTitle,
    LineFrom,
    LineTo,
    Description,
    CategoryLabel,
    CategoryNote,
    CategoryPossibleProblem,
    CategoryError,
}

impl LabelKey {
    pub const ALL: [LabelKey; 13] = [
        LabelKey::AppTitle,
        LabelKey::FileName,
        LabelKey::ControllerName,
        LabelKey::CurrentDate,
        LabelKey::FileType,
        LabelKey::SegmentTitle,
        LabelKey::LineFrom,
        LabelKey::LineTo,
        LabelKey::Description,
        LabelKey::CategoryLabel,
        LabelKey::CategoryNote,
        LabelKey::CategoryPossibleProblem,
        LabelKey::CategoryError,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LabelKey::AppTitle => "app_title",
            LabelKey::FileName => "file_name",
            LabelKey::ControllerName => "controller_name",
            LabelKey::CurrentDate => "current_date",
            LabelKey::FileType => "file_type",
            LabelKey::SegmentTitle => "segment_title_main",
            LabelKey::LineFrom => "line_from",
            LabelKey::LineTo => "line_to",
            LabelKey::Description => "description",
            LabelKey::CategoryLabel => "menu_label",
            LabelKey::CategoryNote => "menu_option_note",
            LabelKey::CategoryPossibleProblem => "menu_option_possible_problem",
            LabelKey::CategoryError => "menu_option_error",
        }
    }

    /// The option label shown for a category.
    pub fn for_category(category: Category) -> LabelKey {
        match category {
            Category::Note => LabelKey::CategoryNote,
            Category::PossibleProblem => LabelKey::CategoryPossibleProblem,
            Category::Error => LabelKey::CategoryError,
        }
    }
}

impl fmt::Display for LabelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
