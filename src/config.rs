//! Shell settings, read from `dat/settings.json`.

use crate::error::PipelineError;
use revpdf_locale::{FilesystemLocaleProvider, LocaleError, LocaleProvider, available_languages};
use revpdf_style::ReportStyles;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SETTINGS_PATH: &str = "dat/settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Language code of the report labels.
    pub language: String,
    /// Directory holding `<code>.json` language files.
    pub lang_dir: PathBuf,
    pub output_path: PathBuf,
    /// Written to the PDF's `Author` entry.
    pub author: String,
    /// Number of empty segments a fresh form starts with.
    pub initial_segments: usize,
    /// Page geometry, paragraph styles and spacings of the report.
    #[serde(skip_serializing_if = "is_default_styles")]
    pub styles: ReportStyles,
}

fn is_default_styles(styles: &ReportStyles) -> bool {
    *styles == ReportStyles::default()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            lang_dir: PathBuf::from("lang"),
            output_path: PathBuf::from("output.pdf"),
            author: "revpdf".to_string(),
            initial_segments: 2,
            styles: ReportStyles::default(),
        }
    }
}

impl Settings {
    /// Loads settings from `path`. A missing file yields the defaults;
    /// unreadable or malformed files are errors.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        Self::from_json(&text)
            .map_err(|e| PipelineError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Switches the report language to `code`.
    ///
    /// The code must name a complete language file in `lang_dir`; otherwise
    /// the settings are left as they were.
    pub fn set_language(&mut self, code: &str) -> Result<(), PipelineError> {
        if !available_languages(&self.lang_dir)?.iter().any(|c| c == code) {
            return Err(LocaleError::NotFound(code.to_string()).into());
        }
        FilesystemLocaleProvider::new(&self.lang_dir).load(code)?;
        log::info!("Report language changed from {} to {}", self.language, code);
        self.language = code.to_string();
        Ok(())
    }

    /// Writes the settings back as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PipelineError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
