//! Language files on the local filesystem.
//!
//! A language code maps to `<dir>/<code>.json`. Codes are restricted to ASCII
//! letters, digits, `-` and `_` so a code can never name a path outside the
//! language directory.

use crate::error::LocaleError;
use crate::labels::Labels;
use crate::provider::LocaleProvider;
use std::path::{Path, PathBuf};

/// Files of the form `<code>_settings.json` hold captions of the settings
/// window and are not report languages.
const SETTINGS_SUFFIX: &str = "_settings";

#[derive(Debug, Clone)]
pub struct FilesystemLocaleProvider {
    dir: PathBuf,
}

impl FilesystemLocaleProvider {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn is_valid_code(code: &str) -> bool {
        !code.is_empty()
            && code
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }

    fn path_for(&self, language: &str) -> Option<PathBuf> {
        Self::is_valid_code(language).then(|| self.dir.join(format!("{}.json", language)))
    }
}

impl LocaleProvider for FilesystemLocaleProvider {
    fn load(&self, language: &str) -> Result<Labels, LocaleError> {
        let path = self
            .path_for(language)
            .ok_or_else(|| LocaleError::NotFound(format!("{} (invalid language code)", language)))?;

        log::info!("Loading language file {}", path.display());
        let json = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LocaleError::NotFound(language.to_string())
            } else {
                LocaleError::LoadFailed {
                    path: path.display().to_string(),
                    message: e.to_string(),
                }
            }
        })?;
        Labels::from_json(language, &json)
    }

    fn languages(&self) -> Result<Vec<String>, LocaleError> {
        let entries = std::fs::read_dir(&self.dir).map_err(|e| LocaleError::LoadFailed {
            path: self.dir.display().to_string(),
            message: e.to_string(),
        })?;

        let mut codes: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
            .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(str::to_string))
            .filter(|code| Self::is_valid_code(code) && !code.ends_with(SETTINGS_SUFFIX))
            .collect();
        codes.sort();
        log::debug!("Available languages in {}: {:?}", self.dir.display(), codes);
        Ok(codes)
    }

    fn name(&self) -> &'static str {
        "FilesystemLocaleProvider"
    }
}

/// Language codes with a file in `dir`, sorted.
pub fn available_languages<P: AsRef<Path>>(dir: P) -> Result<Vec<String>, LocaleError> {
    FilesystemLocaleProvider::new(dir).languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::LabelKey;
    use std::fs;

    fn write_language(dir: &Path, code: &str) {
        let body: Vec<String> = LabelKey::ALL
            .iter()
            .map(|key| format!("\"{0}\": \"{1}:{0}\"", key.as_str(), code))
            .collect();
        fs::write(dir.join(format!("{}.json", code)), format!("{{{}}}", body.join(","))).unwrap();
    }

    #[test]
    fn loads_language_file() {
        let dir = tempfile::tempdir().unwrap();
        write_language(dir.path(), "en");
        let provider = FilesystemLocaleProvider::new(dir.path());
        let labels = provider.load("en").unwrap();
        assert_eq!(labels.get(LabelKey::LineFrom), "en:line_from");
    }

    #[test]
    fn lists_languages_sorted_without_settings_files() {
        let dir = tempfile::tempdir().unwrap();
        write_language(dir.path(), "sk");
        write_language(dir.path(), "en");
        fs::write(dir.path().join("en_settings.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        let provider = FilesystemLocaleProvider::new(dir.path());
        assert_eq!(provider.languages().unwrap(), vec!["en", "sk"]);
        assert_eq!(available_languages(dir.path()).unwrap(), vec!["en", "sk"]);
    }

    #[test]
    fn missing_language_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FilesystemLocaleProvider::new(dir.path());
        assert_eq!(
            provider.load("de").unwrap_err(),
            LocaleError::NotFound("de".into())
        );
    }

    #[test]
    fn path_like_codes_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FilesystemLocaleProvider::new(dir.path());
        assert!(matches!(provider.load("../en"), Err(LocaleError::NotFound(_))));
        assert!(matches!(provider.load(""), Err(LocaleError::NotFound(_))));
    }

    #[test]
    fn missing_directory_fails_listing() {
        let provider = FilesystemLocaleProvider::new("/definitely/not/here");
        assert!(matches!(provider.languages(), Err(LocaleError::LoadFailed { .. })));
    }
}
