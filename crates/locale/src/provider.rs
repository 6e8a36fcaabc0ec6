//! Sources of language files.

use crate::error::LocaleError;
use crate::labels::Labels;
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Loads label sets by language code.
///
/// - `FilesystemLocaleProvider`: `<dir>/<code>.json` files
/// - `InMemoryLocaleProvider`: pre-populated JSON sources
pub trait LocaleProvider: Debug {
    /// Load and validate the labels of one language.
    fn load(&self, language: &str) -> Result<Labels, LocaleError>;

    /// Language codes this provider can load, sorted.
    fn languages(&self) -> Result<Vec<String>, LocaleError>;

    fn name(&self) -> &'static str;
}

/// A provider backed by JSON sources held in memory.
#[derive(Debug, Default, Clone)]
pub struct InMemoryLocaleProvider {
    sources: BTreeMap<String, String>,
}

impl InMemoryLocaleProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, language: impl Into<String>, json: impl Into<String>) {
        self.sources.insert(language.into(), json.into());
    }

    pub fn with(mut self, language: impl Into<String>, json: impl Into<String>) -> Self {
        self.add(language, json);
        self
    }
}

impl LocaleProvider for InMemoryLocaleProvider {
    fn load(&self, language: &str) -> Result<Labels, LocaleError> {
        let json = self
            .sources
            .get(language)
            .ok_or_else(|| LocaleError::NotFound(language.to_string()))?;
        Labels::from_json(language, json)
    }

    fn languages(&self) -> Result<Vec<String>, LocaleError> {
        Ok(self.sources.keys().cloned().collect())
    }

    fn name(&self) -> &'static str {
        "InMemoryLocaleProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::LabelKey;

    fn full_json(title: &str) -> String {
        let body: Vec<String> = LabelKey::ALL
            .iter()
            .map(|key| {
                let value = if *key == LabelKey::AppTitle { title } else { key.as_str() };
                format!("\"{}\": \"{}\"", key.as_str(), value)
            })
            .collect();
        format!("{{{}}}", body.join(", "))
    }

    #[test]
    fn loads_registered_language() {
        let provider = InMemoryLocaleProvider::new()
            .with("en", full_json("Review"))
            .with("de", full_json("Prüfung"));
        assert_eq!(provider.languages().unwrap(), vec!["de", "en"]);
        assert_eq!(provider.load("de").unwrap().get(LabelKey::AppTitle), "Prüfung");
    }

    #[test]
    fn unknown_language_is_not_found() {
        let provider = InMemoryLocaleProvider::new();
        assert_eq!(
            provider.load("fr").unwrap_err(),
            LocaleError::NotFound("fr".into())
        );
    }
}
