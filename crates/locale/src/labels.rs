use crate::error::LocaleError;
use crate::keys::LabelKey;
use revpdf_types::Category;
use serde_json::Value;
use std::collections::HashMap;

/// A validated mapping from label keys to localized strings for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct Labels {
    language: String,
    entries: HashMap<String, String>,
}

impl Labels {
    /// Builds a label set, failing on the first required key (in
    /// [`LabelKey::ALL`] order) that the mapping lacks.
    pub fn from_map(
        language: impl Into<String>,
        entries: HashMap<String, String>,
    ) -> Result<Self, LocaleError> {
        let language = language.into();
        if let Some(missing) = LabelKey::ALL
            .iter()
            .find(|key| !entries.contains_key(key.as_str()))
        {
            return Err(LocaleError::MissingKey {
                language,
                key: missing.as_str().to_string(),
            });
        }
        log::debug!("Loaded {} labels for language '{}'", entries.len(), language);
        Ok(Self { language, entries })
    }

    /// Parses a language file: a flat JSON object of key to string.
    pub fn from_json(language: impl Into<String>, json: &str) -> Result<Self, LocaleError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| LocaleError::InvalidFormat(e.to_string()))?;
        let Value::Object(object) = value else {
            return Err(LocaleError::InvalidFormat(
                "expected a JSON object of label strings".to_string(),
            ));
        };

        let mut entries = HashMap::with_capacity(object.len());
        for (key, value) in object {
            match value {
                Value::String(text) => {
                    entries.insert(key, text);
                }
                other => {
                    return Err(LocaleError::InvalidFormat(format!(
                        "label '{}' must be a string, found {}",
                        key, other
                    )));
                }
            }
        }
        Self::from_map(language, entries)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn get(&self, key: LabelKey) -> &str {
        self.entries
            .get(key.as_str())
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Option label for a category.
    pub fn category(&self, category: Category) -> &str {
        self.get(LabelKey::for_category(category))
    }

    /// Looks up any entry of the language file, including captions that only
    /// the shell uses (buttons, menus).
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}
