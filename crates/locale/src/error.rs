use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("Language not found: {0}")]
    NotFound(String),

    #[error("Failed to load language file '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("Invalid language file format: {0}")]
    InvalidFormat(String),

    #[error("Language '{language}' is missing required label '{key}'")]
    MissingKey { language: String, key: String },
}
