use revpdf_locale::LocaleError;
use revpdf_model::ModelError;
use revpdf_render_core::RenderError;
use thiserror::Error;

/// A comprehensive error type for report generation and the shell around it.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Form error: {0}")]
    Model(#[from] ModelError),

    #[error("Language error: {0}")]
    Locale(#[from] LocaleError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings are invalid: {0}")]
    Config(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PipelineError {
    /// True when the failure came from writing the output, whichever layer
    /// noticed it.
    pub fn is_io(&self) -> bool {
        matches!(self, PipelineError::Io(_) | PipelineError::Render(RenderError::Io(_)))
    }
}
