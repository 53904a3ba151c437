use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Precondition failed: {0}")]
    PreconditionError(String),

    #[error("Generation error: {0}")]
    GenerationError(String),

    #[error("Export unavailable: {0}")]
    ExportUnavailable(String),
}

impl AppError {
    /// Stable discriminator for presentation shells that map errors to UI state.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ConfigError(_) => "CONFIG_ERROR",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::PreconditionError(_) => "PRECONDITION_FAILED",
            AppError::GenerationError(_) => "GENERATION_ERROR",
            AppError::ExportUnavailable(_) => "EXPORT_UNAVAILABLE",
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
