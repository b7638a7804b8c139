use thiserror::Error;

/// Errors surfaced to the booking form. Both variants display as their bare
/// message so the store can hand them to the error panel untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    ExternalService(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::ValidationError(message.into())
    }

    pub fn external(message: impl Into<String>) -> Self {
        AppError::ExternalService(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::ValidationError(msg) => msg,
            AppError::ExternalService(msg) => msg,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::ValidationError(_))
    }
}
