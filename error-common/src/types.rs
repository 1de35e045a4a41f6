use thiserror::Error;

/// Process-level errors for HealHub binaries
#[derive(Error, Debug)]
pub enum HealHubError {
    /// Network communication errors
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Server runtime errors
    #[error("Server error: {0}")]
    ServerError(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal system errors
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl HealHubError {
    /// Stable code for this error category.
    pub fn code(&self) -> &'static str {
        match self {
            HealHubError::ConfigError(_) => crate::codes::system::CONFIGURATION,
            _ => crate::codes::system::INTERNAL,
        }
    }
}

/// Result type alias for HealHub operations
pub type Result<T> = std::result::Result<T, HealHubError>;

/// Log an error with the context it occurred in.
pub fn log_error(context: &str, error: &HealHubError) {
    tracing::error!(
        context = context,
        error_code = error.code(),
        error = %error,
        "HealHub error occurred"
    );
}
