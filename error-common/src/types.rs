use thiserror::Error;

use crate::codes;

/// Application-level error shared by the MediDoctor crates.
///
/// Library crates keep their own precise error enums; this type is what they
/// collapse into at the binary boundary, carrying the stable error code.
#[derive(Error, Debug)]
pub enum MediDoctorError {
    /// Backend gateway errors, already rendered for the user
    #[error("{message}")]
    Gateway { code: &'static str, message: String },

    /// Session handoff errors (missing intake, no doctor selected, store I/O)
    #[error("Session error: {message}")]
    Session { code: &'static str, message: String },

    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors (unreadable sources or rejected values)
    #[error("Configuration error: {message}")]
    Config { code: &'static str, message: String },

    /// I/O errors outside the session store (reading upload files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped external errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MediDoctorError {
    pub fn gateway(code: &'static str, message: impl Into<String>) -> Self {
        Self::Gateway {
            code,
            message: message.into(),
        }
    }

    pub fn session(code: &'static str, message: impl Into<String>) -> Self {
        Self::Session {
            code,
            message: message.into(),
        }
    }

    pub fn config(code: &'static str, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
        }
    }

    /// Stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Gateway { code, .. }
            | Self::Session { code, .. }
            | Self::Config { code, .. } => code,
            Self::Validation(_) => codes::validation::INVALID_INPUT,
            Self::Io(_) | Self::Other(_) => "INTERNAL_9001",
        }
    }
}

/// Result type alias for MediDoctor operations
pub type Result<T> = std::result::Result<T, MediDoctorError>;

/// Log an error with its code at the point where it is finally handled
pub fn log_error(context: &str, error: &MediDoctorError) {
    tracing::error!(
        context = context,
        error_code = error.code(),
        error = %error,
        "MediDoctor error occurred"
    );
}
