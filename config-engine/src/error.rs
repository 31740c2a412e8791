use error_common::{codes, MediDoctorError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

impl From<ConfigError> for MediDoctorError {
    fn from(err: ConfigError) -> Self {
        let code = match &err {
            ConfigError::Load(_) => codes::config::LOAD_FAILED,
            ConfigError::ValidationError(_) => codes::config::INVALID_VALUE,
        };
        MediDoctorError::config(code, err.to_string())
    }
}
