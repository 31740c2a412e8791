// Settings validation
use crate::error::{ConfigError, Result};
use crate::settings::ClientSettings;

pub fn validate_settings(settings: &ClientSettings) -> Result<()> {
    let origin = settings.api_url.as_str();
    if !(origin.starts_with("http://") || origin.starts_with("https://")) {
        return Err(ConfigError::ValidationError(format!(
            "api_url must be an http(s) origin, got '{origin}'"
        )));
    }

    if settings.request_timeout_secs == Some(0) {
        return Err(ConfigError::ValidationError(
            "request_timeout_secs must be greater than zero".to_string(),
        ));
    }

    if settings.doctor_limit == 0 {
        return Err(ConfigError::ValidationError(
            "doctor_limit must be greater than zero".to_string(),
        ));
    }

    Ok(())
}
