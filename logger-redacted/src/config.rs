// Logger configuration
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Default level when `RUST_LOG` is not set
    pub log_level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}

impl LoggerConfig {
    /// Development output unless `MEDIDOCTOR_ENV=production`
    pub fn from_env(verbose: bool) -> Self {
        let is_production = std::env::var("MEDIDOCTOR_ENV")
            .map(|env| env.eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        Self {
            log_level: if verbose { "debug" } else { "info" }.to_string(),
            json: is_production,
        }
    }
}
