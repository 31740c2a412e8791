use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::validation::validate_settings;

/// Backend origin used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Doctor list size the backend applies when no limit is given
pub const DEFAULT_DOCTOR_LIMIT: u32 = 10;

/// Environment variable prefix, e.g. `MEDIDOCTOR_API_URL`
pub const ENV_PREFIX: &str = "MEDIDOCTOR";

const SESSION_FILE: &str = "session.json";

/// Client settings for the gateway and the session store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientSettings {
    /// Backend origin, without trailing slash
    pub api_url: String,
    /// Per-request timeout. Unset leaves the transport default in place.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Where the triage session is persisted between commands
    #[serde(default)]
    pub session_path: Option<PathBuf>,
    /// Default `limit` for doctor listings
    pub doctor_limit: u32,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: None,
            session_path: None,
            doctor_limit: DEFAULT_DOCTOR_LIMIT,
        }
    }
}

impl ClientSettings {
    /// Resolved session file: explicit setting, else the platform data dir,
    /// else the working directory.
    pub fn resolved_session_path(&self) -> PathBuf {
        if let Some(path) = &self.session_path {
            return path.clone();
        }
        ProjectDirs::from("dev", "MediDoctor", "medidoctor")
            .map(|dirs| dirs.data_dir().join(SESSION_FILE))
            .unwrap_or_else(|| PathBuf::from(".medidoctor").join(SESSION_FILE))
    }
}

/// Builds [`ClientSettings`] from defaults, an optional file and the
/// environment, later sources overriding earlier ones.
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    file: Option<PathBuf>,
    overrides: Vec<(&'static str, String)>,
    use_env: bool,
    use_dotenv: bool,
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self {
            file: None,
            overrides: Vec::new(),
            use_env: true,
            use_dotenv: true,
        }
    }
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a specific settings file (YAML, TOML or JSON by extension)
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Command-line value for `api_url`, taking precedence over every source
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.overrides.push(("api_url", api_url.into()));
        self
    }

    pub fn with_session_path(mut self, path: impl AsRef<Path>) -> Self {
        self.overrides
            .push(("session_path", path.as_ref().display().to_string()));
        self
    }

    /// Skip `MEDIDOCTOR_*` variables and `.env`
    pub fn without_env(mut self) -> Self {
        self.use_env = false;
        self.use_dotenv = false;
        self
    }

    pub fn load(&self) -> Result<ClientSettings> {
        if self.use_dotenv {
            if let Ok(path) = dotenvy::dotenv() {
                debug!(path = %path.display(), "Loaded .env file");
            }
        }

        let mut builder = Config::builder()
            .set_default("api_url", DEFAULT_API_URL)?
            .set_default("doctor_limit", i64::from(DEFAULT_DOCTOR_LIMIT))?
            .add_source(File::with_name("medidoctor").required(false));

        if let Some(path) = &self.file {
            builder = builder.add_source(File::from(path.as_path()).required(true));
        }

        if self.use_env {
            builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));
        }

        for (key, value) in &self.overrides {
            builder = builder.set_override(*key, value.as_str())?;
        }

        let mut settings: ClientSettings = builder.build()?.try_deserialize()?;
        settings.api_url = settings.api_url.trim_end_matches('/').to_string();
        validate_settings(&settings)?;

        debug!(api_url = %settings.api_url, "Client settings loaded");
        Ok(settings)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_point_at_local_backend() {
        let settings = SettingsLoader::new().without_env().load().unwrap();
        assert_eq!(settings.api_url, "http://localhost:8000");
        assert_eq!(settings.doctor_limit, 10);
        assert_eq!(settings.request_timeout_secs, None);
    }

    #[test]
    fn file_overrides_defaults_and_trailing_slash_is_trimmed() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "api_url = \"https://triage.example.org/\"").unwrap();
        writeln!(file, "request_timeout_secs = 15").unwrap();

        let settings = SettingsLoader::new()
            .without_env()
            .with_file(file.path())
            .load()
            .unwrap();

        assert_eq!(settings.api_url, "https://triage.example.org");
        assert_eq!(settings.request_timeout_secs, Some(15));
        assert_eq!(settings.doctor_limit, 10);
    }

    #[test]
    fn rejects_non_http_origin() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "api_url = \"ftp://triage.example.org\"").unwrap();

        let result = SettingsLoader::new()
            .without_env()
            .with_file(file.path())
            .load();

        assert!(result.is_err());
    }

    #[test]
    fn command_line_origin_beats_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "api_url = \"https://triage.example.org\"").unwrap();

        let settings = SettingsLoader::new()
            .without_env()
            .with_file(file.path())
            .with_api_url("http://127.0.0.1:9000/")
            .with_session_path("/tmp/flow.json")
            .load()
            .unwrap();

        assert_eq!(settings.api_url, "http://127.0.0.1:9000");
        assert_eq!(settings.session_path, Some(PathBuf::from("/tmp/flow.json")));
    }

    #[test]
    fn explicit_session_path_wins() {
        let settings = ClientSettings {
            session_path: Some(PathBuf::from("/tmp/triage.json")),
            ..ClientSettings::default()
        };
        assert_eq!(settings.resolved_session_path(), PathBuf::from("/tmp/triage.json"));
    }
}
