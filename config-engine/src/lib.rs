//! Layered configuration for the MediDoctor gateway client
//!
//! Sources, later ones overriding earlier ones:
//!
//! - **Defaults**: `http://localhost:8000`, doctor limit 10, no timeout
//! - **Local Files**: `medidoctor.{yaml,toml,json}` in the working directory,
//!   or an explicit file passed to [`SettingsLoader::with_file`]
//! - **Environment Variables**: `MEDIDOCTOR_API_URL`,
//!   `MEDIDOCTOR_REQUEST_TIMEOUT_SECS`, `MEDIDOCTOR_SESSION_PATH`,
//!   `MEDIDOCTOR_DOCTOR_LIMIT`, also read from a `.env` file
//!
//! # Example
//!
//! ```rust,no_run
//! use config_engine::SettingsLoader;
//!
//! let settings = SettingsLoader::new().load()?;
//! println!("backend: {}", settings.api_url);
//! # Ok::<(), config_engine::ConfigError>(())
//! ```

pub mod error;
pub mod settings;
pub mod validation;

pub use error::*;
pub use settings::*;
