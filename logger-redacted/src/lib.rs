//! Logging for the MediDoctor gateway with automatic PII redaction
//!
//! Booking requests carry patient names and phone numbers. Anything that
//! reaches a log line goes through [`PiiRedactor`] first, either explicitly
//! via [`redact`] or through the `redacted_*` macros.
//!
//! # Detected Data Types
//!
//! - **Phone Numbers**: `+91 98765 43210` → `PHONE[hash]` or `+** ***** ***10`
//! - **Email Addresses**: `user@example.com` → `EMAIL[hash]` or `u***@e***`
//! - **IP Addresses**: `192.168.1.1` → `IP[hash]` or `192.***.***.1`
//! - **Custom Patterns**: configurable regex replacements
//!
//! # Example
//!
//! ```rust,no_run
//! use logger_redacted::{init_logging, redacted_info, LoggerConfig};
//!
//! init_logging(&LoggerConfig::from_env(false)).ok();
//! redacted_info!("Booking confirmed for {}", "+91 98765 43210");
//! ```

pub mod config;
pub mod init;
pub mod macros;
pub mod redactor;

pub use config::*;
pub use init::*;
pub use redactor::*;
