//! Common error handling utilities for the MediDoctor gateway workspace
//!
//! Provides the application-level error type that library errors collapse
//! into at the binary boundary, and the stable error codes printed next to
//! user-facing messages.
//!
//! # Error Categories
//!
//! - **Gateway**: transport, HTTP status and decode failures from the backend
//! - **Session**: missing intake, missing doctor selection, store I/O
//! - **Validation**: client-side form validation
//! - **Config**: settings loading
//!
//! # Example
//!
//! ```rust
//! use error_common::{codes, MediDoctorError};
//!
//! let err = MediDoctorError::gateway(codes::gateway::HTTP_FAILURE, "Scan failed");
//! assert_eq!(err.code(), "GATEWAY_1002");
//! assert_eq!(err.to_string(), "Scan failed");
//! ```

pub mod codes;
pub mod types;

pub use types::*;
