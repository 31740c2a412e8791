//! Typed gateway to the MediDoctor triage backend
//!
//! The backend owns image analysis, risk scoring, doctor matching and
//! appointment storage. This crate is the only place that talks to it: it
//! encodes requests (JSON bodies, multipart uploads), decodes the typed
//! responses, and reports failures as one of three kinds.
//!
//! # Operations
//!
//! | Method | Path | Request | Response |
//! |---|---|---|---|
//! | POST | `/api/scan` | multipart `image` | [`ScanResult`] |
//! | GET | `/api/doctors` | query `injury_type?`, `risk_level?`, `limit` | `Vec<`[`Doctor`]`>` |
//! | POST | `/api/book` | JSON [`BookingRequest`] | [`BookingResponse`] |
//! | GET | `/api/admin/stats` | | [`AdminStats`] |
//! | GET | `/` | | `bool` |
//! | POST | `/api/health-assessment` | JSON [`HealthAssessmentRequest`] | [`HealthAssessmentResponse`] |
//! | POST | `/api/voice-analysis` | multipart `audio` | [`VoiceAnalysisResponse`] |
//! | POST | `/api/chat` | JSON [`ChatMessageRequest`] | [`ChatMessageResponse`] |
//! | GET | `/api/chat/history` | | [`ChatHistory`] |
//!
//! # Failures
//!
//! - [`ErrorKind::TransportFailure`]: the request never completed
//! - [`ErrorKind::HttpFailure`]: non-2xx; the message is the operation's fixed
//!   text, except booking which prefers the backend's `detail`
//! - [`ErrorKind::DecodeFailure`]: 2xx with an unexpected body
//!
//! The health check swallows all of these and answers `false`.
//!
//! # Example
//!
//! ```rust,no_run
//! use triage_gateway::{ApiClient, DoctorQuery, RiskLevel, TriageGateway};
//!
//! # async fn example() -> Result<(), triage_gateway::ApiError> {
//! let client = ApiClient::new("http://localhost:8000");
//!
//! if client.health_check().await {
//!     let query = DoctorQuery::new().injury_type("fracture").risk_level(RiskLevel::High).limit(4);
//!     for doctor in client.get_doctors(&query).await? {
//!         println!("{} ({})", doctor.name, doctor.hospital);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod gateway;
pub mod models;
pub mod operation;
pub mod upload;

pub use client::*;
pub use error::*;
pub use gateway::*;
pub use models::*;
pub use operation::*;
pub use upload::*;
