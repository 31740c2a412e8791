//! # Triage Session
//!
//! Client-side state for one pass through the MediDoctor triage flow:
//! intake (photo scan, symptom questionnaire or voice note), doctor listing
//! and selection, booking, and the follow-up reminder.
//!
//! The state is an explicit value rather than ambient browser storage, so
//! every hand-off between steps is visible in the types:
//!
//! - [`TriageSession`] holds the latest intake, the derived
//!   [`InjuryContext`], the last doctor listing, the selected doctor and the
//!   booking confirmation
//! - [`TriageFlow`] runs each step against any [`triage_gateway::TriageGateway`]
//! - [`SessionStore`] keeps a [`SessionState`] in a JSON file between runs;
//!   the [`Reminder`] survives a reset
//!
//! ## Example
//!
//! ```rust,no_run
//! use triage_gateway::{ApiClient, UploadFile};
//! use triage_session::{BookingForm, TriageFlow, TriageSession};
//!
//! # async fn example() -> Result<(), triage_session::SessionError> {
//! let flow = TriageFlow::new(ApiClient::new("http://localhost:8000"));
//! let mut session = TriageSession::new();
//!
//! let image = UploadFile::from_path("wound.jpg").await?;
//! flow.scan(&mut session, image).await?;
//!
//! let doctors = flow.find_doctors(&mut session, 10).await?;
//! if let Some(doctor) = doctors.first() {
//!     session.select_doctor(doctor.clone());
//!     let form = BookingForm::new("Asha Verma", "9876543210", "10:00 AM");
//!     let booking = flow.book(&mut session, &form).await?;
//!     println!("Token {}", booking.token_number);
//! }
//! # Ok(())
//! # }
//! ```

pub mod booking;
pub mod context;
pub mod error;
pub mod filters;
pub mod flow;
pub mod questionnaire;
pub mod reminder;
pub mod session;
pub mod store;

#[cfg(test)]
mod fixtures;

pub use booking::*;
pub use context::*;
pub use error::*;
pub use filters::*;
pub use flow::*;
pub use questionnaire::*;
pub use reminder::*;
pub use session::*;
pub use store::*;
