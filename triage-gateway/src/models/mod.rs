//! Wire shapes exchanged with the triage backend. Field names are the
//! backend's, verbatim.

pub mod admin;
pub mod assessment;
pub mod booking;
pub mod chat;
pub mod doctor;
pub mod risk;
pub mod scan;
pub mod voice;

pub use admin::*;
pub use assessment::*;
pub use booking::*;
pub use chat::*;
pub use doctor::*;
pub use risk::*;
pub use scan::*;
pub use voice::*;
