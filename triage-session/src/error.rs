use error_common::{codes, MediDoctorError};
use thiserror::Error;
use triage_gateway::ApiError;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No injury scan or assessment recorded yet")]
    NoIntake,

    #[error("No doctor selected")]
    NoDoctorSelected,

    #[error("Doctor {0} is not in the last doctor listing")]
    UnknownDoctor(i64),

    #[error("Invalid booking details: {0}")]
    InvalidForm(#[from] validator::ValidationErrors),

    #[error("{doctor} has no appointment slot at {slot}")]
    SlotUnavailable { doctor: String, slot: String },

    #[error("Invalid answer '{answer}' for {question}")]
    InvalidAnswer { question: &'static str, answer: String },

    #[error("Session store I/O failed: {0}")]
    Store(#[from] std::io::Error),

    #[error("Session state could not be read: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error(transparent)]
    Gateway(#[from] ApiError),
}

pub type Result<T> = std::result::Result<T, SessionError>;

impl From<SessionError> for MediDoctorError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Gateway(api) => api.into(),
            SessionError::InvalidForm(_)
            | SessionError::SlotUnavailable { .. }
            | SessionError::InvalidAnswer { .. } => MediDoctorError::Validation(err.to_string()),
            SessionError::NoIntake => {
                MediDoctorError::session(codes::session::NO_INTAKE, err.to_string())
            }
            SessionError::NoDoctorSelected | SessionError::UnknownDoctor(_) => {
                MediDoctorError::session(codes::session::NO_DOCTOR_SELECTED, err.to_string())
            }
            SessionError::Store(_) | SessionError::Corrupt(_) => {
                MediDoctorError::session(codes::session::STORE_FAILED, err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_errors_carry_stable_codes() {
        let err: MediDoctorError = SessionError::NoDoctorSelected.into();
        assert_eq!(err.code(), codes::session::NO_DOCTOR_SELECTED);

        let err: MediDoctorError = SessionError::SlotUnavailable {
            doctor: "Dr. Rao".to_string(),
            slot: "09:00".to_string(),
        }
        .into();
        assert_eq!(err.code(), codes::validation::INVALID_INPUT);
        assert!(err.to_string().contains("Dr. Rao has no appointment slot at 09:00"));
    }
}
