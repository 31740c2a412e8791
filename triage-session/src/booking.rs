use serde::{Deserialize, Serialize};
use validator::Validate;

/// Patient details entered on the booking step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct BookingForm {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub patient_name: String,

    #[validate(length(min = 10, max = 15, message = "Phone number must be 10-15 characters"))]
    pub patient_phone: String,

    #[validate(length(min = 1, message = "Choose an appointment slot"))]
    pub appointment_slot: String,
}

impl BookingForm {
    /// Surrounding whitespace is not part of any field
    pub fn new(
        patient_name: impl AsRef<str>,
        patient_phone: impl AsRef<str>,
        appointment_slot: impl AsRef<str>,
    ) -> Self {
        Self {
            patient_name: patient_name.as_ref().trim().to_string(),
            patient_phone: patient_phone.as_ref().trim().to_string(),
            appointment_slot: appointment_slot.as_ref().trim().to_string(),
        }
    }
}
