use serde::{Deserialize, Serialize};

/// Body of `POST /api/book`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub doctor_id: i64,
    pub patient_name: String,
    pub patient_phone: String,
    pub appointment_slot: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub injury_type: Option<String>,
}

/// Booking confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingResponse {
    pub booking_id: i64,
    /// Human-readable identifier such as `MD1234`; compare case-insensitively
    pub token_number: String,
    pub doctor_name: String,
    pub specialization: String,
    pub appointment_slot: String,
    pub status: String,
    pub confirmation_message: String,
    pub disclaimer: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_request() -> BookingRequest {
        BookingRequest {
            doctor_id: 7,
            patient_name: "Rahul Kumar".to_string(),
            patient_phone: "+91 98765 43210".to_string(),
            appointment_slot: "10:00 AM - 10:30 AM".to_string(),
            injury_type: None,
        }
    }

    #[test]
    fn request_serializes_with_verbatim_field_names() {
        let body = serde_json::to_value(sample_request()).unwrap();
        assert_eq!(
            body,
            json!({
                "doctor_id": 7,
                "patient_name": "Rahul Kumar",
                "patient_phone": "+91 98765 43210",
                "appointment_slot": "10:00 AM - 10:30 AM"
            })
        );
    }

    #[test]
    fn request_survives_backend_round_trip() {
        let request = BookingRequest {
            injury_type: Some("cut".to_string()),
            ..sample_request()
        };
        let wire = serde_json::to_string(&request).unwrap();
        let received: BookingRequest = serde_json::from_str(&wire).unwrap();
        assert_eq!(received, request);
    }
}
