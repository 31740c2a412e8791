use triage_gateway::{AdminStats, AppointmentSummary, Doctor};

/// Listing size for browsing every doctor without an injury context
pub const ALL_DOCTORS_LIMIT: u32 = 50;

/// Client-side narrowing of a doctor listing. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoctorFilter {
    /// Case-insensitive substring of name, specialization or hospital
    pub search: Option<String>,
    /// Exact specialization
    pub specialization: Option<String>,
    /// Case-insensitive substring of the hospital name
    pub location: Option<String>,
    /// Ignored unless positive
    pub min_rating: f64,
}

impl DoctorFilter {
    pub fn matches(&self, doctor: &Doctor) -> bool {
        if let Some(search) = non_empty(&self.search) {
            let needle = search.to_lowercase();
            let hit = [&doctor.name, &doctor.specialization, &doctor.hospital]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        if let Some(specialization) = non_empty(&self.specialization) {
            if doctor.specialization != specialization {
                return false;
            }
        }

        if let Some(location) = non_empty(&self.location) {
            if !doctor
                .hospital
                .to_lowercase()
                .contains(&location.to_lowercase())
            {
                return false;
            }
        }

        self.min_rating <= 0.0 || doctor.rating >= self.min_rating
    }

    /// Matching doctors, in listing order
    pub fn apply<'a>(&self, doctors: &'a [Doctor]) -> Vec<&'a Doctor> {
        doctors.iter().filter(|doctor| self.matches(doctor)).collect()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Appointment whose token equals `token`, ignoring case and surrounding space
pub fn find_appointment_by_token<'a>(
    stats: &'a AdminStats,
    token: &str,
) -> Option<&'a AppointmentSummary> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    stats
        .recent_appointments
        .iter()
        .find(|appointment| appointment.token_number.eq_ignore_ascii_case(token))
}

/// `0.874` renders as `87%`
pub fn format_confidence(confidence: f64) -> String {
    format!("{}%", (confidence * 100.0).round())
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
