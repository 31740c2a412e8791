use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Aggregate snapshot from `GET /api/admin/stats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminStats {
    pub total_scans: u64,
    pub total_appointments: u64,
    /// Risk level → scan count
    pub risk_distribution: BTreeMap<String, u64>,
    /// Injury type → scan count
    pub injury_distribution: BTreeMap<String, u64>,
    pub recent_scans: Vec<ScanSummary>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub recent_appointments: Vec<AppointmentSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub id: i64,
    pub injury_type: String,
    pub risk_level: String,
    pub confidence: f64,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentSummary {
    pub id: i64,
    pub patient_name: String,
    pub patient_phone: String,
    pub appointment_slot: String,
    #[serde(default)]
    pub injury_type: Option<String>,
    pub token_number: String,
    pub status: String,
    pub created_at: String,
    #[serde(default)]
    pub doctor_name: Option<String>,
    #[serde(default)]
    pub hospital: Option<String>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
