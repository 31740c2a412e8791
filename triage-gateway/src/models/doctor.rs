use serde::{Deserialize, Serialize};

use super::RiskLevel;

/// Doctor list item from `GET /api/doctors`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialization: String,
    pub hospital: String,
    pub distance_km: f64,
    /// `[0, 5]`
    pub rating: f64,
    /// Display labels in server order
    pub available_slots: Vec<String>,
    pub expertise: Vec<String>,
}

impl Doctor {
    pub fn offers_slot(&self, slot: &str) -> bool {
        self.available_slots.iter().any(|s| s == slot)
    }
}

/// Query for `GET /api/doctors`. Absent filters are left out of the query
/// string entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injury_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    pub limit: u32,
}

impl Default for DoctorQuery {
    fn default() -> Self {
        Self {
            injury_type: None,
            risk_level: None,
            limit: config_engine::DEFAULT_DOCTOR_LIMIT,
        }
    }
}

impl DoctorQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank injury types count as absent
    pub fn injury_type(mut self, injury_type: impl Into<String>) -> Self {
        let injury_type = injury_type.into();
        self.injury_type = (!injury_type.trim().is_empty()).then_some(injury_type);
        self
    }

    pub fn risk_level(mut self, risk_level: RiskLevel) -> Self {
        self.risk_level = Some(risk_level);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_injury_type_is_dropped() {
        let query = DoctorQuery::new().injury_type("  ");
        assert_eq!(query.injury_type, None);
        assert_eq!(query.limit, 10);
    }

    #[test]
    fn builder_sets_all_filters() {
        let query = DoctorQuery::new()
            .injury_type("fracture")
            .risk_level(RiskLevel::High)
            .limit(4);
        assert_eq!(query.injury_type.as_deref(), Some("fracture"));
        assert_eq!(query.risk_level, Some(RiskLevel::High));
        assert_eq!(query.limit, 4);
    }
}
