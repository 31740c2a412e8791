use serde::{Deserialize, Serialize};

use super::RiskLevel;

/// Result of `POST /api/scan`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    pub scan_id: i64,
    pub injury_type: String,
    /// Model confidence in `[0, 1]`
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_notes: Option<String>,
    pub visual_indicators: Vec<String>,
    pub risk_level: RiskLevel,
    pub risk_reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_factors: Option<Vec<String>>,
    pub guidance: Guidance,
    /// ISO-8601, as produced by the backend
    pub timestamp: String,
    pub disclaimer: String,
}

/// First-aid guidance attached to a scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guidance {
    pub first_aid_steps: Vec<String>,
    pub warnings: Vec<String>,
    pub follow_up: String,
    pub urgency: String,
    pub disclaimer: String,
}
