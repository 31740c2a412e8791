use serde::{Deserialize, Serialize};

use super::{Probability, RiskLevel};

/// Questionnaire answers for `POST /api/health-assessment`.
///
/// Values are the categorical option keys the backend understands
/// (e.g. `pain_level`: `mild`, `moderate`, `severe`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthAssessmentRequest {
    pub pain_level: String,
    pub swelling: String,
    pub duration: String,
    pub affected_area: String,
    pub movement_difficulty: String,
    pub redness: String,
    pub warmth: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
}

/// Questionnaire analysis. Deliberately distinct from
/// [`ScanResult`](super::ScanResult): the backend shapes differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAssessmentResponse {
    pub analysis_id: i64,
    pub risk_level: RiskLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_color: Option<String>,
    /// `[0, 10]`
    pub risk_score: f64,
    pub risk_factors: Vec<String>,
    pub urgency: String,
    pub possible_conditions: Vec<PossibleCondition>,
    pub detected_patterns: Vec<String>,
    pub recommendations: Vec<String>,
    pub treatment_guidance: TreatmentGuidance,
    pub affected_area: String,
    /// `[0, 1]`
    pub confidence_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub analysis_method: String,
    pub disclaimer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PossibleCondition {
    pub name: String,
    pub probability: Probability,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentGuidance {
    pub immediate_care: Vec<String>,
    pub medications: Vec<String>,
    pub activities: Vec<String>,
    pub warning_signs: Vec<String>,
}
