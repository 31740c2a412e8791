use serde::{Deserialize, Serialize};

use super::HealthAssessmentResponse;

/// Result of `POST /api/voice-analysis`; wraps the same analysis the
/// questionnaire path produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceAnalysisResponse {
    pub transcribed_text: String,
    pub confidence: f64,
    pub detected_language: String,
    pub extracted_info: ExtractedInfo,
    pub analysis: HealthAssessmentResponse,
    pub timestamp: String,
}

/// Questionnaire-like answers the backend pulled out of the transcript
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedInfo {
    pub pain_level: String,
    pub pain_descriptors: Vec<String>,
    pub swelling_severity: String,
    pub affected_area: String,
    pub additional_symptoms: Vec<String>,
    pub duration: String,
    pub original_text: String,
}
