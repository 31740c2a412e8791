use serde::{Deserialize, Serialize};
use triage_gateway::{
    DoctorQuery, HealthAssessmentResponse, RiskLevel, ScanResult, VoiceAnalysisResponse,
};

/// Doctors suggested next to an assessment result
pub const NEARBY_DOCTOR_LIMIT: u32 = 4;

/// What the doctor listing and booking steps need to know about the injury
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjuryContext {
    pub injury_type: String,
    pub risk_level: RiskLevel,
}

impl InjuryContext {
    pub fn new(injury_type: impl Into<String>, risk_level: RiskLevel) -> Self {
        Self {
            injury_type: injury_type.into(),
            risk_level,
        }
    }

    /// Filtered doctor query for this injury
    pub fn doctor_query(&self, limit: u32) -> DoctorQuery {
        DoctorQuery::new()
            .injury_type(self.injury_type.clone())
            .risk_level(self.risk_level)
            .limit(limit)
    }
}

impl From<&ScanResult> for InjuryContext {
    fn from(scan: &ScanResult) -> Self {
        Self::new(scan.injury_type.clone(), scan.risk_level)
    }
}

// Assessments have no injury type; the affected body area stands in for it.
impl From<&HealthAssessmentResponse> for InjuryContext {
    fn from(assessment: &HealthAssessmentResponse) -> Self {
        Self::new(assessment.affected_area.clone(), assessment.risk_level)
    }
}

/// The latest intake result, from whichever path produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "result", rename_all = "snake_case")]
pub enum Intake {
    Scan(ScanResult),
    Assessment(HealthAssessmentResponse),
    Voice(VoiceAnalysisResponse),
}

impl Intake {
    pub fn injury_context(&self) -> InjuryContext {
        match self {
            Intake::Scan(scan) => scan.into(),
            Intake::Assessment(assessment) => assessment.into(),
            Intake::Voice(voice) => (&voice.analysis).into(),
        }
    }

    pub fn risk_level(&self) -> RiskLevel {
        match self {
            Intake::Scan(scan) => scan.risk_level,
            Intake::Assessment(assessment) => assessment.risk_level,
            Intake::Voice(voice) => voice.analysis.risk_level,
        }
    }

    /// Assessment and voice results list nearby doctors unless risk is low
    pub fn suggests_nearby_doctors(&self) -> bool {
        match self {
            Intake::Scan(_) => false,
            Intake::Assessment(_) | Intake::Voice(_) => {
                matches!(self.risk_level(), RiskLevel::High | RiskLevel::Medium)
            }
        }
    }
}
