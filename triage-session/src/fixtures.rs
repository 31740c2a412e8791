#![allow(clippy::unwrap_used)]

use serde_json::json;
use triage_gateway::{Doctor, HealthAssessmentResponse, ScanResult, VoiceAnalysisResponse};

pub fn scan(injury_type: &str, risk_level: &str) -> ScanResult {
    serde_json::from_value(json!({
        "scan_id": 11,
        "injury_type": injury_type,
        "confidence": 0.87,
        "visual_indicators": ["swelling"],
        "risk_level": risk_level,
        "risk_reason": "Visible deformity",
        "guidance": {
            "first_aid_steps": ["Immobilise the limb"],
            "warnings": [],
            "follow_up": "See an orthopaedic doctor",
            "urgency": "Within 24 hours",
            "disclaimer": "Not a diagnosis"
        },
        "timestamp": "2024-05-01T10:00:00",
        "disclaimer": "Not a diagnosis"
    }))
    .unwrap()
}

pub fn assessment(affected_area: &str, risk_level: &str) -> HealthAssessmentResponse {
    serde_json::from_value(json!({
        "analysis_id": 21,
        "risk_level": risk_level,
        "risk_score": 6.5,
        "risk_factors": ["severe pain"],
        "urgency": "Soon",
        "possible_conditions": [
            {"name": "Sprain", "probability": "medium", "description": "Ligament strain"}
        ],
        "detected_patterns": [],
        "recommendations": ["Rest"],
        "treatment_guidance": {
            "immediate_care": ["Ice"],
            "medications": [],
            "activities": [],
            "warning_signs": []
        },
        "affected_area": affected_area,
        "confidence_score": 0.7,
        "analysis_method": "rule-based",
        "disclaimer": "Not a diagnosis"
    }))
    .unwrap()
}

pub fn voice(affected_area: &str, risk_level: &str) -> VoiceAnalysisResponse {
    VoiceAnalysisResponse {
        transcribed_text: format!("my {affected_area} hurts"),
        confidence: 0.9,
        detected_language: "en".to_string(),
        extracted_info: Default::default(),
        analysis: assessment(affected_area, risk_level),
        timestamp: "2024-05-01T10:05:00".to_string(),
    }
}

pub fn doctor(id: i64, name: &str, slots: &[&str]) -> Doctor {
    Doctor {
        id,
        name: name.to_string(),
        specialization: "Orthopedics".to_string(),
        hospital: "City Hospital, Pune".to_string(),
        distance_km: 2.5,
        rating: 4.5,
        available_slots: slots.iter().map(|s| s.to_string()).collect(),
        expertise: vec!["fracture".to_string()],
    }
}
