use triage_gateway::HealthAssessmentRequest;

use crate::error::{Result, SessionError};

/// One multiple-choice symptom question and the request field holding its answer
#[derive(Clone, Copy)]
pub struct Question {
    pub id: &'static str,
    pub options: &'static [&'static str],
    pub answer: fn(&HealthAssessmentRequest) -> &str,
}

const SEVERITY: &[&str] = &["none", "mild", "moderate", "severe"];
const YES_NO: &[&str] = &["yes", "no"];

pub const QUESTIONS: [Question; 7] = [
    Question {
        id: "pain_level",
        options: &["mild", "moderate", "severe"],
        answer: |request| &request.pain_level,
    },
    Question {
        id: "swelling",
        options: SEVERITY,
        answer: |request| &request.swelling,
    },
    Question {
        id: "duration",
        options: &["less than 24 hours", "1-2 days", "3-7 days", "1 week+", "2 weeks+"],
        answer: |request| &request.duration,
    },
    Question {
        id: "affected_area",
        options: &["knee", "ankle", "wrist", "elbow", "shoulder", "back", "neck", "other"],
        answer: |request| &request.affected_area,
    },
    Question {
        id: "movement_difficulty",
        options: &["none", "mild", "moderate", "severe", "unable"],
        answer: |request| &request.movement_difficulty,
    },
    Question {
        id: "redness",
        options: YES_NO,
        answer: |request| &request.redness,
    },
    Question {
        id: "warmth",
        options: YES_NO,
        answer: |request| &request.warmth,
    },
];

/// Every answer must be one of its question's options before submission
pub fn validate_answers(request: &HealthAssessmentRequest) -> Result<()> {
    for question in &QUESTIONS {
        let answer = (question.answer)(request);
        if !question.options.contains(&answer) {
            return Err(SessionError::InvalidAnswer {
                question: question.id,
                answer: answer.to_string(),
            });
        }
    }
    Ok(())
}
