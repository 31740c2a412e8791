use tracing::{debug, warn};
use triage_gateway::{
    BookingResponse, Doctor, DoctorQuery, HealthAssessmentRequest, HealthAssessmentResponse,
    ScanResult, TriageGateway, UploadFile, VoiceAnalysisResponse,
};

use crate::booking::BookingForm;
use crate::context::{Intake, NEARBY_DOCTOR_LIMIT};
use crate::error::Result;
use crate::questionnaire::validate_answers;
use crate::session::TriageSession;

/// Assessment result plus the doctors suggested alongside it
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentOutcome<T> {
    pub result: T,
    pub nearby_doctors: Vec<Doctor>,
}

/// Drives one [`TriageSession`] through the backend.
///
/// Each step calls the gateway and records the answer in the session only
/// when the call succeeds, so a failed step leaves the session untouched.
pub struct TriageFlow<G> {
    gateway: G,
}

impl<G: TriageGateway> TriageFlow<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub async fn scan(&self, session: &mut TriageSession, image: UploadFile) -> Result<ScanResult> {
        let scan = self.gateway.scan_injury(image).await?;
        session.record_scan(scan.clone());
        Ok(scan)
    }

    pub async fn assess(
        &self,
        session: &mut TriageSession,
        answers: &HealthAssessmentRequest,
    ) -> Result<AssessmentOutcome<HealthAssessmentResponse>> {
        validate_answers(answers)?;
        let assessment = self.gateway.analyze_health_assessment(answers).await?;
        session.record_assessment(assessment.clone());
        let nearby_doctors = self.nearby_doctors(session).await;
        Ok(AssessmentOutcome {
            result: assessment,
            nearby_doctors,
        })
    }

    pub async fn analyze_voice(
        &self,
        session: &mut TriageSession,
        audio: UploadFile,
    ) -> Result<AssessmentOutcome<VoiceAnalysisResponse>> {
        let voice = self.gateway.analyze_voice(audio).await?;
        session.record_voice(voice.clone());
        let nearby_doctors = self.nearby_doctors(session).await;
        Ok(AssessmentOutcome {
            result: voice,
            nearby_doctors,
        })
    }

    // A failed suggestion lookup does not fail the assessment.
    async fn nearby_doctors(&self, session: &mut TriageSession) -> Vec<Doctor> {
        if !session.intake().is_some_and(Intake::suggests_nearby_doctors) {
            return Vec::new();
        }
        let query = session.doctor_query(NEARBY_DOCTOR_LIMIT);
        match self.gateway.get_doctors(&query).await {
            Ok(doctors) => {
                session.record_doctors(doctors.clone());
                doctors
            }
            Err(err) => {
                warn!(error = %err, "Nearby doctor lookup failed");
                Vec::new()
            }
        }
    }

    /// Doctors for the recorded injury, or all doctors without one
    pub async fn find_doctors(&self, session: &mut TriageSession, limit: u32) -> Result<Vec<Doctor>> {
        let query = session.doctor_query(limit);
        self.list_doctors(session, &query).await
    }

    pub async fn list_doctors(
        &self,
        session: &mut TriageSession,
        query: &DoctorQuery,
    ) -> Result<Vec<Doctor>> {
        let doctors = self.gateway.get_doctors(query).await?;
        debug!(count = doctors.len(), "Fetched doctor listing");
        session.record_doctors(doctors.clone());
        Ok(doctors)
    }

    pub async fn book(
        &self,
        session: &mut TriageSession,
        form: &BookingForm,
    ) -> Result<BookingResponse> {
        let request = session.booking_request(form)?;
        let booking = self.gateway.book_appointment(&request).await?;
        session.record_booking(booking.clone());
        Ok(booking)
    }
}
