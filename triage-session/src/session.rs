use serde::{Deserialize, Serialize};
use tracing::debug;
use triage_gateway::{
    BookingRequest, BookingResponse, Doctor, DoctorQuery, HealthAssessmentResponse, ScanResult,
    VoiceAnalysisResponse,
};
use validator::Validate;

use crate::booking::BookingForm;
use crate::context::{InjuryContext, Intake};
use crate::error::{Result, SessionError};

/// State handed from one triage step to the next.
///
/// An intake (scan, questionnaire or voice note) produces the injury context,
/// the doctor listing is filtered by it, a doctor is picked from the listing
/// and the booking carries the context's injury type. Recording a new intake
/// starts over from that point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageSession {
    intake: Option<Intake>,
    injury_context: Option<InjuryContext>,
    doctors: Vec<Doctor>,
    selected_doctor: Option<Doctor>,
    booking: Option<BookingResponse>,
}

impl TriageSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_scan(&mut self, scan: ScanResult) -> &InjuryContext {
        self.record_intake(Intake::Scan(scan))
    }

    pub fn record_assessment(&mut self, assessment: HealthAssessmentResponse) -> &InjuryContext {
        self.record_intake(Intake::Assessment(assessment))
    }

    pub fn record_voice(&mut self, voice: VoiceAnalysisResponse) -> &InjuryContext {
        self.record_intake(Intake::Voice(voice))
    }

    fn record_intake(&mut self, intake: Intake) -> &InjuryContext {
        let context = intake.injury_context();
        debug!(
            injury_type = %context.injury_type,
            risk_level = %context.risk_level,
            "Recorded triage intake"
        );
        self.intake = Some(intake);
        self.doctors.clear();
        self.selected_doctor = None;
        self.booking = None;
        self.injury_context.insert(context)
    }

    pub fn intake(&self) -> Option<&Intake> {
        self.intake.as_ref()
    }

    pub fn injury_context(&self) -> Option<&InjuryContext> {
        self.injury_context.as_ref()
    }

    pub fn require_context(&self) -> Result<&InjuryContext> {
        self.injury_context.as_ref().ok_or(SessionError::NoIntake)
    }

    /// Query filtered by the injury context, or unfiltered without one
    pub fn doctor_query(&self, limit: u32) -> DoctorQuery {
        match &self.injury_context {
            Some(context) => context.doctor_query(limit),
            None => DoctorQuery::new().limit(limit),
        }
    }

    /// Remember the last listing so a doctor can be picked from it by id
    pub fn record_doctors(&mut self, doctors: Vec<Doctor>) {
        self.doctors = doctors;
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn select_doctor(&mut self, doctor: Doctor) -> &Doctor {
        self.booking = None;
        self.selected_doctor.insert(doctor)
    }

    pub fn select_doctor_by_id(&mut self, doctor_id: i64) -> Result<&Doctor> {
        let doctor = self
            .doctors
            .iter()
            .find(|doctor| doctor.id == doctor_id)
            .cloned()
            .ok_or(SessionError::UnknownDoctor(doctor_id))?;
        Ok(self.select_doctor(doctor))
    }

    pub fn selected_doctor(&self) -> Option<&Doctor> {
        self.selected_doctor.as_ref()
    }

    /// Build the booking payload for the selected doctor.
    ///
    /// The slot must be one the doctor offers. The injury type comes from the
    /// context when there is one and is omitted otherwise.
    pub fn booking_request(&self, form: &BookingForm) -> Result<BookingRequest> {
        let doctor = self
            .selected_doctor
            .as_ref()
            .ok_or(SessionError::NoDoctorSelected)?;
        form.validate()?;
        if !doctor.offers_slot(&form.appointment_slot) {
            return Err(SessionError::SlotUnavailable {
                doctor: doctor.name.clone(),
                slot: form.appointment_slot.clone(),
            });
        }

        Ok(BookingRequest {
            doctor_id: doctor.id,
            patient_name: form.patient_name.clone(),
            patient_phone: form.patient_phone.clone(),
            appointment_slot: form.appointment_slot.clone(),
            injury_type: self
                .injury_context
                .as_ref()
                .map(|context| context.injury_type.clone()),
        })
    }

    pub fn record_booking(&mut self, booking: BookingResponse) -> &BookingResponse {
        self.booking.insert(booking)
    }

    pub fn booking(&self) -> Option<&BookingResponse> {
        self.booking.as_ref()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
