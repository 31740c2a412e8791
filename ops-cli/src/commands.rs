use std::path::Path;

use colored::Colorize;
use error_common::{codes, MediDoctorError, Result};
use logger_redacted::redacted_info;
use serde::Serialize;
use triage_gateway::{
    ApiClient, ChatMessageRequest, DoctorQuery, HealthAssessmentRequest, TriageGateway, UploadFile,
};
use triage_session::{
    find_appointment_by_token, BookingForm, DoctorFilter, Reminder, SessionState, SessionStore,
    TriageFlow, ALL_DOCTORS_LIMIT,
};

use crate::cli::{AssessArgs, Command, DoctorsArgs, ReminderAction};
use crate::render;

/// Everything a command needs: the backend flow, the saved state and how to
/// print results.
pub struct App {
    flow: TriageFlow<ApiClient>,
    store: SessionStore,
    doctor_limit: u32,
    json: bool,
}

impl App {
    pub fn new(client: ApiClient, store: SessionStore, doctor_limit: u32, json: bool) -> Self {
        Self {
            flow: TriageFlow::new(client),
            store,
            doctor_limit,
            json,
        }
    }

    pub async fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::Health => self.health().await,
            Command::Scan { image } => self.scan(&image).await,
            Command::Assess(args) => self.assess(args).await,
            Command::Voice { audio } => self.voice(&audio).await,
            Command::Doctors(args) => self.doctors(args).await,
            Command::SelectDoctor { id } => self.select_doctor(id),
            Command::Book { name, phone, slot } => self.book(&name, &phone, &slot).await,
            Command::Status => self.status(),
            Command::Stats => self.stats().await,
            Command::Lookup { token } => self.lookup(&token).await,
            Command::Chat { message } => self.chat(message).await,
            Command::ChatHistory => self.chat_history().await,
            Command::Reminder { action } => self.reminder(action),
            Command::Reset => self.reset(),
        }
    }

    fn load(&self) -> Result<SessionState> {
        Ok(self.store.load()?)
    }

    fn save(&self, state: &SessionState) -> Result<()> {
        Ok(self.store.save(state)?)
    }

    fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| MediDoctorError::Other(e.into()))?;
        println!("{json}");
        Ok(())
    }

    async fn health(&self) -> Result<()> {
        let client = self.flow.gateway();
        if client.health_check().await {
            println!("✅ {} {}", "Backend reachable at".bright_green(), client.base_url());
            Ok(())
        } else {
            Err(MediDoctorError::gateway(
                codes::gateway::TRANSPORT_FAILURE,
                format!("Backend at {} is not reachable", client.base_url()),
            ))
        }
    }

    async fn scan(&self, image: &Path) -> Result<()> {
        let upload = UploadFile::from_path(image).await?;
        let mut state = self.load()?;
        let result = self.flow.scan(&mut state.session, upload).await?;
        self.save(&state)?;

        if self.json {
            return self.print_json(&result);
        }
        render::scan(&result);
        println!("\nNext: {}", "medidoctor doctors".bold());
        Ok(())
    }

    async fn assess(&self, args: AssessArgs) -> Result<()> {
        let answers = HealthAssessmentRequest {
            pain_level: args.pain_level,
            swelling: args.swelling,
            duration: args.duration,
            affected_area: args.affected_area,
            movement_difficulty: args.movement_difficulty,
            redness: args.redness,
            warmth: args.warmth,
            additional_notes: args.notes.filter(|notes| !notes.trim().is_empty()),
        };

        let mut state = self.load()?;
        let outcome = self.flow.assess(&mut state.session, &answers).await?;
        self.save(&state)?;

        if self.json {
            return self.print_json(&outcome.result);
        }
        render::assessment(&outcome.result);
        if !outcome.nearby_doctors.is_empty() {
            let nearby: Vec<_> = outcome.nearby_doctors.iter().collect();
            render::doctors(&nearby, nearby.len());
        }
        Ok(())
    }

    async fn voice(&self, audio: &Path) -> Result<()> {
        let upload = UploadFile::from_path(audio).await?;
        let mut state = self.load()?;
        let outcome = self.flow.analyze_voice(&mut state.session, upload).await?;
        self.save(&state)?;

        if self.json {
            return self.print_json(&outcome.result);
        }
        render::voice(&outcome.result);
        if !outcome.nearby_doctors.is_empty() {
            let nearby: Vec<_> = outcome.nearby_doctors.iter().collect();
            render::doctors(&nearby, nearby.len());
        }
        Ok(())
    }

    fn doctor_query(&self, state: &SessionState, args: &DoctorsArgs) -> DoctorQuery {
        if args.all {
            return DoctorQuery::new().limit(args.limit.unwrap_or(ALL_DOCTORS_LIMIT));
        }

        let mut query = state
            .session
            .doctor_query(args.limit.unwrap_or(self.doctor_limit));
        if let Some(injury_type) = &args.injury_type {
            query = query.injury_type(injury_type.clone());
        }
        if let Some(risk_level) = args.risk_level {
            query = query.risk_level(risk_level);
        }
        query
    }

    async fn doctors(&self, args: DoctorsArgs) -> Result<()> {
        let mut state = self.load()?;
        let query = self.doctor_query(&state, &args);
        let doctors = self.flow.list_doctors(&mut state.session, &query).await?;
        self.save(&state)?;

        let filter = DoctorFilter {
            search: args.search,
            specialization: args.specialization,
            location: args.location,
            min_rating: args.min_rating,
        };
        let shown = filter.apply(&doctors);

        if self.json {
            return self.print_json(&shown);
        }
        render::doctors(&shown, doctors.len());
        if !shown.is_empty() {
            println!("\nNext: {}", "medidoctor select-doctor <id>".bold());
        }
        Ok(())
    }

    fn select_doctor(&self, id: i64) -> Result<()> {
        let mut state = self.load()?;
        let doctor = state.session.select_doctor_by_id(id)?.clone();
        self.save(&state)?;

        println!("Selected {} at {}", doctor.name.bold(), doctor.hospital);
        println!("Available slots: {}", doctor.available_slots.join(", ").green());
        Ok(())
    }

    async fn book(&self, name: &str, phone: &str, slot: &str) -> Result<()> {
        let form = BookingForm::new(name, phone, slot);
        let mut state = self.load()?;
        let booking = self.flow.book(&mut state.session, &form).await?;
        self.save(&state)?;
        redacted_info!(
            "Appointment {} booked for {}",
            booking.token_number,
            form.patient_phone
        );

        if self.json {
            return self.print_json(&booking);
        }
        render::booking(&booking);
        Ok(())
    }

    fn status(&self) -> Result<()> {
        let state = self.load()?;
        if self.json {
            return self.print_json(&state);
        }
        render::session(&state.session, &state.reminder);
        Ok(())
    }

    async fn stats(&self) -> Result<()> {
        let stats = self.flow.gateway().get_admin_stats().await?;
        if self.json {
            return self.print_json(&stats);
        }
        render::stats(&stats);
        Ok(())
    }

    async fn lookup(&self, token: &str) -> Result<()> {
        let stats = self.flow.gateway().get_admin_stats().await?;
        let appointment = find_appointment_by_token(&stats, token).ok_or_else(|| {
            MediDoctorError::Validation(format!(
                "No recent appointment with token '{}'",
                token.trim()
            ))
        })?;

        if self.json {
            return self.print_json(appointment);
        }
        render::appointment(appointment);
        Ok(())
    }

    async fn chat(&self, message: String) -> Result<()> {
        let reply = self
            .flow
            .gateway()
            .send_chat_message(&ChatMessageRequest::new(message))
            .await?;
        if self.json {
            return self.print_json(&reply);
        }
        render::chat(&reply);
        Ok(())
    }

    async fn chat_history(&self) -> Result<()> {
        let history = self.flow.gateway().get_chat_history().await?;
        if self.json {
            return self.print_json(&history);
        }
        render::chat_history(&history);
        Ok(())
    }

    fn reminder(&self, action: ReminderAction) -> Result<()> {
        let mut state = self.load()?;
        match action {
            ReminderAction::Set { hours } => {
                if hours == 0 {
                    return Err(MediDoctorError::Validation(
                        "Reminder must be at least one hour away".to_string(),
                    ));
                }
                state.reminder = Reminder::in_hours(hours);
                self.save(&state)?;
                println!("{}", "Reminder set".bright_green());
            }
            ReminderAction::Clear => {
                state.reminder.clear();
                self.save(&state)?;
            }
            ReminderAction::Show => {}
        }
        render::reminder(&state.reminder);
        Ok(())
    }

    fn reset(&self) -> Result<()> {
        let mut state = self.load()?;
        state.reset();
        self.save(&state)?;
        println!("Started a new triage session");
        Ok(())
    }
}
