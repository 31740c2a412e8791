// Terminal rendering of backend results
use colored::{ColoredString, Colorize};
use triage_gateway::{
    AdminStats, AppointmentSummary, BookingResponse, ChatHistory, ChatMessageResponse, Doctor,
    HealthAssessmentResponse, RiskLevel, ScanResult, VoiceAnalysisResponse,
};
use triage_session::{capitalize_first, format_confidence, Intake, Reminder, TriageSession};

pub fn risk_badge(risk_level: RiskLevel) -> ColoredString {
    let label = format!(" {risk_level} RISK ");
    match risk_level {
        RiskLevel::Low => label.black().on_green(),
        RiskLevel::Medium => label.black().on_yellow(),
        RiskLevel::High => label.white().on_red().bold(),
    }
}

fn heading(text: &str) {
    println!("\n{}", text.bright_cyan().bold());
}

fn bullets(items: &[String]) {
    for item in items {
        println!("  • {item}");
    }
}

pub fn scan(result: &ScanResult) {
    heading("🩹 Scan result");
    println!(
        "{} {}  ({} confidence)",
        capitalize_first(&result.injury_type).bold(),
        risk_badge(result.risk_level),
        format_confidence(result.confidence)
    );
    println!("{}", result.risk_reason);
    if let Some(notes) = &result.visual_notes {
        println!("{}", notes.dimmed());
    }

    heading("First aid");
    bullets(&result.guidance.first_aid_steps);
    if !result.guidance.warnings.is_empty() {
        heading("⚠️  Warnings");
        bullets(&result.guidance.warnings);
    }
    println!("\n{} {}", "Urgency:".bold(), result.guidance.urgency);
    println!("{} {}", "Follow-up:".bold(), result.guidance.follow_up);
    println!("\n{}", result.disclaimer.dimmed());
}

pub fn assessment(result: &HealthAssessmentResponse) {
    heading("📋 Health assessment");
    println!(
        "{} {}  score {:.1}/10, {} confidence",
        capitalize_first(&result.affected_area).bold(),
        risk_badge(result.risk_level),
        result.risk_score,
        format_confidence(result.confidence_score)
    );
    println!("{} {}", "Urgency:".bold(), result.urgency);

    if !result.possible_conditions.is_empty() {
        heading("Possible conditions");
        for condition in &result.possible_conditions {
            println!(
                "  • {} ({} likelihood): {}",
                condition.name.bold(),
                format!("{:?}", condition.probability).to_lowercase(),
                condition.description
            );
        }
    }

    heading("Recommendations");
    bullets(&result.recommendations);
    heading("Immediate care");
    bullets(&result.treatment_guidance.immediate_care);
    if !result.treatment_guidance.warning_signs.is_empty() {
        heading("⚠️  Seek help if");
        bullets(&result.treatment_guidance.warning_signs);
    }
    println!("\n{}", result.disclaimer.dimmed());
}

pub fn voice(result: &VoiceAnalysisResponse) {
    heading("🎙️  Transcription");
    println!(
        "\"{}\"  ({}, {} confidence)",
        result.transcribed_text.italic(),
        result.detected_language,
        format_confidence(result.confidence)
    );
    assessment(&result.analysis);
}

pub fn doctors(doctors: &[&Doctor], total: usize) {
    heading(&format!("👩‍⚕️ Doctors ({} of {total})", doctors.len()));
    if doctors.is_empty() {
        println!("{}", "No doctors match. Clear the filters and try again.".yellow());
        return;
    }
    for doctor in doctors {
        println!(
            "\n[{}] {}  {}",
            doctor.id.to_string().bright_white().bold(),
            doctor.name.bold(),
            format!("★ {:.1}", doctor.rating).yellow()
        );
        println!("    {} · {} · {:.1} km", doctor.specialization, doctor.hospital, doctor.distance_km);
        if !doctor.available_slots.is_empty() {
            println!("    Slots: {}", doctor.available_slots.join(", ").green());
        }
    }
}

pub fn booking(booking: &BookingResponse) {
    heading("✅ Appointment confirmed");
    println!("{} {}", "Token:".bold(), booking.token_number.bright_green().bold());
    println!(
        "{} with {} ({})",
        booking.appointment_slot, booking.doctor_name, booking.specialization
    );
    println!("{}", booking.confirmation_message);
    println!("\n{}", booking.disclaimer.dimmed());
}

pub fn stats(stats: &AdminStats) {
    heading("📊 Backend statistics");
    println!("Total scans:        {}", stats.total_scans);
    println!("Total appointments: {}", stats.total_appointments);

    heading("Risk distribution");
    for (level, count) in &stats.risk_distribution {
        let badge = level
            .parse::<RiskLevel>()
            .map(risk_badge)
            .unwrap_or_else(|_| level.normal());
        println!("  {badge} {count}");
    }

    heading("Injury distribution");
    for (injury, count) in &stats.injury_distribution {
        println!("  {} {count}", capitalize_first(injury));
    }

    heading("Recent scans");
    for scan in &stats.recent_scans {
        println!(
            "  #{} {} {} {} {}",
            scan.id,
            scan.injury_type,
            scan.risk_level,
            format_confidence(scan.confidence),
            scan.timestamp.dimmed()
        );
    }

    heading("Recent appointments");
    for appointment in &stats.recent_appointments {
        println!(
            "  {} {} at {} ({})",
            appointment.token_number.bold(),
            appointment.patient_name,
            appointment.appointment_slot,
            appointment.status
        );
    }
}

pub fn appointment(appointment: &AppointmentSummary) {
    heading(&format!("🎫 Appointment {}", appointment.token_number));
    println!("{} {}", "Patient:".bold(), appointment.patient_name);
    println!("{} {}", "Phone:".bold(), appointment.patient_phone);
    println!("{} {}", "Slot:".bold(), appointment.appointment_slot);
    if let Some(doctor) = &appointment.doctor_name {
        println!("{} {doctor}", "Doctor:".bold());
    }
    if let Some(hospital) = &appointment.hospital {
        println!("{} {hospital}", "Hospital:".bold());
    }
    if let Some(injury) = &appointment.injury_type {
        println!("{} {injury}", "Injury:".bold());
    }
    println!("{} {}", "Status:".bold(), appointment.status);
    println!("{} {}", "Booked:".bold(), appointment.created_at.dimmed());
}

pub fn chat(reply: &ChatMessageResponse) {
    println!("\n{} {}", "🤖".bold(), reply.response);
    if !reply.follow_up_questions.is_empty() {
        heading("You could also ask");
        bullets(&reply.follow_up_questions);
    }
}

pub fn chat_history(history: &ChatHistory) {
    heading("💬 Conversation summary");
    println!("Messages: {}", history.total_messages);
    if !history.intents_discussed.is_empty() {
        println!("Topics:   {}", history.intents_discussed.join(", "));
    }
    for (entity, values) in &history.entities_mentioned {
        println!("  {}: {}", capitalize_first(entity), values.join(", "));
    }
}

pub fn reminder(reminder: &Reminder) {
    if reminder.active {
        println!("⏰ {}", reminder.time.bright_yellow());
    } else {
        println!("{}", "No reminder set".dimmed());
    }
}

pub fn session(session: &TriageSession, reminder_state: &Reminder) {
    heading("🗂️  Current triage session");
    match session.intake() {
        Some(Intake::Scan(scan)) => println!("Intake:  photo scan ({})", scan.injury_type),
        Some(Intake::Assessment(result)) => {
            println!("Intake:  questionnaire ({})", result.affected_area)
        }
        Some(Intake::Voice(result)) => println!("Intake:  voice note ({})", result.analysis.affected_area),
        None => println!("Intake:  {}", "none yet".dimmed()),
    }
    if let Some(context) = session.injury_context() {
        println!("Risk:    {}", risk_badge(context.risk_level));
    }
    match session.selected_doctor() {
        Some(doctor) => println!("Doctor:  {} ({})", doctor.name, doctor.hospital),
        None if !session.doctors().is_empty() => println!(
            "Doctor:  {}",
            format!("choose from {} listed", session.doctors().len()).dimmed()
        ),
        None => println!("Doctor:  {}", "not selected".dimmed()),
    }
    if let Some(booking) = session.booking() {
        println!("Booking: {} at {}", booking.token_number.bold(), booking.appointment_slot);
    }
    reminder(reminder_state);
}
