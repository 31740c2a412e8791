use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use triage_gateway::RiskLevel;

/// MediDoctor triage client
#[derive(Parser, Debug)]
#[command(name = "medidoctor", version)]
#[command(about = "Injury triage, doctor matching and appointment booking from the terminal")]
pub struct Cli {
    /// Backend origin, overriding settings files and MEDIDOCTOR_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Settings file (YAML, TOML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Session state file
    #[arg(long, global = true)]
    pub session: Option<PathBuf>,

    /// Print raw JSON responses instead of formatted output
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that the backend is reachable
    Health,

    /// Upload an injury photo for analysis
    Scan {
        image: PathBuf,
    },

    /// Answer the symptom questionnaire
    Assess(AssessArgs),

    /// Upload a voice note describing the symptoms
    Voice {
        audio: PathBuf,
    },

    /// List doctors for the current injury
    Doctors(DoctorsArgs),

    /// Pick a doctor from the last listing
    SelectDoctor {
        id: i64,
    },

    /// Book an appointment with the selected doctor
    Book {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        slot: String,
    },

    /// Show the current session
    Status,

    /// Backend statistics for administrators
    Stats,

    /// Find a recent appointment by token number
    Lookup {
        token: String,
    },

    /// Ask the assistant a question
    Chat {
        message: String,
    },

    /// Summary of the assistant conversation
    ChatHistory,

    /// Wound check reminder
    Reminder {
        #[command(subcommand)]
        action: ReminderAction,
    },

    /// Start a new triage flow. The reminder is kept.
    Reset,
}

#[derive(Args, Debug)]
pub struct AssessArgs {
    /// mild, moderate or severe
    #[arg(long)]
    pub pain_level: String,
    /// none, mild, moderate or severe
    #[arg(long)]
    pub swelling: String,
    /// "less than 24 hours", 1-2 days, 3-7 days, "1 week+" or "2 weeks+"
    #[arg(long)]
    pub duration: String,
    /// knee, ankle, wrist, elbow, shoulder, back, neck or other
    #[arg(long)]
    pub affected_area: String,
    /// none, mild, moderate, severe or unable
    #[arg(long)]
    pub movement_difficulty: String,
    /// yes or no
    #[arg(long)]
    pub redness: String,
    /// yes or no
    #[arg(long)]
    pub warmth: String,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args, Debug)]
pub struct DoctorsArgs {
    /// Ignore the injury context and browse every doctor
    #[arg(long)]
    pub all: bool,

    /// Override the injury type from the session
    #[arg(long)]
    pub injury_type: Option<String>,

    /// Override the risk level from the session
    #[arg(long)]
    pub risk_level: Option<RiskLevel>,

    #[arg(long)]
    pub limit: Option<u32>,

    /// Match name, specialization or hospital
    #[arg(long)]
    pub search: Option<String>,

    #[arg(long)]
    pub specialization: Option<String>,

    /// Match the hospital name or area
    #[arg(long)]
    pub location: Option<String>,

    #[arg(long, default_value_t = 0.0)]
    pub min_rating: f64,
}

#[derive(Subcommand, Debug)]
pub enum ReminderAction {
    /// Remind to check the wound in N hours
    Set {
        hours: u32,
    },
    Show,
    Clear,
}
