use std::fmt;

/// One backend capability. Each gateway call maps to exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ScanInjury,
    GetDoctors,
    BookAppointment,
    GetAdminStats,
    HealthCheck,
    AnalyzeHealthAssessment,
    AnalyzeVoice,
    SendChatMessage,
    GetChatHistory,
}

impl Operation {
    pub const ALL: [Operation; 9] = [
        Operation::ScanInjury,
        Operation::GetDoctors,
        Operation::BookAppointment,
        Operation::GetAdminStats,
        Operation::HealthCheck,
        Operation::AnalyzeHealthAssessment,
        Operation::AnalyzeVoice,
        Operation::SendChatMessage,
        Operation::GetChatHistory,
    ];

    /// Path relative to the configured origin
    pub fn path(self) -> &'static str {
        match self {
            Operation::ScanInjury => "/api/scan",
            Operation::GetDoctors => "/api/doctors",
            Operation::BookAppointment => "/api/book",
            Operation::GetAdminStats => "/api/admin/stats",
            Operation::HealthCheck => "/",
            Operation::AnalyzeHealthAssessment => "/api/health-assessment",
            Operation::AnalyzeVoice => "/api/voice-analysis",
            Operation::SendChatMessage => "/api/chat",
            Operation::GetChatHistory => "/api/chat/history",
        }
    }

    pub fn method(self) -> reqwest::Method {
        match self {
            Operation::GetDoctors
            | Operation::GetAdminStats
            | Operation::HealthCheck
            | Operation::GetChatHistory => reqwest::Method::GET,
            Operation::ScanInjury
            | Operation::BookAppointment
            | Operation::AnalyzeHealthAssessment
            | Operation::AnalyzeVoice
            | Operation::SendChatMessage => reqwest::Method::POST,
        }
    }

    /// Fixed user-facing message for a non-2xx response
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::ScanInjury => "Scan failed",
            Operation::GetDoctors => "Failed to fetch doctors",
            Operation::BookAppointment => "Booking failed. Please try again.",
            Operation::GetAdminStats => "Failed to fetch stats",
            Operation::HealthCheck => "Backend is unreachable",
            Operation::AnalyzeHealthAssessment => "Health assessment failed",
            Operation::AnalyzeVoice => "Voice analysis failed",
            Operation::SendChatMessage => "Chat request failed",
            Operation::GetChatHistory => "Failed to fetch chat history",
        }
    }

    /// Whether a non-2xx body is inspected for a backend `detail` message.
    /// Only booking surfaces backend wording to the user.
    pub fn surfaces_error_detail(self) -> bool {
        matches!(self, Operation::BookAppointment)
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::ScanInjury => "scan_injury",
            Operation::GetDoctors => "get_doctors",
            Operation::BookAppointment => "book_appointment",
            Operation::GetAdminStats => "get_admin_stats",
            Operation::HealthCheck => "health_check",
            Operation::AnalyzeHealthAssessment => "analyze_health_assessment",
            Operation::AnalyzeVoice => "analyze_voice",
            Operation::SendChatMessage => "send_chat_message",
            Operation::GetChatHistory => "get_chat_history",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_booking_surfaces_backend_detail() {
        let surfacing: Vec<_> = Operation::ALL
            .iter()
            .filter(|op| op.surfaces_error_detail())
            .collect();
        assert_eq!(surfacing, vec![&Operation::BookAppointment]);
    }

    #[test]
    fn uploads_and_writes_are_posts() {
        assert_eq!(Operation::ScanInjury.method(), reqwest::Method::POST);
        assert_eq!(Operation::AnalyzeVoice.method(), reqwest::Method::POST);
        assert_eq!(Operation::GetChatHistory.method(), reqwest::Method::GET);
        assert_eq!(Operation::HealthCheck.path(), "/");
    }
}
