use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{
    AdminStats, BookingRequest, BookingResponse, ChatHistory, ChatMessageRequest,
    ChatMessageResponse, Doctor, DoctorQuery, HealthAssessmentRequest, HealthAssessmentResponse,
    ScanResult, VoiceAnalysisResponse,
};
use crate::upload::UploadFile;

/// The backend contract, one method per capability.
///
/// Every call is a single independent request: nothing is retried, cached
/// or deduplicated, and implementations hold no per-call state.
#[async_trait]
pub trait TriageGateway: Send + Sync {
    /// Upload an injury photo as multipart field `image`
    async fn scan_injury(&self, image: UploadFile) -> ApiResult<ScanResult>;

    /// Recommended doctors, in server order
    async fn get_doctors(&self, query: &DoctorQuery) -> ApiResult<Vec<Doctor>>;

    /// Non-2xx answers surface the backend's `detail` message when present
    async fn book_appointment(&self, request: &BookingRequest) -> ApiResult<BookingResponse>;

    async fn get_admin_stats(&self) -> ApiResult<AdminStats>;

    /// `true` only for a 2xx answer from `/`; never fails
    async fn health_check(&self) -> bool;

    async fn analyze_health_assessment(
        &self,
        request: &HealthAssessmentRequest,
    ) -> ApiResult<HealthAssessmentResponse>;

    /// Upload a voice note as multipart field `audio`
    async fn analyze_voice(&self, audio: UploadFile) -> ApiResult<VoiceAnalysisResponse>;

    async fn send_chat_message(&self, request: &ChatMessageRequest)
        -> ApiResult<ChatMessageResponse>;

    async fn get_chat_history(&self) -> ApiResult<ChatHistory>;
}
