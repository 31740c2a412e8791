use std::time::Duration;

use async_trait::async_trait;
use config_engine::ClientSettings;
use logger_redacted::redacted_debug;
use reqwest::multipart::Form;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::gateway::TriageGateway;
use crate::models::{
    AdminStats, BookingRequest, BookingResponse, ChatHistory, ChatMessageRequest,
    ChatMessageResponse, Doctor, DoctorQuery, HealthAssessmentRequest, HealthAssessmentResponse,
    ScanResult, VoiceAnalysisResponse,
};
use crate::operation::Operation;
use crate::upload::UploadFile;

/// HTTP implementation of [`TriageGateway`].
///
/// Holds only the connection pool and the fixed origin, so clones are cheap
/// and concurrent calls need no coordination.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Client for `base_url` (e.g. `http://localhost:8000`) with the
    /// transport's default timeouts
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, reqwest::Client::new())
    }

    /// Client with an optional whole-request timeout. Fails when the
    /// transport cannot be initialised rather than dropping the timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> reqwest::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_http_client(base_url, builder.build()?))
    }

    pub fn from_settings(settings: &ClientSettings) -> reqwest::Result<Self> {
        Self::with_timeout(
            settings.api_url.clone(),
            settings.request_timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn with_http_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, operation: Operation) -> String {
        format!("{}{}", self.base_url, operation.path())
    }

    fn request(&self, operation: Operation) -> RequestBuilder {
        self.http.request(operation.method(), self.url(operation))
    }

    fn multipart(
        &self,
        operation: Operation,
        field: &'static str,
        file: UploadFile,
    ) -> ApiResult<RequestBuilder> {
        debug!(operation = %operation, field, bytes = file.len(), "Encoding multipart upload");
        let part = file
            .into_part()
            .map_err(|source| ApiError::Transport { operation, source })?;
        Ok(self.request(operation).multipart(Form::new().part(field, part)))
    }

    /// Send, branch on status, decode. The shape shared by every operation
    /// except the health check.
    async fn execute<T: DeserializeOwned>(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> ApiResult<T> {
        debug!(operation = %operation, path = operation.path(), "Sending backend request");

        let response = request
            .send()
            .await
            .map_err(|source| ApiError::Transport { operation, source })?;

        let status = response.status();
        debug!(operation = %operation, status = status.as_u16(), "Backend responded");

        if !status.is_success() {
            let detail = if operation.surfaces_error_detail() {
                error_detail(response).await
            } else {
                None
            };
            return Err(ApiError::Http {
                operation,
                status: status.as_u16(),
                detail,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport { operation, source })?;

        serde_json::from_slice(&body).map_err(|source| ApiError::Decode { operation, source })
    }
}

/// Best-effort `{"detail": "..."}` extraction from an error body.
/// Non-JSON bodies, non-string or empty details yield `None`.
async fn error_detail(response: Response) -> Option<String> {
    let body = response.bytes().await.ok()?;
    let value: serde_json::Value = serde_json::from_slice(&body).ok()?;
    value
        .get("detail")?
        .as_str()
        .filter(|detail| !detail.is_empty())
        .map(str::to_owned)
}

#[async_trait]
impl TriageGateway for ApiClient {
    async fn scan_injury(&self, image: UploadFile) -> ApiResult<ScanResult> {
        let request = self.multipart(Operation::ScanInjury, "image", image)?;
        self.execute(Operation::ScanInjury, request).await
    }

    async fn get_doctors(&self, query: &DoctorQuery) -> ApiResult<Vec<Doctor>> {
        let request = self.request(Operation::GetDoctors).query(query);
        self.execute(Operation::GetDoctors, request).await
    }

    async fn book_appointment(&self, request: &BookingRequest) -> ApiResult<BookingResponse> {
        redacted_debug!(
            "Booking doctor {} slot '{}' for {}",
            request.doctor_id,
            request.appointment_slot,
            request.patient_phone
        );
        let builder = self.request(Operation::BookAppointment).json(request);
        self.execute(Operation::BookAppointment, builder).await
    }

    async fn get_admin_stats(&self) -> ApiResult<AdminStats> {
        let request = self.request(Operation::GetAdminStats);
        self.execute(Operation::GetAdminStats, request).await
    }

    async fn health_check(&self) -> bool {
        match self.request(Operation::HealthCheck).send().await {
            Ok(response) => {
                debug!(status = response.status().as_u16(), "Health check responded");
                response.status().is_success()
            }
            Err(e) => {
                debug!(error = %e, "Health check could not reach backend");
                false
            }
        }
    }

    async fn analyze_health_assessment(
        &self,
        request: &HealthAssessmentRequest,
    ) -> ApiResult<HealthAssessmentResponse> {
        let builder = self.request(Operation::AnalyzeHealthAssessment).json(request);
        self.execute(Operation::AnalyzeHealthAssessment, builder).await
    }

    async fn analyze_voice(&self, audio: UploadFile) -> ApiResult<VoiceAnalysisResponse> {
        let request = self.multipart(Operation::AnalyzeVoice, "audio", audio)?;
        self.execute(Operation::AnalyzeVoice, request).await
    }

    async fn send_chat_message(
        &self,
        request: &ChatMessageRequest,
    ) -> ApiResult<ChatMessageResponse> {
        let builder = self.request(Operation::SendChatMessage).json(request);
        self.execute(Operation::SendChatMessage, builder).await
    }

    async fn get_chat_history(&self) -> ApiResult<ChatHistory> {
        let request = self.request(Operation::GetChatHistory);
        self.execute(Operation::GetChatHistory, request).await
    }
}
