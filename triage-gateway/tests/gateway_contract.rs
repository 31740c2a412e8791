//! Contract tests against a stub backend.
//!
//! Each test stands up a mockito server, points an `ApiClient` at it and
//! checks the request the client emits and how it maps the answer.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use std::io::Write;
use std::time::Duration;

use mockito::{Matcher, Server};
use serde_json::{json, Value};
use triage_gateway::*;

fn scan_result_json() -> Value {
    json!({
        "scan_id": 42,
        "injury_type": "cut",
        "confidence": 0.87,
        "visual_notes": "Linear laceration with clean edges",
        "visual_indicators": ["clean edges", "minor bleeding"],
        "risk_level": "MEDIUM",
        "risk_reason": "Moderate laceration",
        "risk_color": "yellow",
        "risk_factors": ["depth unknown"],
        "guidance": {
            "first_aid_steps": ["Apply pressure", "Clean the wound"],
            "warnings": ["Watch for infection"],
            "follow_up": "Change bandage daily and monitor for infection",
            "urgency": "Consult healthcare provider within 24 hours",
            "disclaimer": "demo"
        },
        "timestamp": "2024-01-15T10:30:00.123456",
        "disclaimer": "demo"
    })
}

fn assessment_json() -> Value {
    json!({
        "analysis_id": 48213,
        "risk_level": "HIGH",
        "risk_color": "red",
        "risk_score": 7.5,
        "risk_factors": ["Severe pain reported"],
        "urgency": "Seek care within hours",
        "possible_conditions": [{
            "name": "Fracture",
            "probability": "high",
            "description": "Severe pain with movement difficulty"
        }],
        "detected_patterns": ["inflammatory response"],
        "recommendations": ["Immobilize the area"],
        "treatment_guidance": {
            "immediate_care": ["Apply ice"],
            "medications": ["Paracetamol as directed"],
            "activities": ["Rest"],
            "warning_signs": ["Numbness"]
        },
        "affected_area": "wrist",
        "confidence_score": 0.92,
        "timestamp": "2024-01-15T10:30:00",
        "analysis_method": "Hybrid AI/ML + Rule-Based Medical Expert System",
        "disclaimer": "AI-generated assessment."
    })
}

fn doctors_json() -> Value {
    json!([{
        "id": 7,
        "name": "Dr. Anjali Rao",
        "specialization": "Orthopedic Surgery",
        "hospital": "Apollo Hospitals, Hyderabad",
        "distance_km": 2.4,
        "rating": 4.8,
        "available_slots": ["10:00 AM - 10:30 AM", "02:00 PM - 02:30 PM"],
        "expertise": ["Fractures", "Sports injuries"]
    }])
}

fn sample_booking() -> BookingRequest {
    BookingRequest {
        doctor_id: 7,
        patient_name: "Rahul Kumar".to_string(),
        patient_phone: "+91 98765 43210".to_string(),
        appointment_slot: "10:00 AM - 10:30 AM".to_string(),
        injury_type: None,
    }
}

#[tokio::test]
async fn get_doctors_sends_all_supplied_filters_in_order() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/doctors")
        .match_query(Matcher::Exact(
            "injury_type=fracture&risk_level=HIGH&limit=4".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(doctors_json().to_string())
        .create_async()
        .await;

    let client = ApiClient::new(server.url());
    let query = DoctorQuery::new()
        .injury_type("fracture")
        .risk_level(RiskLevel::High)
        .limit(4);
    let doctors = client.get_doctors(&query).await.unwrap();

    mock.assert_async().await;
    assert_eq!(doctors.len(), 1);
    assert_eq!(doctors[0].id, 7);
    assert_eq!(
        doctors[0].available_slots,
        vec!["10:00 AM - 10:30 AM", "02:00 PM - 02:30 PM"]
    );
}

#[tokio::test]
async fn get_doctors_omits_absent_filters() {
    let mut server = Server::new_async().await;
    let unfiltered = server
        .mock("GET", "/api/doctors")
        .match_query(Matcher::Exact("limit=10".to_string()))
        .with_status(200)
        .with_body("[]")
        .expect(2)
        .create_async()
        .await;
    let injury_only = server
        .mock("GET", "/api/doctors")
        .match_query(Matcher::Exact("injury_type=cut&limit=10".to_string()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = ApiClient::new(server.url());
    client.get_doctors(&DoctorQuery::new()).await.unwrap();
    client
        .get_doctors(&DoctorQuery::new().injury_type("cut"))
        .await
        .unwrap();
    client
        .get_doctors(&DoctorQuery::new().injury_type(""))
        .await
        .unwrap();

    unfiltered.assert_async().await;
    injury_only.assert_async().await;
}

#[tokio::test]
async fn get_doctors_failure_is_generic() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/doctors")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body(r#"{"detail":"database exploded"}"#)
        .create_async()
        .await;

    let err = ApiClient::new(server.url())
        .get_doctors(&DoctorQuery::new())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::HttpFailure);
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "Failed to fetch doctors");
}

#[tokio::test]
async fn book_appointment_returns_confirmation_unmodified() {
    let confirmation = json!({
        "booking_id": 1,
        "token_number": "MD1234",
        "doctor_name": "Dr. X",
        "specialization": "Orthopedic Surgery",
        "appointment_slot": "10:00 AM - 10:30 AM",
        "status": "confirmed",
        "confirmation_message": "OK",
        "disclaimer": "demo"
    });

    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/book")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "doctor_id": 7,
            "patient_name": "Rahul Kumar",
            "patient_phone": "+91 98765 43210",
            "appointment_slot": "10:00 AM - 10:30 AM"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(confirmation.to_string())
        .create_async()
        .await;

    let response = ApiClient::new(server.url())
        .book_appointment(&sample_booking())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(
        response,
        BookingResponse {
            booking_id: 1,
            token_number: "MD1234".to_string(),
            doctor_name: "Dr. X".to_string(),
            specialization: "Orthopedic Surgery".to_string(),
            appointment_slot: "10:00 AM - 10:30 AM".to_string(),
            status: "confirmed".to_string(),
            confirmation_message: "OK".to_string(),
            disclaimer: "demo".to_string(),
        }
    );
}

#[tokio::test]
async fn book_appointment_surfaces_backend_detail() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/book")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"Slot unavailable"}"#)
        .create_async()
        .await;

    let err = ApiClient::new(server.url())
        .book_appointment(&sample_booking())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::HttpFailure);
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.to_string(), "Slot unavailable");
}

#[tokio::test]
async fn book_appointment_falls_back_when_body_is_not_json() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/book")
        .with_status(400)
        .with_body("<html>Bad Request</html>")
        .create_async()
        .await;

    let err = ApiClient::new(server.url())
        .book_appointment(&sample_booking())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Booking failed. Please try again.");
}

#[tokio::test]
async fn book_appointment_falls_back_when_detail_is_not_a_string() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/book")
        .with_status(422)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":[{"loc":["body","patient_phone"],"msg":"too short"}]}"#)
        .create_async()
        .await;

    let err = ApiClient::new(server.url())
        .book_appointment(&sample_booking())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(422));
    assert_eq!(err.to_string(), "Booking failed. Please try again.");
}

#[tokio::test]
async fn book_appointment_surfaces_whitespace_detail_verbatim() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/book")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"  "}"#)
        .create_async()
        .await;

    let err = ApiClient::new(server.url())
        .book_appointment(&sample_booking())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "  ");
}

#[tokio::test]
async fn book_appointment_falls_back_when_detail_is_empty() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/book")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":""}"#)
        .create_async()
        .await;

    let err = ApiClient::new(server.url())
        .book_appointment(&sample_booking())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Booking failed. Please try again.");
}

#[tokio::test]
async fn configured_timeout_bounds_slow_responses() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/admin/stats")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_chunked_body(|w| {
            std::thread::sleep(Duration::from_secs(3));
            w.write_all(b"{}")
        })
        .create_async()
        .await;

    let client = ApiClient::with_timeout(server.url(), Some(Duration::from_millis(500))).unwrap();
    let err = client.get_admin_stats().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::TransportFailure);
}

#[tokio::test]
async fn scan_injury_uploads_image_field() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/scan")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .match_body(Matcher::Regex(
            r#"name="image"; filename="wound.jpg""#.to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(scan_result_json().to_string())
        .create_async()
        .await;

    let image = UploadFile::new("wound.jpg", "image/jpeg", b"fake-jpeg-bytes".to_vec()).unwrap();
    let result = ApiClient::new(server.url()).scan_injury(image).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.scan_id, 42);
    assert_eq!(result.risk_level, RiskLevel::Medium);
    assert_eq!(result.guidance.first_aid_steps.len(), 2);
    assert_eq!(result.risk_factors.as_deref(), Some(&["depth unknown".to_string()][..]));
}

#[tokio::test]
async fn scan_injury_failure_discards_body() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/scan")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"Scan failed: model offline"}"#)
        .create_async()
        .await;

    let image = UploadFile::new("wound.png", "image/png", b"png".to_vec()).unwrap();
    let err = ApiClient::new(server.url()).scan_injury(image).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::HttpFailure);
    assert_eq!(err.to_string(), "Scan failed");
}

#[tokio::test]
async fn invalid_content_type_never_reaches_the_backend() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/scan")
        .expect(0)
        .create_async()
        .await;

    let err = UploadFile::new("wound.jpg", "image jpeg", b"bytes".to_vec()).unwrap_err();
    assert_eq!(err.content_type, "image jpeg");

    let image = UploadFile::new("wound.jpg", "image/jpeg; charset=binary", b"bytes".to_vec());
    assert!(image.is_ok());

    mock.assert_async().await;
}

#[tokio::test]
async fn scan_injury_sends_parsed_content_type() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/scan")
        .match_body(Matcher::Regex("(?i)content-type: image/webp".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(scan_result_json().to_string())
        .create_async()
        .await;

    let image = UploadFile::new("wound.webp", "image/webp", b"webp".to_vec()).unwrap();
    ApiClient::new(server.url()).scan_injury(image).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn analyze_voice_uploads_audio_field() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/voice-analysis")
        .match_body(Matcher::Regex(
            r#"name="audio"; filename="note.webm""#.to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "transcribed_text": "my wrist hurts badly since yesterday",
                "confidence": 0.9,
                "detected_language": "en-US",
                "extracted_info": {
                    "pain_level": "severe",
                    "pain_descriptors": ["sharp"],
                    "swelling_severity": "mild",
                    "affected_area": "wrist",
                    "additional_symptoms": [],
                    "duration": "1-3 days",
                    "original_text": "my wrist hurts badly since yesterday"
                },
                "analysis": assessment_json(),
                "timestamp": "2024-01-15T10:30:00"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let audio = UploadFile::new("note.webm", "audio/webm", b"webm-bytes".to_vec()).unwrap();
    let result = ApiClient::new(server.url()).analyze_voice(audio).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.extracted_info.affected_area, "wrist");
    assert_eq!(result.analysis.risk_level, RiskLevel::High);
}

#[tokio::test]
async fn analyze_health_assessment_posts_answers() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/health-assessment")
        .match_body(Matcher::PartialJson(json!({
            "pain_level": "severe",
            "affected_area": "wrist"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(assessment_json().to_string())
        .create_async()
        .await;

    let request = HealthAssessmentRequest {
        pain_level: "severe".to_string(),
        swelling: "moderate".to_string(),
        duration: "1-3 days".to_string(),
        affected_area: "wrist".to_string(),
        movement_difficulty: "significant".to_string(),
        redness: "no".to_string(),
        warmth: "no".to_string(),
        additional_notes: None,
    };
    let response = ApiClient::new(server.url())
        .analyze_health_assessment(&request)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.possible_conditions[0].probability, Probability::High);
    assert!((response.risk_score - 7.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn admin_stats_with_unexpected_shape_is_a_decode_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/admin/stats")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"unexpected": true}"#)
        .create_async()
        .await;

    let err = ApiClient::new(server.url())
        .get_admin_stats()
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DecodeFailure);
    assert_eq!(err.operation(), Operation::GetAdminStats);
}

#[tokio::test]
async fn chat_endpoints_round_trip() {
    let mut server = Server::new_async().await;
    let chat = server
        .mock("POST", "/api/chat")
        .match_body(Matcher::Json(json!({"message": "my knee is swollen"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "response": "How long has it been swollen?",
                "intent": "symptom_report",
                "confidence": 0.8,
                "follow_up_questions": ["Is it warm to touch?"],
                "entities_detected": {"body_parts": ["knee"], "symptoms": ["swelling"]},
                "timestamp": "2024-01-15T10:30:00",
                "conversation_id": 1
            })
            .to_string(),
        )
        .create_async()
        .await;
    let history = server
        .mock("GET", "/api/chat/history")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "total_messages": 1,
                "intents_discussed": ["symptom_report"],
                "entities_mentioned": {"body_parts": ["knee"]},
                "conversation_history": [{"user": "my knee is swollen"}]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = ApiClient::new(server.url());
    let reply = client
        .send_chat_message(&ChatMessageRequest::new("my knee is swollen"))
        .await
        .unwrap();
    let snapshot = client.get_chat_history().await.unwrap();

    chat.assert_async().await;
    history.assert_async().await;
    assert_eq!(reply.entities_detected.intensity, None);
    assert_eq!(snapshot.total_messages, 1);
    assert_eq!(snapshot.entities_mentioned["body_parts"], vec!["knee"]);
}

#[tokio::test]
async fn health_check_is_true_only_on_success() {
    let mut online = Server::new_async().await;
    online
        .mock("GET", "/")
        .with_status(200)
        .with_body(r#"{"status":"online"}"#)
        .create_async()
        .await;
    assert!(ApiClient::new(online.url()).health_check().await);

    let mut degraded = Server::new_async().await;
    degraded
        .mock("GET", "/")
        .with_status(503)
        .create_async()
        .await;
    assert!(!ApiClient::new(degraded.url()).health_check().await);
}

#[tokio::test]
async fn health_check_swallows_transport_failures() {
    // Nothing listens on port 1
    let client = ApiClient::new("http://127.0.0.1:1");
    assert!(!client.health_check().await);
}

#[tokio::test]
async fn transport_failures_propagate_from_other_operations() {
    let client = ApiClient::new("http://127.0.0.1:1");
    let err = client.get_admin_stats().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TransportFailure);
    assert_eq!(err.code(), "GATEWAY_1001");
}
