//! Inbound HTTP boundary for the chat responder.
//!
//! Request validation (non-blank message) lives here, outside the mediator;
//! the mediator itself always answers with a string, so this surface never
//! returns a server error on behalf of the classifier.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use parley_chat::ChatMediator;
use parley_protocol::{ChatReply, ChatRequest};
use std::sync::Arc;

pub fn router(mediator: Arc<ChatMediator>) -> Router {
    Router::new()
        .route("/api/chat/send", post(send_message))
        .route("/health", get(health))
        .with_state(mediator)
}

async fn health() -> &'static str {
    "ok"
}

/// `POST /api/chat/send`: resolve one user message to a reply.
async fn send_message(
    State(mediator): State<Arc<ChatMediator>>,
    Json(request): Json<ChatRequest>,
) -> Response {
    if request.message.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "Message cannot be empty." })),
        )
            .into_response();
    }

    let response = mediator.resolve(&request.message).await;
    Json(ChatReply { response }).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use parley_chat::mediator::REPLY_LOW_CONFIDENCE;
    use parley_chat::ResponseTable;
    use parley_classifier::mock::MockClassifier;
    use std::io::Write;
    use tower::util::ServiceExt;

    fn chat_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/chat/send")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_blank_message_is_rejected_before_the_mediator_runs() {
        let mock = Arc::new(MockClassifier::new());
        let mediator = Arc::new(ChatMediator::new(mock.clone(), ResponseTable::default()));

        let response = router(mediator)
            .oneshot(chat_request(r#"{"message":"   "}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            "Message cannot be empty."
        );
        assert!(mock.received_messages().is_empty());
    }

    #[tokio::test]
    async fn test_reply_is_wrapped_in_response_envelope() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "ID,Intent,User_Query,System_Instruction,Ideal_Response,Source\n\
             1,hours,when open,none,We are open 9-5.,seed\n"
        )
        .unwrap();
        let table = ResponseTable::load(file.path());

        let mock = MockClassifier::new();
        mock.queue_classification("hours", 0.95);
        let mediator = Arc::new(ChatMediator::new(Arc::new(mock), table));

        let response = router(mediator)
            .oneshot(chat_request(r#"{"message":"when are you open?"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["response"], "We are open 9-5.");
    }

    #[tokio::test]
    async fn test_low_confidence_still_answers_200() {
        let mock = MockClassifier::new();
        mock.queue_classification("hours", 0.05);
        let mediator = Arc::new(ChatMediator::new(Arc::new(mock), ResponseTable::default()));

        let response = router(mediator)
            .oneshot(chat_request(r#"{"message":"mumble"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["response"], REPLY_LOW_CONFIDENCE);
    }

    #[tokio::test]
    async fn test_health_probe() {
        let mediator = Arc::new(ChatMediator::new(
            Arc::new(MockClassifier::new()),
            ResponseTable::default(),
        ));

        let response = router(mediator)
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
