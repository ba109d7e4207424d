// src/handlers/chat.rs
use crate::error::ResponderError;
use crate::models::chat::{ChatRequest, ChatResponse};
use crate::responder;
use axum::{routing::post, Json, Router};
use std::any::Any;
use std::backtrace::Backtrace;
use std::panic::{self, AssertUnwindSafe};
use uuid::Uuid;

pub fn chat_routes() -> Router {
    Router::new().route("/chat", post(chat))
}

async fn chat(Json(request): Json<ChatRequest>) -> Json<ChatResponse> {
    let classification = responder::classify(&request.question);
    tracing::debug!(topic = classification.label(), "classified question");
    tracing::trace!(question = %request.question, "chat question");

    Json(answer_question(&request.question))
}

/// Runs the responder and folds any failure, including a panic, into the response body.
pub fn answer_question(question: &str) -> ChatResponse {
    guarded(|| responder::respond(question))
}

fn guarded<F>(respond: F) -> ChatResponse
where
    F: FnOnce() -> Result<String, ResponderError>,
{
    match panic::catch_unwind(AssertUnwindSafe(respond)) {
        Ok(Ok(answer)) => ChatResponse::answered(answer),
        Ok(Err(err)) => failure_response(&err.to_string()),
        Err(payload) => failure_response(&panic_message(payload.as_ref())),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "responder panicked".to_string()
    }
}

fn failure_response(message: &str) -> ChatResponse {
    let error_id = Uuid::new_v4();

    tracing::error!(
        error_id = %error_id,
        error = %message,
        "chat response generation failed"
    );

    ChatResponse::failed(format!("{}\n{}", message, Backtrace::force_capture()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_has_no_error() {
        let response = answer_question("hello");
        assert_eq!(response.answer, responder::GREETING);
        assert!(response.error.is_none());
    }

    #[test]
    fn test_responder_error_is_reported_in_band() {
        let response = guarded(|| Err(ResponderError::UnknownTopic("weather".to_string())));
        assert_eq!(response.answer, "");
        let error = response.error.unwrap();
        assert!(error.starts_with("Unknown topic: weather\n"), "{}", error);
    }

    #[test]
    fn test_panic_is_reported_in_band() {
        let response = guarded(|| panic!("catalog exploded"));
        assert_eq!(response.answer, "");
        assert!(response.error.unwrap().starts_with("catalog exploded\n"));

        let response = guarded(|| panic!("lookup failed for {}", 42));
        assert!(response.error.unwrap().starts_with("lookup failed for 42\n"));
    }
}
