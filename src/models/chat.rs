// src/models/chat.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub question: String,
}

/// Always sent with HTTP 200. Failures are reported through `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    pub error: Option<String>,
}

impl ChatResponse {
    pub fn answered(answer: String) -> Self {
        Self { answer, error: None }
    }

    pub fn failed(error: String) -> Self {
        Self {
            answer: String::new(),
            error: Some(error),
        }
    }
}
