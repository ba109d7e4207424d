// src/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponderError {
    #[error("Unknown topic: {0}")]
    UnknownTopic(String),
    #[error("Topic '{0}' has no responses")]
    EmptyTopic(&'static str),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid PORT value '{0}': expected an integer between 0 and 65535")]
    InvalidPort(String),
}
