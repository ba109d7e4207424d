// lib.rs - Wellness assistant service: catalog, classifier and HTTP routes
pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod responder;

pub use catalog::{ResponseCatalog, Topic, CATALOG};
pub use error::{ConfigError, ResponderError};
pub use models::chat::{ChatRequest, ChatResponse};
pub use responder::{classify, respond, respond_with, Classification, GREETING};

use axum::Router;

/// Full application router with logging and CORS applied.
pub fn app_router() -> Router {
    Router::new()
        .merge(handlers::health::health_routes())
        .merge(handlers::chat::chat_routes())
        .merge(handlers::docs::docs_routes())
        .layer(axum::middleware::from_fn(
            middleware::logging::request_logging_middleware,
        ))
        .layer(middleware::cors::cors_layer())
}
