//! HTTP surface: routing, the success envelope and per-endpoint handlers.

pub mod body;
pub mod chat;
pub mod content;
pub mod health;
pub mod toc;

use crate::state::AppState;
use axum::{
    extract::Request,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use uuid::Uuid;

pub use chat::chat;
pub use content::{generate_content, generate_content_html};
pub use health::health_check;
pub use toc::generate_toc;

/// `{"status": "success", "data": ..., "message": ...}`
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub status: &'static str,
    pub data: T,
    pub message: &'static str,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(data: T, message: &'static str) -> Self {
        Self {
            status: "success",
            data,
            message,
        }
    }
}

pub fn router(state: AppState) -> Router {
    let trace = TraceLayer::new_for_http().make_span_with(|req: &Request| {
        tracing::info_span!(
            "request",
            request_id = %Uuid::new_v4(),
            method = %req.method(),
            uri = %req.uri(),
        )
    });

    Router::new()
        .route("/api/generate-toc", post(generate_toc))
        .route("/api/generate-content", post(generate_content))
        .route("/api/generate-content-html", post(generate_content_html))
        .route("/api/chat", post(chat))
        .route("/health", get(health_check))
        .layer(trace)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
