use crate::api::body::{field_text, parse_object};
use crate::api::Envelope;
use crate::error::{ApiError, Result};
use crate::llm::Message;
use crate::state::AppState;
use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub response: String,
}

/// Follow-up questions about a passage the reader highlighted.
pub async fn chat(State(state): State<AppState>, body: Bytes) -> Result<Json<Envelope<ChatReply>>> {
    let data = parse_object(&body).ok_or(ApiError::MissingData)?;

    let messages = match data.get("messages") {
        Some(value @ Value::Array(_)) => serde_json::from_value::<Vec<Message>>(value.clone()).ok(),
        _ => None,
    }
    .ok_or_else(|| ApiError::MissingFields(vec!["messages".to_string()]))?;
    let context = field_text(&data, "context").unwrap_or_default();

    tracing::info!(turns = messages.len(), "Received chat request");

    let response = state.orchestrator.explain(&context, messages).await?;

    Ok(Json(Envelope::success(
        ChatReply { response },
        "Response generated successfully",
    )))
}
