use crate::api::body::{field_text, parse_object};
use crate::api::Envelope;
use crate::engine::types::TableOfContents;
use crate::error::{ApiError, Result};
use crate::state::AppState;
use axum::{body::Bytes, extract::State, Json};

pub async fn generate_toc(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Envelope<TableOfContents>>> {
    let topic = parse_object(&body)
        .and_then(|data| field_text(&data, "topic"))
        .ok_or(ApiError::MissingTopic)?;

    tracing::info!(%topic, "Received request to generate table of contents");

    let toc = state.orchestrator.generate_toc(&topic).await?;

    Ok(Json(Envelope::success(
        toc,
        "Table of contents generated successfully",
    )))
}
