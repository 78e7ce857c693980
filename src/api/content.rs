use crate::api::body::subsection_request;
use crate::api::Envelope;
use crate::engine::types::{GeneratedContent, RenderedContent};
use crate::error::Result;
use crate::state::AppState;
use axum::{body::Bytes, extract::State, Json};

/// Markdown for one subsection.
pub async fn generate_content(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Envelope<GeneratedContent>>> {
    let req = subsection_request(&body)?;
    tracing::info!(
        topic = %req.topic,
        subsection = %req.subsection_title,
        "Received request to generate content"
    );

    let content = state.orchestrator.generate_subsection(&req).await?;

    Ok(Json(Envelope::success(
        content,
        "Content generated successfully",
    )))
}

/// Same as [`generate_content`] but returns a complete HTML page.
pub async fn generate_content_html(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Envelope<RenderedContent>>> {
    let req = subsection_request(&body)?;
    tracing::info!(
        topic = %req.topic,
        subsection = %req.subsection_title,
        "Received request to generate HTML content"
    );

    let content = state.orchestrator.generate_subsection(&req).await?;
    let html = state
        .renderer
        .render_document(&content.content, Some(&req.subsection_title));

    Ok(Json(Envelope::success(
        RenderedContent {
            html,
            metadata: content.metadata,
        },
        "HTML content generated successfully",
    )))
}
