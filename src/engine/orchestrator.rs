//! High-level coordinator: prompt → LLM → parse/validate → content.

use crate::config::GenerationSettings;
use crate::engine::prompt::PromptBuilder;
use crate::engine::types::{GeneratedContent, SubsectionRequest, TableOfContents};
use crate::llm::{ChatClient, ChatRequest, LlmError, Message};
use crate::postprocessing::{ensure_heading, extract_json, validate_toc};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{info, instrument, warn};

const EXPLAIN_TEMPERATURE: f32 = 0.7;
const EXPLAIN_MAX_TOKENS: u32 = 500;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error(transparent)]
    Llm(#[from] LlmError),
    #[error("Model returned invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Table of contents has the wrong shape: {}", .0.join("; "))]
    InvalidStructure(Vec<String>),
}

pub struct Orchestrator {
    client: Arc<dyn ChatClient>,
    settings: GenerationSettings,
}

impl Orchestrator {
    pub fn new(client: Arc<dyn ChatClient>, settings: GenerationSettings) -> Self {
        Self { client, settings }
    }

    /// Requests a table of contents in JSON mode and parses it into the typed
    /// hierarchy. Shape violations fail the call in strict mode and are only
    /// logged otherwise.
    #[instrument(skip(self))]
    pub async fn generate_toc(&self, topic: &str) -> Result<TableOfContents, GenerationError> {
        let start = Instant::now();
        info!("Generating table of contents");

        let prompt = PromptBuilder::table_of_contents(topic);
        let raw = self
            .client
            .complete(ChatRequest::new(prompt.into_messages()).json())
            .await?;

        let json = extract_json(&raw)
            .ok_or_else(|| GenerationError::InvalidJson("no JSON object in response".to_string()))?;
        let toc: TableOfContents =
            serde_json::from_str(json).map_err(|e| GenerationError::InvalidJson(e.to_string()))?;

        let problems = validate_toc(&toc);
        if !problems.is_empty() {
            if self.settings.strict_toc {
                return Err(GenerationError::InvalidStructure(problems));
            }
            warn!(?problems, "Accepting table of contents with structural problems");
        }

        info!(
            chapters = toc.chapters.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Table of contents generated"
        );
        Ok(toc)
    }

    /// Generates the markdown body of one subsection, guaranteeing it opens
    /// with `# {subsection_title}` or a heading of the model's own.
    #[instrument(skip(self, req), fields(subsection = %req.subsection_title))]
    pub async fn generate_subsection(
        &self,
        req: &SubsectionRequest,
    ) -> Result<GeneratedContent, GenerationError> {
        let start = Instant::now();
        info!("Generating content for subsection");

        let prompt = PromptBuilder::subsection(req);
        let raw = self
            .client
            .complete(ChatRequest::new(prompt.into_messages()))
            .await?;

        let content = ensure_heading(raw, &req.subsection_title);

        info!(
            chars = content.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Subsection content generated"
        );
        Ok(GeneratedContent {
            content,
            metadata: req.into(),
        })
    }

    /// Answers a follow-up question about a highlighted passage.
    #[instrument(skip(self, context, messages), fields(turns = messages.len()))]
    pub async fn explain(
        &self,
        context: &str,
        messages: Vec<Message>,
    ) -> Result<String, GenerationError> {
        let mut conversation = Vec::with_capacity(messages.len() + 1);
        conversation.push(Message::system(PromptBuilder::explain(context)));
        conversation.extend(messages);

        let request = ChatRequest::new(conversation)
            .with_model(self.settings.chat_model.clone())
            .with_temperature(EXPLAIN_TEMPERATURE)
            .with_max_tokens(EXPLAIN_MAX_TOKENS);

        Ok(self.client.complete(request).await?)
    }
}
