use crate::engine::Orchestrator;
use crate::postprocessing::MarkdownRenderer;
use std::sync::Arc;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
    pub renderer: Arc<MarkdownRenderer>,
}

impl AppState {
    pub fn new(orchestrator: Orchestrator, renderer: MarkdownRenderer) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            renderer: Arc::new(renderer),
        }
    }
}
