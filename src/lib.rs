pub mod api;
pub mod batch;
pub mod config;
pub mod engine;
pub mod error;
pub mod llm;
pub mod postprocessing;
pub mod state;

use crate::config::Config;
use crate::engine::Orchestrator;
use crate::llm::OpenAiClient;
use crate::postprocessing::{MarkdownRenderer, RenderOptions};
use crate::state::AppState;
use std::sync::Arc;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,primer_lib=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Builds the orchestrator shared by the server and the batch driver.
pub fn build_orchestrator(config: &Config) -> anyhow::Result<Orchestrator> {
    let client = OpenAiClient::new(config.llm.clone())?;
    Ok(Orchestrator::new(Arc::new(client), config.generation.clone()))
}

/// Serves the HTTP API until Ctrl-C or SIGTERM.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let orchestrator = build_orchestrator(&config)?;
    let renderer = MarkdownRenderer::new(RenderOptions::from(&config.render));
    let app = api::router(AppState::new(orchestrator, renderer));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(model = %config.llm.model, "Textbook service listening on {}", addr);
    info!("Endpoints:");
    info!("  - POST /api/generate-toc");
    info!("  - POST /api/generate-content");
    info!("  - POST /api/generate-content-html");
    info!("  - POST /api/chat");
    info!("  - GET  /health");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP server exited");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
