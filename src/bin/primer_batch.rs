use primer_lib::batch::BatchDriver;
use primer_lib::config::Config;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    primer_lib::init_tracing();

    let config = Config::load()?;
    let orchestrator = Arc::new(primer_lib::build_orchestrator(&config)?);

    let summary = BatchDriver::new(orchestrator, config.batch)
        .run()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Error generating content");
            e
        })?;

    tracing::info!(
        chapters = summary.chapters,
        sections = summary.sections_written,
        subsections = summary.subsections_generated,
        "Batch generation finished"
    );
    Ok(())
}
