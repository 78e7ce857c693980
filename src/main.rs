use primer_lib::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    primer_lib::init_tracing();

    let config = Config::load()?;
    tracing::info!("Configuration loaded");

    primer_lib::run(config).await
}
