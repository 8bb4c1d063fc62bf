use anyhow::Context;
use clap::Parser;
use taut_engine::{AllocationEngine, EngineConfig, RandomGenerator};
use taut_gateway::app::App;
use taut_gateway::cli::CLI;
use taut_gateway::state::AppState;
use taut_store::RedbStore;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    info!(
        listen_addr = %config.listen_addr,
        db_path = %config.db_path.display(),
        min_code_length = config.min_code_length,
        retry_budget = config.retry_budget,
        "starting gateway server"
    );

    let store = RedbStore::open(&config.db_path)
        .with_context(|| format!("opening store at {}", config.db_path.display()))?;
    let engine_config = EngineConfig::builder()
        .min_code_length(config.min_code_length)
        .retry_budget(config.retry_budget)
        .build();
    let engine = AllocationEngine::new(store, RandomGenerator::new(), engine_config);
    let state = AppState::new(engine, config.public_base_url);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, App::router(state)).await?;

    Ok(())
}
