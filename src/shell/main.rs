use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use billing_reports::modules::catalog::adapters::outbound::seed::CatalogSeed;
use billing_reports::modules::catalog::adapters::outbound::stores_in_memory::InMemoryCatalog;
use billing_reports::shell::config::read_config;
use billing_reports::shell::http::router;
use billing_reports::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let settings = read_config().context("Failed to read configuration")?;

    let catalog = match &settings.catalog.seed_path {
        Some(path) => {
            let seed = CatalogSeed::from_file(path)
                .with_context(|| format!("Failed to load catalog seed {}", path.display()))?;
            tracing::info!(
                customers = seed.customers.len(),
                projects = seed.projects.len(),
                tasks = seed.tasks.len(),
                "catalog seeded"
            );
            InMemoryCatalog::from_seed(seed)?
        }
        None => {
            tracing::warn!("no catalog seed configured, starting with an empty catalog");
            InMemoryCatalog::new()
        }
    };

    let app = router(AppState::in_memory(catalog));

    let addr = settings.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("HTTP API on http://{}, GraphQL on http://{}/gql", addr, addr);
    axum::serve(listener, app).await?;
    Ok(())
}
