use anyhow::Context;

use cropwise_api::{ApiConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cropwise_observability::init();

    let config = ApiConfig::from_env();
    let bind_addr = config.bind_addr;

    let state = AppState::reference(config).context("failed to build application state")?;
    tracing::info!(labels = state.model.labels().len(), "reference crop classifier loaded");
    tracing::info!(
        crops = ?state.market.basis().crops(),
        fallback = state.market.basis().fallback(),
        "price table loaded"
    );

    let app = cropwise_api::build_app(state);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
