use anyhow::Context;

use countsheet_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    countsheet_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    let app = countsheet_api::app::build_app();

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server terminated")?;
    Ok(())
}
