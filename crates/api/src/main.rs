use anyhow::Context;

use srcsync_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    srcsync_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        duplicate_key_policy = ?config.reconcile.duplicate_key_policy,
        "starting srcsync-api"
    );

    let app = srcsync_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
