use anyhow::Context;

use aflow_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    aflow_observability::init();

    let config = ApiConfig::from_env()?;
    let app = aflow_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        session_ttl_minutes = config.session_ttl.num_minutes(),
        "listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
