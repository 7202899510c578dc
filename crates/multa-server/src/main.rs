//! multa-server - extraction microservice for transit infraction notices.

use tracing::info;
use tracing_subscriber::EnvFilter;

use multa_server::config::ServerConfig;
use multa_server::routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();

    let app = routes::build_router();

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("multa-server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
