use tracing_subscriber::{EnvFilter, fmt};

use users_api::shell::config::AppConfig;
use users_api::shell::http::router;
use users_api::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env()?;

    // In-memory store for now
    let app = router(AppState::in_memory());

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Users endpoint: http://{}/users", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
