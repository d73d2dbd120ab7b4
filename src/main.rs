use std::sync::Arc;

use coze_proxy::{config::Config, routes, state::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coze_proxy=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    tracing::info!("upstream: {}", config.chat_url());
    tracing::info!("outbound timeout: {:?}", config.timeout);
    if config.credentials().is_err() {
        tracing::warn!("Coze credentials not configured; chat requests will fail with 500");
    }
    if config.debug {
        tracing::warn!("DEBUG enabled: raw upstream payloads are echoed to clients");
    }

    let port = config.port;
    let state = Arc::new(AppState::new(config)?);

    let app = routes::create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;

    println!("🚀 coze proxy running at http://localhost:{port}");
    axum::serve(listener, app).await?;

    Ok(())
}
