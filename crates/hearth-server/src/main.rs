use anyhow::Context;
use hearth_server::{app, AppState, Config};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hearth_server=info,tower_http=info")),
        )
        .init();

    info!("hearth starting...");

    let config = Config::load_default().unwrap_or_else(|e| {
        warn!("Failed to load config: {:#}, using defaults", e);
        Config::default()
    });

    info!(
        "Base URL: {}, Subforums: {} (refresh every {}s)",
        config.site.base_url, config.forums.subforums_file, config.forums.refresh_secs
    );

    let state = AppState::from_config(&config)?;
    info!(
        "{} route entries, {} official projects, {} personal projects",
        state.table.len(),
        config.site.official_projects.len(),
        config.site.personal_projects.len()
    );

    // Surface broken rows at startup; requests keep retrying on refresh
    if let Err(e) = state.forums.tree().await {
        warn!("Subforum tree unavailable at startup: {:?}", e);
    }

    let app = app(state).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
