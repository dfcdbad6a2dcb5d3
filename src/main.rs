mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    match config.api_upstream.as_deref() {
        Some(upstream) => tracing::info!(%upstream, timeout_secs = config.api_timeout_secs, "forwarding /api"),
        None => tracing::warn!("BLOG_API_UPSTREAM not set; /api forwarding disabled"),
    }

    let state = state::AppState::from_config(&config).expect("http client init failed");
    let app = routes::app(state).expect("router init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "blogfront listening");
    axum::serve(listener, app).await.expect("server failed");
}
