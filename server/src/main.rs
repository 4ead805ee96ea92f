mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");
    let port = config.port;
    tracing::info!(api_base = %config.api_base, "relaying submissions upstream");

    let state = state::AppState::new(config);
    let app = routes::app(state).expect("router assembly failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "wisclub listening");
    axum::serve(listener, app).await.expect("server failed");
}
