use nologynav::config::HostConfig;
use nologynav::routes;
use nologynav::state::AppState;
use nologynav::upstream::SummaryClient;

#[tokio::main]
async fn main() {
    // Optional .env for local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = HostConfig::from_env().expect("invalid host configuration");
    let upstream = SummaryClient::new(&config.upstream_url, config.timeouts).expect("summary client init failed");
    tracing::info!(upstream = upstream.endpoint(), "forwarding /get_summary");

    let state = AppState::new(upstream);
    let app = match routes::app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to build Leptos app");
            std::process::exit(1);
        }
    };

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "nologynav listening");
    axum::serve(listener, app).await.expect("server failed");
}
