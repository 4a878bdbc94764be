#![recursion_limit = "256"]

mod rate_limit;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let upstream = state::UpstreamConfig::from_env().expect("TRANSFORM_BASE_URL required");

    // Sign-in stays disabled until an access code is configured; the UI then
    // renders read-only for everyone.
    let access_code = std::env::var("ACCESS_CODE")
        .ok()
        .filter(|code| !code.trim().is_empty());
    if access_code.is_none() {
        tracing::warn!("ACCESS_CODE not configured — sign-in disabled");
    }

    let state = state::AppState::new(upstream, access_code);
    let app = routes::app(state).expect("router init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "fhirbench listening");
    axum::serve(listener, app).await.expect("server failed");
}
