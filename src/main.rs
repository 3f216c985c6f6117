mod app;
mod config;
mod dashboard;
mod error;
mod feedback;
mod nutrition;
mod session;
mod state;
mod store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "caloridash=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = state::AppState::init().await?;
    tracing::info!(
        locale = ?state.config.dashboard.locale,
        utc_offset = %state.config.dashboard.utc_offset,
        feedback_relay = state.mailer.is_some(),
        "dashboard service starting"
    );

    app::serve(app::build_app(state)).await
}
