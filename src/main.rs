use dietlens::{
    app::{build_app, serve},
    config::LogFormat,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let app_state = AppState::init();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "dietlens=debug,axum=info,tower_http=info".to_string());

    if app_state.config.log_format == LogFormat::Json {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let bind = app_state.config.bind_addr();
    serve(build_app(app_state), &bind).await
}
