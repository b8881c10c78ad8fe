use anyhow::Context as _;
use sea_orm::Database;
use tracing::info;

use smarter_core::config::Config as _;
use smarter_core::tracing::init_tracing;
use smarter_staff::config::StaffConfig;
use smarter_staff::router::build_router;
use smarter_staff::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("info,sqlx=warn");

    let config = StaffConfig::from_env().context("load staff config")?;
    info!(?config, "starting staff service");

    let db = Database::connect(&config.database_url)
        .await
        .context("connect to credential store")?;

    let state = AppState::new(db, &config);
    let router = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;

    info!("staff service listening on {addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
