use anyhow::Context as _;
use tracing::info;

use nikufam_api::config::ApiConfig;
use nikufam_api::infra::{cache, db};
use nikufam_api::router::build_router;
use nikufam_api::state::AppState;
use nikufam_core::config::Config as _;
use nikufam_core::tracing::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ApiConfig::from_env().context("load configuration")?;
    let store_timeout = config.store_timeout();

    let db = db::connect(&config).await?;
    db::ping(&db, store_timeout)
        .await
        .map_err(|e| anyhow::anyhow!("database unreachable: {e:?}"))?;
    info!("connected to database");

    let redis = cache::create_pool(&config.redis_url)?;
    cache::ping(&redis, store_timeout)
        .await
        .map_err(|e| anyhow::anyhow!("redis unreachable: {e:?}"))?;
    info!("connected to redis");

    let state = AppState {
        db: db.clone(),
        redis: redis.clone(),
        store_timeout,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;

    info!("api listening on {addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    redis.close();
    db.close().await.context("close database")?;
    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
