use axum::serve;
use thiserror::Error;
use tracing::info;

use projects_horoscope::config::AppConfig;
use projects_horoscope::db::create_pool;
use projects_horoscope::router;

#[derive(Debug, Error)]
pub enum MainError {
    #[error("LoadConfig: {source}")]
    LoadConfig {
        #[source]
        source: projects_horoscope::config::LoadConfigError,
    },
    #[error("TracingInit: {source}")]
    TracingInit {
        #[source]
        source: utils_trace::TracingInitError,
    },
    #[error("CreatePool: {source}")]
    CreatePool {
        #[source]
        source: r2d2::Error,
    },
    #[error("TcpListenerBind: {source}")]
    TcpListenerBind {
        #[source]
        source: std::io::Error,
    },
    #[error("Serve: {source}")]
    Serve {
        #[source]
        source: std::io::Error,
    },
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
    let config = AppConfig::from_env()
        .map_err(|source| MainError::LoadConfig { source })?;

    utils_trace::init("info")
        .map_err(|source| MainError::TracingInit { source })?;

    let pool = create_pool(&config.database_url)
        .map_err(|source| MainError::CreatePool { source })?;

    let addr = config.bind_addr;
    let app = router(pool, config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| MainError::TcpListenerBind { source })?;

    info!("Server running on addr: {}", addr);

    serve(listener, app)
        .await
        .map_err(|source| MainError::Serve { source })?;

    Ok(())
}
