use std::env;
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "horoscope.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_HOROSCOPE_API_BASE_URL: &str = "https://ohmanda.com/api/horoscope";

/// Runtime configuration, read once at startup from the environment
/// (a `.env` file is honored when present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub horoscope_base_url: String,
}

#[derive(Debug, Error)]
pub enum LoadConfigError {
    #[error("ParseBindAddr: {source}")]
    ParseBindAddr {
        #[from]
        source: std::net::AddrParseError,
    },
}

impl AppConfig {
    pub fn from_env() -> Result<AppConfig, LoadConfigError> {
        dotenvy::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|source| LoadConfigError::ParseBindAddr { source })?;

        let horoscope_base_url = env::var("HOROSCOPE_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_HOROSCOPE_API_BASE_URL.to_string());

        Ok(AppConfig {
            database_url,
            bind_addr,
            horoscope_base_url,
        })
    }
}
