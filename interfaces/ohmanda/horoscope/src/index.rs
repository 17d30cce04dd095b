use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

/// Bound on the whole outbound request, so a slow provider cannot hold a
/// create-user request indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HoroscopeApiResult {
    pub body: String,
    pub status: StatusCode,
}

/// Daily horoscope payload returned by the provider. The provider also
/// sends `sign` and `date` fields; only the text is kept.
#[derive(Debug, Clone, Deserialize)]
pub struct HoroscopeResponse {
    pub horoscope: String,
}

pub async fn fetch_horoscope(
    base_url: &str,
    sign: &str,
) -> Result<HoroscopeApiResult, FetchHoroscopeError> {
    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|source| FetchHoroscopeError::ClientBuild { source })?;

    let response = client
        .get(format!("{base_url}/{sign}"))
        .header("User-Agent", "rust-client")
        .send()
        .await
        .map_err(|source| FetchHoroscopeError::RequestSend { source })?;

    let status = response.status();

    let body = response
        .text()
        .await
        .map_err(|source| FetchHoroscopeError::ResponseRead { source })?;

    Ok(HoroscopeApiResult { body, status })
}

#[derive(Debug, Error)]
pub enum FetchHoroscopeError {
    #[error("ClientBuild: {source}")]
    ClientBuild {
        source: reqwest::Error,
    },

    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },
}
