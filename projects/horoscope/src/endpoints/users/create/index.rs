use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

use interfaces_ohmanda_horoscope::index::{fetch_horoscope, HoroscopeResponse};

use crate::config::AppConfig;
use crate::db::{
    user::models::NewUser,
    user::queries::insert_user,
    SqlitePool,
};
use crate::sign::Sign;

#[derive(Deserialize)]
pub struct UserAddRequestBody {
    name: String,
    sign: String,
}

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    InvalidSign {
        #[from]
        source: crate::sign::ParseSignError,
    },
    #[error("GetConnectionFromPool: {source}")]
    GetConnectionFromPool {
        #[from]
        source: r2d2::Error,
    },
    #[error(transparent)]
    InsertUser {
        #[from]
        source: crate::db::user::queries::InsertUserError,
    },
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> axum::response::Response {
        match self {
            HandlerError::InvalidSign { source } => (StatusCode::BAD_REQUEST, source.to_string()).into_response(),
            HandlerError::GetConnectionFromPool { source } => (StatusCode::INTERNAL_SERVER_ERROR, source.to_string()).into_response(),
            HandlerError::InsertUser { source } => (StatusCode::INTERNAL_SERVER_ERROR, source.to_string()).into_response(),
        }
    }
}

/// Axum handler: POST /users
///
/// Validates the sign, enriches best-effort with a horoscope text, then
/// persists the user. Enrichment failures never fail the request.
pub async fn handler(
    Extension(pool): Extension<SqlitePool>,
    Extension(config): Extension<AppConfig>,
    Json(input): Json<UserAddRequestBody>,
) -> impl IntoResponse {
    let parsed_sign = match input.sign.parse::<Sign>() {
        Ok(s) => s,
        Err(source) => return HandlerError::InvalidSign { source }.into_response(),
    };

    let horoscope_text = fetch_horoscope_text(&config.horoscope_base_url, parsed_sign).await;

    let mut conn = match pool.get() {
        Ok(c) => c,
        Err(source) => return HandlerError::GetConnectionFromPool { source }.into_response(),
    };

    let new_user = NewUser {
        name: &input.name,
        sign: parsed_sign.as_str(),
        horoscope: horoscope_text.as_deref(),
    };

    if let Err(source) = insert_user(&mut conn, &new_user) {
        return HandlerError::InsertUser { source }.into_response();
    }

    (StatusCode::OK, Json(json!({ "ok": true }))).into_response()
}

/// Best-effort enrichment: any transport error, non-success status or
/// malformed body downgrades to `None` and the user is created without a
/// horoscope.
async fn fetch_horoscope_text(base_url: &str, sign_val: Sign) -> Option<String> {
    let result = match fetch_horoscope(base_url, sign_val.as_str()).await {
        Ok(r) => r,
        Err(err) => {
            warn!("Horoscope fetch failed for {sign_val}: {err}");
            return None;
        }
    };

    if !result.status.is_success() {
        warn!("Horoscope provider returned {} for {sign_val}", result.status);
        return None;
    }

    match serde_json::from_str::<HoroscopeResponse>(&result.body) {
        Ok(parsed) => Some(parsed.horoscope),
        Err(err) => {
            warn!("Horoscope response body malformed for {sign_val}: {err}");
            None
        }
    }
}
