use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::db::{user::queries::reset_schema, SqlitePool};

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("GetConnectionFromPool: {source}")]
    GetConnectionFromPool {
        #[from]
        source: r2d2::Error,
    },
    #[error(transparent)]
    ResetSchema {
        #[from]
        source: crate::db::user::queries::ResetSchemaError,
    },
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> axum::response::Response {
        match self {
            HandlerError::GetConnectionFromPool { source } => (StatusCode::INTERNAL_SERVER_ERROR, source.to_string()).into_response(),
            HandlerError::ResetSchema { source } => (StatusCode::INTERNAL_SERVER_ERROR, source.to_string()).into_response(),
        }
    }
}

/// Axum handler: POST /setup_db
///
/// Drops and recreates the users table. Destructive; intended for
/// initialization and tests.
pub async fn handler(Extension(pool): Extension<SqlitePool>) -> impl IntoResponse {
    let mut conn = match pool.get() {
        Ok(c) => c,
        Err(source) => return HandlerError::GetConnectionFromPool { source }.into_response(),
    };

    if let Err(source) = reset_schema(&mut conn) {
        return HandlerError::ResetSchema { source }.into_response();
    }

    (StatusCode::OK, Json(json!({ "ok": true }))).into_response()
}
