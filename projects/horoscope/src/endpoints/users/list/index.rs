use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use thiserror::Error;

use crate::db::{user::queries::get_all_users, SqlitePool};

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("GetConnectionFromPool: {source}")]
    GetConnectionFromPool {
        #[from]
        source: r2d2::Error,
    },
    #[error(transparent)]
    GetAllUsers {
        #[from]
        source: crate::db::user::queries::GetAllUsersError,
    },
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> axum::response::Response {
        match self {
            HandlerError::GetConnectionFromPool { source } => (StatusCode::INTERNAL_SERVER_ERROR, source.to_string()).into_response(),
            HandlerError::GetAllUsers { source } => (StatusCode::INTERNAL_SERVER_ERROR, source.to_string()).into_response(),
        }
    }
}

/// Axum handler: GET /users
pub async fn handler(Extension(pool): Extension<SqlitePool>) -> impl IntoResponse {
    let mut conn = match pool.get() {
        Ok(c) => c,
        Err(source) => return HandlerError::GetConnectionFromPool { source }.into_response(),
    };

    let all_users = match get_all_users(&mut conn) {
        Ok(rows) => rows,
        Err(source) => return HandlerError::GetAllUsers { source }.into_response(),
    };

    (StatusCode::OK, Json(all_users)).into_response()
}
