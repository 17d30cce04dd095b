use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use thiserror::Error;

use crate::db::{user::queries::get_user_by_id, SqlitePool};

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("GetConnectionFromPool: {source}")]
    GetConnectionFromPool {
        #[from]
        source: r2d2::Error,
    },
    #[error("UserNotFound: {user_id}")]
    UserNotFound {
        user_id: i32,
    },
    #[error(transparent)]
    GetUserById {
        #[from]
        source: crate::db::user::queries::GetUserByIdError,
    },
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> axum::response::Response {
        match self {
            HandlerError::GetConnectionFromPool { source } => (StatusCode::INTERNAL_SERVER_ERROR, source.to_string()).into_response(),
            HandlerError::UserNotFound { .. } => (StatusCode::NOT_FOUND, "User not found".to_string()).into_response(),
            HandlerError::GetUserById { source } => (StatusCode::INTERNAL_SERVER_ERROR, source.to_string()).into_response(),
        }
    }
}

/// Axum handler: GET /users/{id}
pub async fn handler(
    Extension(pool): Extension<SqlitePool>,
    Path(user_id): Path<i32>,
) -> impl IntoResponse {
    let mut conn = match pool.get() {
        Ok(c) => c,
        Err(source) => return HandlerError::GetConnectionFromPool { source }.into_response(),
    };

    match get_user_by_id(&mut conn, user_id) {
        Ok(Some(user)) => (StatusCode::OK, Json(user)).into_response(),
        Ok(None) => HandlerError::UserNotFound { user_id }.into_response(),
        Err(source) => HandlerError::GetUserById { source }.into_response(),
    }
}
