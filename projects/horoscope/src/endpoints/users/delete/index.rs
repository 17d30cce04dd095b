use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::db::{user::queries::delete_user_by_id, SqlitePool};

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
    DeleteUserById {
        #[from]
        source: crate::db::user::queries::DeleteUserByIdError,
    },
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> axum::response::Response {
        match self {
            HandlerError::GetConnectionFromPool { source } => (StatusCode::INTERNAL_SERVER_ERROR, source.to_string()).into_response(),
            HandlerError::UserNotFound { .. } => (StatusCode::NOT_FOUND, "User not found".to_string()).into_response(),
            HandlerError::DeleteUserById { source } => (StatusCode::INTERNAL_SERVER_ERROR, source.to_string()).into_response(),
        }
    }
}

/// Axum handler: DELETE /users/{id}
pub async fn handler(
    Extension(pool): Extension<SqlitePool>,
    Path(user_id): Path<i32>,
) -> impl IntoResponse {
    let mut conn = match pool.get() {
        Ok(c) => c,
        Err(source) => return HandlerError::GetConnectionFromPool { source }.into_response(),
    };

    match delete_user_by_id(&mut conn, user_id) {
        Ok(true) => (
            StatusCode::OK,
            Json(json!({ "ok": true, "message": format!("User {user_id} deleted") })),
        )
            .into_response(),
        Ok(false) => HandlerError::UserNotFound { user_id }.into_response(),
        Err(source) => HandlerError::DeleteUserById { source }.into_response(),
    }
}
