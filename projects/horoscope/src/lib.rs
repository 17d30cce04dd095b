//! Zodiac user service
//!
//! - REST API endpoints in `endpoints/`
//! - SQLite models and queries in `db/`
//! - Horoscope text fetched from the ohmanda.com provider at creation time

pub mod config;
pub mod db;
pub mod endpoints;
pub mod sign;

use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::config::AppConfig;
use crate::db::SqlitePool;

/// Builds the service router. Shared by the binary and the integration tests.
pub fn router(pool: SqlitePool, config: AppConfig) -> Router {
    Router::new()
        .route("/setup_db", post(endpoints::setup_db::index::handler))
        .route(
            "/users",
            post(endpoints::users::create::index::handler)
                .get(endpoints::users::list::index::handler),
        )
        .route(
            "/users/{id}",
            get(endpoints::users::read::index::handler)
                .delete(endpoints::users::delete::index::handler),
        )
        .layer(Extension(pool))
        .layer(Extension(config))
}
