use axum::extract::DefaultBodyLimit;
use axum::{middleware, routing::get, Router};
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api::login::{self, SharedDirectory};
use crate::api::sessions::{self, SharedStore};
use crate::infra::http::cors;

/// Session store app: the `/api/sessions` routes, static files for everything else.
pub fn build_sessions_app(store: SharedStore, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        // Records have no size cap.
        .route(
            "/api/sessions",
            get(sessions::list)
                .post(sessions::upsert)
                .layer(DefaultBodyLimit::disable()),
        )
        .route("/api/sessions/", get(sessions::list))
        .route(
            "/api/sessions/:code",
            get(sessions::get_one).delete(sessions::delete),
        )
        .route(
            "/api/sessions/:code/",
            get(sessions::get_one).delete(sessions::delete),
        )
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(middleware::from_fn(cors::open_cors))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Login app: a single `POST /login`.
pub fn build_login_app(users: SharedDirectory) -> Router {
    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route("/login", axum::routing::post(login::login))
        .layer(cors::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(users)
}
