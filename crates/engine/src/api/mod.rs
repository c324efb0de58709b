//! HTTP API.
//!
//! Thin axum handlers over the use cases; every error is recovered here
//! and mapped onto a status code with a JSON `{error}` body.

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::app::App;

mod auth;
mod components;
mod drafts;
mod error;
mod links;
mod profile;
mod worlds;

pub use error::ApiError;

pub fn router(app: Arc<App>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/recover", post(auth::recover))
        .route("/api/profile/display-name", put(profile::update_display_name))
        .route("/api/worlds", get(worlds::list).post(worlds::create))
        .route("/api/worlds/current", get(worlds::current).put(worlds::select))
        .route(
            "/api/worlds/{id}",
            axum::routing::patch(worlds::update).delete(worlds::remove),
        )
        .route(
            "/api/components/{kind}",
            get(components::list).post(components::create),
        )
        .route(
            "/api/components/{kind}/{id}",
            axum::routing::patch(components::update).delete(components::remove),
        )
        .route("/api/links", get(links::resolve))
        .route("/api/draft", post(drafts::generate))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(app)
}

async fn health() -> &'static str {
    "ok"
}
