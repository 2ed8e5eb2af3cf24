//! API router.
//!
//! `api_router()` holds the JSON endpoints; `app_router()` mounts them under
//! `/api/` and serves the static front-end for every other path.
//!
//! Layers (outermost → innermost): CORS → Cache-Control → access log → handler.

use std::path::Path;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;

/// Build the JSON API router (paths relative to `/api`).
///
/// NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
pub fn api_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/search", get(endpoints::search::search))
        .route("/chat", post(endpoints::chat::reply))
        .route("/medicines/:id", get(endpoints::medicines::detail))
        .route("/medicines/:id/report", get(endpoints::medicines::report))
        .route("/pharmacies", get(endpoints::pharmacies::nearby))
        .with_state(ctx)
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}

/// Build the full application router.
///
/// `public_dir` is served as a fallback when it exists; otherwise only the
/// API is mounted.
pub fn app_router(ctx: ApiContext, public_dir: Option<&Path>) -> Router {
    let mut router = Router::new().nest("/api", api_router(ctx));

    match public_dir {
        Some(dir) if dir.is_dir() => {
            tracing::info!(dir = %dir.display(), "Serving static front-end");
            router = router.fallback_service(ServeDir::new(dir));
        }
        Some(dir) => {
            tracing::warn!(dir = %dir.display(), "Static directory missing, serving API only");
        }
        None => {}
    }

    router.layer(cors_layer())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
