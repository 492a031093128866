//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router.
//! Handlers delegate to the shared `TrackerService`.

use axum::Router;
use axum::handler::HandlerWithoutStateExt;
use axum::routing::{get, post};
use std::path::Path;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::error::{handle_panic, not_found};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build all API routes without `/api` prefix (for nesting under /api).
///
/// A known path called with the wrong method is answered like an unknown
/// path.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/exercise/new-user", post(handlers::users::create))
        .route("/exercise/users", get(handlers::users::list))
        .route("/exercise/add", post(handlers::exercises::add))
        .route("/exercise/log", get(handlers::exercises::log))
        .method_not_allowed_fallback(not_found)
}

/// Routes shared by every router flavour, without a fallback.
fn base_router(ctx: AxumContext) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes().with_state(state))
        .method_not_allowed_fallback(not_found)
}

/// Wrap a router in the middleware stack.
///
/// Layers are applied after the fallback so unmatched routes and static
/// files get the same CORS, tracing and panic handling as the API.
fn with_middleware(router: Router, cors_config: &CorsConfig) -> Router {
    router
        .layer(build_cors_layer(cors_config))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

/// Create the main Axum router with all API routes.
///
/// Unmatched paths return `404 not found` as plain text. For serving
/// static assets as well, use [`create_static_router`].
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    with_middleware(base_router(ctx).fallback(not_found), cors_config)
}

/// Create a router with API routes and static asset serving.
///
/// Paths that match no route are looked up in `static_dir`; `/` serves
/// `static_dir/index.html`. Missing files and non-GET requests for files
/// return `404 not found`.
///
/// # Example
/// ```ignore
/// let router = create_static_router(ctx, "./public", &CorsConfig::AllowAll);
/// ```
pub fn create_static_router<P: AsRef<Path>>(
    ctx: AxumContext,
    static_dir: P,
    cors_config: &CorsConfig,
) -> Router {
    let serve_dir = ServeDir::new(static_dir.as_ref())
        .append_index_html_on_directories(true)
        .not_found_service(not_found.into_service())
        .call_fallback_on_method_not_allowed(true);

    with_middleware(base_router(ctx).fallback_service(serve_dir), cors_config)
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
