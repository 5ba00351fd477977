use crate::handlers::{
    assets::{api_not_found, get_asset, get_assets},
    health::health_check,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{routing::get, Router};
use std::path::Path;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with API routes, docs and the viewer's static files.
///
/// Any path that is neither an API route nor a file under `static_dir` gets
/// `index.html`, so deep links like `/assets/bitget` reach the client router.
/// `/images` is the exception: a missing image is a plain 404.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    let index_file = static_dir.join("index.html");
    let viewer = ServeDir::new(static_dir).fallback(ServeFile::new(index_file));
    let images = ServeDir::new(static_dir.join("images"));

    let api = Router::new()
        .route("/v1/assets", get(get_assets))
        .route("/v1/assets/:identifier", get(get_asset))
        .fallback(api_not_found);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Catalog routes
        .nest("/api", api)
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Viewer
        .nest_service("/images", images)
        .fallback_service(viewer)
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
