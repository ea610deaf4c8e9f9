//! Route configuration and setup.

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use vidgallery_core::Config;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;

    let app = Router::new()
        .route("/api/upload/process", post(handlers::upload::process_upload))
        .route("/api/gallery", get(handlers::gallery::list_videos))
        .route("/api/gallery/{id}", get(handlers::gallery::get_video))
        .route("/api/alive", get(handlers::health::alive))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins.contains(&"*".to_string()) {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins: Result<Vec<HeaderValue>, _> =
            config.cors_origins.iter().map(|o| o.parse()).collect();
        CorsLayer::new()
            .allow_origin(origins.map_err(|e| anyhow::anyhow!("Invalid CORS origin: {}", e))?)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    };

    Ok(cors)
}
