use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::any, Router};
use tower_http::trace::TraceLayer;

use crate::{
    app::env::Envy, generate::presets::SketchPreset, replicate::PredictionsApi,
};

pub mod app;
pub mod generate;
pub mod replicate;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub preset: &'static SketchPreset,
    pub predictions: Arc<dyn PredictionsApi>,
}

pub fn router(state: AppState) -> Router {
    let max_body_bytes = state.envy.max_body_bytes();

    let router = Router::new()
        .route("/", any(generate::controller::generate))
        .route("/api/generate", any(generate::controller::generate))
        // layers
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    app::cors::with_cors_headers(router)
}
