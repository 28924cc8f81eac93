use std::{env, net::SocketAddr, sync::Arc};

use sketch_proxy::{
    app::env::Envy, generate::presets::SketchPreset, replicate::service::ReplicateClient,
    AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port();
    let Some(preset) = SketchPreset::from_name(envy.sketch_preset())
    else {
        panic!("unknown sketch preset {}", envy.sketch_preset());
    };
    let predictions = match ReplicateClient::new(envy.replicate_api_url()) {
        Ok(client) => client,
        Err(e) => panic!("{:#?}", e),
    };

    tracing::info!(
        "using preset {} against {}",
        preset.name,
        envy.replicate_api_url()
    );

    let state = AppState {
        envy: Arc::new(envy),
        preset,
        predictions: Arc::new(predictions),
    };

    // app
    let app = sketch_proxy::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("shutting down");
}
