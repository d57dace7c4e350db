use analytics::AnalyticsEngine;
use axum::{
    Router,
    routing::{get, post},
};
use dataset::Dataset;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access: the immutable
/// loaded dataset and the stateless aggregation engine.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub engine: AnalyticsEngine,
}

/// The main function to configure and run the web server.
///
/// Tracing is initialized by the main application, not here.
pub async fn run_server(
    addr: SocketAddr,
    dataset: Arc<Dataset>,
    engine: AnalyticsEngine,
) -> anyhow::Result<()> {
    let app_state = Arc::new(AppState { dataset, engine });

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    // --- DEFINE THE APPLICATION ROUTES ---
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/dimensions", get(handlers::get_dimensions))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/dashboard", post(handlers::post_dashboard))
        .with_state(app_state)
        .layer(cors)
        // This middleware logs information about every incoming request.
        .layer(TraceLayer::new_for_http());

    tracing::info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
