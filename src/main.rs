use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use exam_report_backend::{
    config::{get_config, init_config},
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let app_state = AppState::new();

    let app = Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/analysis/results", post(routes::analysis::analyze_results))
        .route("/html2pdf", post(routes::pdf::html_to_pdf))
        .route("/html2pdf-long", post(routes::pdf::html_to_pdf_long))
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(50 * 1024 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
