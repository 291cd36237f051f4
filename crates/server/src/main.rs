use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::{error, info};

use server::config;
use server::docmosis::{DocmosisClient, DocumentRenderer, PassThroughRenderer};
use server::health;
use server::notify::Notifier;
use server::openapi;
use server::state::AppState;
use server::telemetry;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_telemetry();
    config::load_feature_flags();
    health::record_start_time();

    let flags = config::feature_flags();
    let renderer: Arc<dyn DocumentRenderer> = if flags.docmosis {
        Arc::new(DocmosisClient::new())
    } else {
        Arc::new(PassThroughRenderer)
    };
    let notifier = Arc::new(Notifier::new());

    let state = AppState::new(renderer, notifier);
    let app = openapi::api_router(state).layer(TraceLayer::new_for_http());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!(%addr, docmosis = flags.docmosis, notifications = flags.notifications, "Starting CMO review service");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
