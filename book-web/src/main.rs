use book_controller::{Api, BookListController, HttpBookApi};
use book_web::config::{WebConfig, DEFAULT_LOG_FILTER};
use book_web::create_app;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = WebConfig::from_env();
    info!("Using books backend at {}", config.api.base_url);

    let api: Api = Arc::new(HttpBookApi::new(&config.api));
    let controller = Arc::new(BookListController::new(api));

    controller.refresh_list().await;
    if let Some(e) = controller.state().error {
        warn!("Initial book list unavailable: {}", e);
    }

    let app = create_app(&config.base_path, controller);
    let addr = config.addr();

    info!("Book web starting on {} at '{}/'", addr, config.base_path);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
