use places_gateway::{
    app, config::AppConfig, services::places_client::places_service::PlacesService,
};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    info!("Starting app...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    let places_service = match PlacesService::new(config.places) {
        Ok(service) => service,
        Err(e) => {
            error!("Failed to initialize places service: {}", e);
            std::process::exit(1);
        }
    };

    let app = app::gen_app(places_service, config.auth_key);

    let listener = match tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind port {}: {}", config.port, e);
            std::process::exit(1);
        }
    };
    info!("Listening on port {}", config.port);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
