use crate::{
    middlewares::auth::auth_middleware, routes::apply_routes,
    services::places_client::places_service::PlacesService, types::app_state::AppState,
};
use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;

pub fn gen_app(places_service: PlacesService, auth_key: Option<String>) -> Router {
    let cors_middleware = CorsLayer::new();
    let state = AppState {
        places_service,
        auth_key,
    };

    apply_routes(Router::new())
        .route("/", get(root))
        .layer(cors_middleware)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .with_state(state)
}

async fn root() -> &'static str {
    "OK"
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub google_server: mockito::ServerGuard,
}

#[cfg(test)]
pub async fn gen_mock_app_with_auth(auth_key: Option<String>) -> MockApp {
    use crate::services::places_client::places_service::PlacesServiceConfig;

    let google_server = mockito::Server::new_async().await;

    let places_service = PlacesService::new(PlacesServiceConfig {
        api_key: "key".to_string(),
        host: google_server.url(),
        request_timeout: std::time::Duration::from_secs(5),
    })
    .expect("Failed to build places service");

    MockApp {
        app: gen_app(places_service, auth_key),
        google_server,
    }
}

#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    gen_mock_app_with_auth(None).await
}
