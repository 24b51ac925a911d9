use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use crate::services::places_client::types::places_service_error::PlacesServiceError;

#[derive(Debug)]
pub struct AppError {
    pub code: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(code: StatusCode, message: &str) -> Self {
        AppError {
            code,
            message: message.to_string(),
        }
    }
}

impl From<PlacesServiceError> for AppError {
    fn from(err: PlacesServiceError) -> Self {
        match err {
            PlacesServiceError::SessionToken(_) => {
                AppError::new(StatusCode::BAD_REQUEST, err.to_string().as_str())
            }
            PlacesServiceError::RemoteRequest(_) => {
                AppError::new(StatusCode::BAD_GATEWAY, "Places provider request failed")
            }
            PlacesServiceError::Configuration(_) => {
                AppError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        }
    }
}

#[derive(Serialize)]
struct ResponseJson {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response<Body> {
        (
            self.code,
            Json(ResponseJson {
                message: self.message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_service_errors_to_status_codes() {
        let err = AppError::from(PlacesServiceError::SessionToken("x".to_string()));
        assert_eq!(err.code, StatusCode::BAD_REQUEST);

        let err = AppError::from(PlacesServiceError::RemoteRequest(
            "OVER_QUERY_LIMIT".to_string(),
        ));
        assert_eq!(err.code, StatusCode::BAD_GATEWAY);
        assert!(!err.message.contains("OVER_QUERY_LIMIT"));
    }
}
