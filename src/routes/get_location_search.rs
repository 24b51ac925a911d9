use crate::{
    services::places_client::places_service::PlaceSearchResult,
    types::app_state::AppState,
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetLocationSearchPayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub query: String,
}

#[derive(Serialize, Deserialize)]
pub struct GetLocationSearchResponse {
    pub data: PlaceSearchResult,
}

pub async fn get_location_search(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetLocationSearchPayload>,
) -> Result<Response, AppError> {
    state
        .places_service
        .search_by_text(&payload.query)
        .await
        .map_err(|e| {
            error!("Failed to search locations: {}", e);
            AppError::from(e)
        })?
        .map(|result| (StatusCode::OK, Json(GetLocationSearchResponse { data: result })).into_response())
        .ok_or_else(|| AppError::new(StatusCode::NOT_FOUND, "No matching location"))
}
