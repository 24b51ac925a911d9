use crate::{
    services::places_client::places_service::PlaceDetail,
    types::app_state::AppState,
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetLocationDetailsPayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub session_token: String,
}

#[derive(Serialize, Deserialize)]
pub struct GetLocationDetailsResponse {
    pub data: PlaceDetail,
}

pub async fn get_location_details(
    State(state): State<AppState>,
    Path(place_id): Path<String>,
    ValidatedQuery(payload): ValidatedQuery<GetLocationDetailsPayload>,
) -> Result<Response, AppError> {
    let detail = state
        .places_service
        .get_detail_by_place_id(&place_id, &payload.session_token)
        .await
        .map_err(|e| {
            error!("Failed to fetch location details for {}: {}", place_id, e);
            AppError::from(e)
        })?;

    Ok((StatusCode::OK, Json(GetLocationDetailsResponse { data: detail })).into_response())
}
