use crate::{
    types::app_state::AppState,
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetLocationSearchAutocompletePayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub search: String,

    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub session_token: String,

    pub city: Option<bool>,
}

#[derive(Serialize, Deserialize)]
pub struct GetLocationSearchAutocompleteResponseDataPrediction {
    pub place_id: String,
    pub description: String,
    pub main_text: Option<String>,
    pub secondary_text: Option<String>,
    pub types: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct GetLocationSearchAutocompleteResponseData {
    pub predictions: Vec<GetLocationSearchAutocompleteResponseDataPrediction>,
}

#[derive(Serialize, Deserialize)]
pub struct GetLocationSearchAutocompleteResponse {
    pub data: GetLocationSearchAutocompleteResponseData,
}

pub async fn get_location_search_autocomplete(
    State(state): State<AppState>,
    ValidatedQuery(GetLocationSearchAutocompletePayload {
        search,
        session_token,
        city,
    }): ValidatedQuery<GetLocationSearchAutocompletePayload>,
) -> Result<Response, AppError> {
    let predictions = state
        .places_service
        .get_autocomplete_predictions(&search, &session_token, city.unwrap_or(false))
        .await
        .map_err(|e| {
            error!("Failed to fetch location search autocomplete: {}", e);
            AppError::from(e)
        })?;

    Ok(Json(GetLocationSearchAutocompleteResponse {
        data: GetLocationSearchAutocompleteResponseData {
            predictions: predictions
                .into_iter()
                .map(|p| {
                    let (main_text, secondary_text) = match p.structured_formatting {
                        Some(f) => (Some(f.main_text), Some(f.secondary_text)),
                        None => (None, None),
                    };

                    GetLocationSearchAutocompleteResponseDataPrediction {
                        place_id: p.place_id,
                        description: p.description,
                        main_text,
                        secondary_text,
                        types: p.types,
                    }
                })
                .collect(),
        },
    })
    .into_response())
}
