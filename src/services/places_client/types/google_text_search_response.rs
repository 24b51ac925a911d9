use serde::{Deserialize, Serialize};

use super::{google_place_details_response::GoogleGeometry, google_places_status::GooglePlacesStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GooglePlaceSearchResult {
    pub place_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<GoogleGeometry>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GoogleTextSearchResponse {
    pub status: GooglePlacesStatus,
    #[serde(default)]
    pub results: Vec<GooglePlaceSearchResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
