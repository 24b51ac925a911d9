use serde::{Deserialize, Serialize};

use super::google_places_status::GooglePlacesStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoogleAutocompleteResponsePredictionStructuredFormatting {
    pub main_text: String,
    #[serde(default)]
    pub secondary_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoogleAutocompleteResponsePrediction {
    pub place_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_formatting: Option<GoogleAutocompleteResponsePredictionStructuredFormatting>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GoogleAutocompleteResponse {
    pub status: GooglePlacesStatus,
    #[serde(default)]
    pub predictions: Vec<GoogleAutocompleteResponsePrediction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
