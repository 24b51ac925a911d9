use serde::{Deserialize, Serialize};

use super::google_places_status::GooglePlacesStatus;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoogleLatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoogleViewport {
    pub northeast: GoogleLatLng,
    pub southwest: GoogleLatLng,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoogleGeometry {
    pub location: GoogleLatLng,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<GoogleViewport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoogleAddressComponent {
    pub long_name: String,
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

/// Only the fields in the details field mask are modelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GooglePlaceDetail {
    pub place_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<GoogleGeometry>,
    #[serde(default)]
    pub address_components: Vec<GoogleAddressComponent>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GooglePlaceDetailsResponse {
    pub status: GooglePlacesStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<GooglePlaceDetail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
