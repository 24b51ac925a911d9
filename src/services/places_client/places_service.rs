use std::{sync::Arc, time::Duration};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use urlencoding::encode;

use super::{
    point_types::PointTypes,
    session_token::SessionToken,
    types::{
        google_autocomplete_response::{
            GoogleAutocompleteResponse, GoogleAutocompleteResponsePrediction,
        },
        google_place_details_response::{GooglePlaceDetail, GooglePlaceDetailsResponse},
        google_places_status::GooglePlacesStatus,
        google_text_search_response::{GooglePlaceSearchResult, GoogleTextSearchResponse},
        places_service_error::PlacesServiceError,
    },
};

pub type AutocompletePrediction = GoogleAutocompleteResponsePrediction;
pub type PlaceDetail = GooglePlaceDetail;
pub type PlaceSearchResult = GooglePlaceSearchResult;

pub const DEFAULT_HOST: &str = "https://maps.googleapis.com";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const AUTOCOMPLETE_PATH: &str = "/maps/api/place/autocomplete/json";
const DETAILS_PATH: &str = "/maps/api/place/details/json";
const TEXT_SEARCH_PATH: &str = "/maps/api/place/textsearch/json";

const CITIES_PLACE_TYPE: &str = "(cities)";

/// Fields requested for every detail lookup. Not caller configurable.
pub const DETAILS_FIELD_MASK: [&str; 5] = [
    "place_id",
    "name",
    "formatted_address",
    "geometry",
    "address_components",
];

#[derive(Clone)]
pub struct PlacesServiceConfig {
    pub api_key: String,
    pub host: String,
    pub request_timeout: Duration,
}

impl PlacesServiceConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: DEFAULT_HOST.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

#[derive(Clone)]
pub struct PlacesService {
    config: PlacesServiceConfig,
    client: reqwest::Client,
    point_types: Arc<PointTypes>,
}

impl PlacesService {
    pub fn new(mut config: PlacesServiceConfig) -> Result<Self, PlacesServiceError> {
        if config.api_key.trim().is_empty() {
            return Err(PlacesServiceError::Configuration(
                "API key is missing".to_string(),
            ));
        }

        let host = reqwest::Url::parse(&config.host).map_err(|e| {
            PlacesServiceError::Configuration(format!("Invalid host {}: {}", config.host, e))
        })?;
        if host.scheme() != "http" && host.scheme() != "https" {
            return Err(PlacesServiceError::Configuration(format!(
                "Unsupported host scheme: {}",
                host.scheme()
            )));
        }
        config.host = config.host.trim_end_matches('/').to_string();

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| {
                PlacesServiceError::Configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            config,
            client,
            point_types: Arc::new(PointTypes::new()),
        })
    }

    /// City mode asks the API for `(cities)` and returns everything it gets.
    /// Point mode keeps only predictions tagged with a point type, in order.
    pub async fn get_autocomplete_predictions(
        &self,
        search_text: &str,
        session_token: &str,
        is_city: bool,
    ) -> Result<Vec<AutocompletePrediction>, PlacesServiceError> {
        let session_token = SessionToken::parse(session_token)?;

        let mut query = format!("input={}&sessiontoken={}", encode(search_text), session_token);
        if is_city {
            query.push_str(&format!("&types={}", encode(CITIES_PLACE_TYPE)));
        }

        let body = self
            .fetch::<GoogleAutocompleteResponse>(AUTOCOMPLETE_PATH, &query)
            .await?;
        ensure_ok(AUTOCOMPLETE_PATH, body.status, body.error_message.as_deref())?;

        if is_city {
            return Ok(body.predictions);
        }

        Ok(body
            .predictions
            .into_iter()
            .filter(|p| self.point_types.matches(p.types.as_slice()))
            .collect())
    }

    pub async fn get_detail_by_place_id(
        &self,
        place_id: &str,
        session_token: &str,
    ) -> Result<PlaceDetail, PlacesServiceError> {
        let session_token = SessionToken::parse(session_token)?;

        let query = format!(
            "place_id={}&sessiontoken={}&fields={}",
            encode(place_id),
            session_token,
            encode(&DETAILS_FIELD_MASK.join(","))
        );

        let body = self
            .fetch::<GooglePlaceDetailsResponse>(DETAILS_PATH, &query)
            .await?;
        ensure_ok(DETAILS_PATH, body.status, body.error_message.as_deref())?;

        match (body.status, body.result) {
            (GooglePlacesStatus::Ok, Some(result)) => Ok(result),
            (status, _) => Err(PlacesServiceError::RemoteRequest(format!(
                "No place details for {} ({:?})",
                place_id, status
            ))),
        }
    }

    /// `Ok(None)` means the search ran and matched nothing.
    pub async fn search_by_text(
        &self,
        search_text: &str,
    ) -> Result<Option<PlaceSearchResult>, PlacesServiceError> {
        let query = format!("query={}", encode(search_text));

        let body = self
            .fetch::<GoogleTextSearchResponse>(TEXT_SEARCH_PATH, &query)
            .await?;
        ensure_ok(TEXT_SEARCH_PATH, body.status, body.error_message.as_deref())?;

        Ok(body.results.into_iter().next())
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
    ) -> Result<T, PlacesServiceError> {
        let url = format!(
            "{}{}?{}&key={}",
            self.config.host,
            path,
            query,
            encode(&self.config.api_key)
        );

        debug!(path, "Sending Places API request");

        let body = self
            .client
            .get(&url)
            .timeout(self.config.request_timeout)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(body)
    }
}

fn ensure_ok(
    path: &str,
    status: GooglePlacesStatus,
    error_message: Option<&str>,
) -> Result<(), PlacesServiceError> {
    status.check(error_message).map_err(|e| {
        warn!(path, "Places API returned {:?}", status);
        e
    })
}
