use serde::{Deserialize, Serialize};

use super::places_service_error::PlacesServiceError;

/// The `status` field every Places web service response carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GooglePlacesStatus {
    Ok,
    ZeroResults,
    NotFound,
    InvalidRequest,
    OverQueryLimit,
    RequestDenied,
    UnknownError,
    #[serde(other)]
    Unrecognized,
}

impl GooglePlacesStatus {
    /// `OK` and `ZERO_RESULTS` are successful calls; everything else is a failure.
    pub fn check(self, error_message: Option<&str>) -> Result<(), PlacesServiceError> {
        match self {
            GooglePlacesStatus::Ok | GooglePlacesStatus::ZeroResults => Ok(()),
            status => Err(PlacesServiceError::RemoteRequest(match error_message {
                Some(message) => format!("{:?}: {}", status, message),
                None => format!("{:?}", status),
            })),
        }
    }
}
