use std::{fmt, str::FromStr};

use uuid::Uuid;

use super::types::places_service_error::PlacesServiceError;

/// Groups a run of autocomplete calls with the detail lookup that ends it,
/// so the Places API bills them as one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionToken(Uuid);

impl SessionToken {
    pub fn parse(session_token: &str) -> Result<Self, PlacesServiceError> {
        Uuid::parse_str(session_token)
            .map(SessionToken)
            .map_err(|e| PlacesServiceError::SessionToken(format!("{}: {}", session_token, e)))
    }
}

impl FromStr for SessionToken {
    type Err = PlacesServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SessionToken::parse(s)
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
