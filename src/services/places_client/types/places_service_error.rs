#[derive(Debug)]
pub enum PlacesServiceError {
    /// The service could not be built from the given config.
    Configuration(String),
    /// The session token is not a valid UUID.
    SessionToken(String),
    /// The Places API call failed, timed out, or answered with a non-OK status.
    RemoteRequest(String),
}

impl std::fmt::Display for PlacesServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PlacesServiceError::Configuration(e) => write!(f, "Configuration error: {}", e),
            PlacesServiceError::SessionToken(e) => write!(f, "Invalid session token: {}", e),
            PlacesServiceError::RemoteRequest(e) => write!(f, "Remote request failed: {}", e),
        }
    }
}

impl std::error::Error for PlacesServiceError {}

impl From<reqwest::Error> for PlacesServiceError {
    fn from(err: reqwest::Error) -> Self {
        // Request URLs carry the API key.
        let err = err.without_url();

        if err.is_timeout() {
            return PlacesServiceError::RemoteRequest(format!("Request timed out: {}", err));
        }

        PlacesServiceError::RemoteRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PlacesServiceError::SessionToken("bad".to_string());
        assert_eq!(err.to_string(), "Invalid session token: bad");

        let err = PlacesServiceError::RemoteRequest("REQUEST_DENIED".to_string());
        assert_eq!(err.to_string(), "Remote request failed: REQUEST_DENIED");

        let err = PlacesServiceError::Configuration("missing API key".to_string());
        assert!(err.to_string().contains("missing API key"));
    }
}
