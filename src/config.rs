use std::{env, time::Duration};

use crate::services::places_client::{
    places_service::{PlacesServiceConfig, DEFAULT_HOST, DEFAULT_REQUEST_TIMEOUT},
    types::places_service_error::PlacesServiceError,
};

pub const DEFAULT_PORT: u16 = 3000;

pub struct AppConfig {
    pub places: PlacesServiceConfig,
    pub auth_key: Option<String>,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, PlacesServiceError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, PlacesServiceError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GOOGLE_MAPS_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                PlacesServiceError::Configuration("GOOGLE_MAPS_API_KEY must be set".to_string())
            })?;

        let request_timeout = match lookup("PLACES_REQUEST_TIMEOUT_SECS") {
            Some(secs) => Duration::from_secs(
                secs.parse::<u64>()
                    .map_err(|e| {
                        PlacesServiceError::Configuration(format!(
                            "Invalid PLACES_REQUEST_TIMEOUT_SECS: {}",
                            e
                        ))
                    })?,
            ),
            None => DEFAULT_REQUEST_TIMEOUT,
        };

        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| PlacesServiceError::Configuration(format!("Invalid PORT: {}", e)))?,
            None => DEFAULT_PORT,
        };

        Ok(AppConfig {
            places: PlacesServiceConfig {
                api_key,
                host: lookup("GOOGLE_MAPS_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
                request_timeout,
            },
            auth_key: lookup("AUTH_KEY").filter(|k| !k.is_empty()),
            port,
        })
    }
}
