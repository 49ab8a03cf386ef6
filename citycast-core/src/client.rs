//! Open-Meteo API client
//!
//! Both endpoints are free and need no API key. Responses are treated as
//! untrusted: a non-2xx status, a body that does not parse, or a missing field
//! is reported as an error rather than defaulted.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::LookupError;
use crate::model::{Coordinates, CurrentConditions, Location};
use crate::service::WeatherService;

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = concat!("citycast/", env!("CARGO_PKG_VERSION"));

/// Endpoints and limits for [`OpenMeteoClient`]
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the geocoding API (no trailing path)
    pub geocoding_url: String,
    /// Base URL of the forecast API (no trailing path)
    pub forecast_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            geocoding_url: DEFAULT_GEOCODING_URL.into(),
            forecast_url: DEFAULT_FORECAST_URL.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Point both APIs at the same base URL (used with mock servers).
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            geocoding_url: base_url.into(),
            forecast_url: base_url.into(),
            ..Self::default()
        }
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country_code: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentWeather,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    weathercode: i32,
    temperature: f64,
    windspeed: f64,
    winddirection: f64,
}

// ============================================================================
// Client
// ============================================================================

/// [`WeatherService`] backed by the Open-Meteo HTTP APIs
#[derive(Clone, Debug)]
pub struct OpenMeteoClient {
    http: Client,
    config: ClientConfig,
}

impl OpenMeteoClient {
    /// Build a client.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Network`] if the HTTP client cannot be built
    /// (for example, when no TLS backend is available).
    pub fn new(config: ClientConfig) -> Result<Self, LookupError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { http, config })
    }

    fn geocode_url(&self, query: &str) -> String {
        format!(
            "{}/v1/search?name={}&count=1&language=en&format=json",
            self.config.geocoding_url.trim_end_matches('/'),
            urlencoding::encode(query)
        )
    }

    fn forecast_url(&self, coordinates: Coordinates) -> String {
        format!(
            "{}/v1/forecast?latitude={}&longitude={}&current_weather=true",
            self.config.forecast_url.trim_end_matches('/'),
            coordinates.latitude,
            coordinates.longitude
        )
    }

    /// GET `url`, require a 2xx status, and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, LookupError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "request failed");
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(%url, error = %e, "unexpected response body");
            LookupError::InvalidResponse(e.to_string())
        })
    }
}

#[async_trait]
impl WeatherService for OpenMeteoClient {
    async fn geocode(&self, query: &str) -> Result<Option<Location>, LookupError> {
        let url = self.geocode_url(query);
        tracing::debug!(%query, "geocoding");

        let data: GeocodingResponse = self.get_json(&url).await?;

        Ok(data
            .results
            .and_then(|results| results.into_iter().next())
            .map(|r| Location {
                name: r.name,
                country_code: r.country_code,
                coordinates: Coordinates {
                    latitude: r.latitude,
                    longitude: r.longitude,
                },
            }))
    }

    async fn current_conditions(
        &self,
        coordinates: Coordinates,
    ) -> Result<CurrentConditions, LookupError> {
        let url = self.forecast_url(coordinates);
        tracing::debug!(
            lat = coordinates.latitude,
            lon = coordinates.longitude,
            "fetching current weather"
        );

        let data: ForecastResponse = self.get_json(&url).await?;
        let current = data.current_weather;

        Ok(CurrentConditions {
            weather_code: current.weathercode,
            temperature: current.temperature,
            wind_speed: current.windspeed,
            wind_direction: current.winddirection,
        })
    }
}
