//! Weather service port and the two-step lookup
//!
//! The lookup is strictly sequential: the weather request needs the
//! coordinates returned by geocoding, so a failed geocode ends the lookup
//! before any weather request is made.

use async_trait::async_trait;

use crate::error::LookupError;
use crate::model::{Coordinates, CurrentConditions, Location, WeatherReport};

/// Remote operations needed to answer a city query
#[async_trait]
pub trait WeatherService: Send + Sync {
    /// Resolve a place name to at most one location.
    ///
    /// `Ok(None)` means the service answered but found nothing.
    async fn geocode(&self, query: &str) -> Result<Option<Location>, LookupError>;

    /// Fetch current conditions at the given coordinates.
    async fn current_conditions(
        &self,
        coordinates: Coordinates,
    ) -> Result<CurrentConditions, LookupError>;
}

/// Resolve `query` and fetch its current weather.
///
/// # Errors
///
/// - [`LookupError::EmptyQuery`] if `query` is blank (no request is made)
/// - [`LookupError::CityNotFound`] if geocoding returns no result
/// - any error from the service for either step
pub async fn lookup<S>(service: &S, query: &str) -> Result<WeatherReport, LookupError>
where
    S: WeatherService + ?Sized,
{
    let query = query.trim();
    if query.is_empty() {
        return Err(LookupError::EmptyQuery);
    }

    let location = service
        .geocode(query)
        .await?
        .ok_or(LookupError::CityNotFound)?;
    tracing::debug!(
        city = %location.name,
        country = %location.country_code,
        "geocoded"
    );

    let conditions = service.current_conditions(location.coordinates).await?;
    tracing::debug!(code = conditions.weather_code, "conditions loaded");

    Ok(WeatherReport {
        location,
        conditions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Canned responses plus call counters
    struct FakeService {
        location: Option<Location>,
        fail_geocode: bool,
        fail_weather: bool,
        geocode_calls: AtomicUsize,
        weather_calls: AtomicUsize,
    }

    impl FakeService {
        fn paris() -> Self {
            Self {
                location: Some(Location {
                    name: "Paris".into(),
                    country_code: "FR".into(),
                    coordinates: Coordinates {
                        latitude: 48.85,
                        longitude: 2.35,
                    },
                }),
                fail_geocode: false,
                fail_weather: false,
                geocode_calls: AtomicUsize::new(0),
                weather_calls: AtomicUsize::new(0),
            }
        }

        fn nowhere() -> Self {
            Self {
                location: None,
                ..Self::paris()
            }
        }
    }

    #[async_trait]
    impl WeatherService for FakeService {
        async fn geocode(&self, _query: &str) -> Result<Option<Location>, LookupError> {
            self.geocode_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_geocode {
                return Err(LookupError::Status(500));
            }
            Ok(self.location.clone())
        }

        async fn current_conditions(
            &self,
            coordinates: Coordinates,
        ) -> Result<CurrentConditions, LookupError> {
            self.weather_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_weather {
                return Err(LookupError::Status(503));
            }
            assert_eq!(coordinates.latitude, 48.85);
            Ok(CurrentConditions {
                weather_code: 0,
                temperature: 22.0,
                wind_speed: 10.0,
                wind_direction: 180.0,
            })
        }
    }

    #[tokio::test]
    async fn test_lookup_success() {
        let service = FakeService::paris();

        let report = lookup(&service, "Paris").await.unwrap();

        assert_eq!(report.location.display_name(), "Paris, FR");
        assert_eq!(report.conditions.temperature, 22.0);
        assert_eq!(service.geocode_calls.load(Ordering::SeqCst), 1);
        assert_eq!(service.weather_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_query_makes_no_requests() {
        let service = FakeService::paris();

        for query in ["", "   "] {
            let err = lookup(&service, query).await.unwrap_err();
            assert!(matches!(err, LookupError::EmptyQuery));
        }

        assert_eq!(service.geocode_calls.load(Ordering::SeqCst), 0);
        assert_eq!(service.weather_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_city_not_found_skips_weather() {
        let service = FakeService::nowhere();

        let err = lookup(&service, "Zzzzz").await.unwrap_err();

        assert_eq!(err.to_string(), "City not found");
        assert_eq!(service.geocode_calls.load(Ordering::SeqCst), 1);
        assert_eq!(service.weather_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_geocode_failure_skips_weather() {
        let service = FakeService {
            fail_geocode: true,
            ..FakeService::paris()
        };

        let err = lookup(&service, "Paris").await.unwrap_err();

        assert!(matches!(err, LookupError::Status(500)));
        assert_eq!(service.weather_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_weather_failure_after_geocode() {
        let service = FakeService {
            fail_weather: true,
            ..FakeService::paris()
        };

        let err = lookup(&service, "Paris").await.unwrap_err();

        assert!(matches!(err, LookupError::Status(503)));
        assert_eq!(service.geocode_calls.load(Ordering::SeqCst), 1);
        assert_eq!(service.weather_calls.load(Ordering::SeqCst), 1);
    }
}
