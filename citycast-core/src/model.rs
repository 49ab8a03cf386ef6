//! Lookup results

use crate::codes::{classify, Category};

/// Geographic coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A resolved place (from geocoding)
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    pub name: String,
    pub country_code: String,
    pub coordinates: Coordinates,
}

impl Location {
    /// "Paris, FR"
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.name, self.country_code)
    }
}

/// Current weather at a location
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentConditions {
    /// WMO weather code
    pub weather_code: i32,
    /// Celsius
    pub temperature: f64,
    /// km/h
    pub wind_speed: f64,
    /// Degrees
    pub wind_direction: f64,
}

impl CurrentConditions {
    pub fn category(&self) -> Category {
        classify(self.weather_code)
    }
}

/// Outcome of a successful lookup: both halves arrive together.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherReport {
    pub location: Location,
    pub conditions: CurrentConditions,
}
