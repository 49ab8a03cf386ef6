//! Application state - single source of truth
//!
//! - Components receive `&AppState` as props
//! - Only the reducer mutates state
//! - Display attributes (icon, label, background) are derived, never stored

use citycast_core::{
    background_for, icon_for, label_for, Category, CurrentConditions, IconId, ImageRef, Location,
    WeatherReport, DEFAULT_BACKGROUND,
};

/// Spinner frame interval while a lookup is outstanding
pub const LOADING_ANIM_TICK_MS: u64 = 100;

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    /// Text in the search input
    pub query: String,

    /// Last successful lookup. Location and conditions live together so one
    /// can never be shown without the other.
    pub report: Option<WeatherReport>,

    /// True only while a lookup is outstanding
    pub is_loading: bool,

    /// Message from the last failed submit
    pub error: Option<String>,

    /// Animation frame counter (for loading spinner)
    pub tick_count: u32,

    /// Terminal dimensions (for sprite sizing)
    pub terminal_size: (u16, u16),
}

impl AppState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            report: None,
            is_loading: false,
            error: None,
            tick_count: 0,
            terminal_size: (80, 24), // Default, updated on resize
        }
    }

    /// Start with a prefilled query
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::new()
        }
    }

    pub fn location(&self) -> Option<&Location> {
        self.report.as_ref().map(|r| &r.location)
    }

    pub fn conditions(&self) -> Option<&CurrentConditions> {
        self.report.as_ref().map(|r| &r.conditions)
    }

    pub fn category(&self) -> Option<Category> {
        self.conditions().map(CurrentConditions::category)
    }

    /// Background for the current conditions, or the default one
    pub fn background(&self) -> ImageRef {
        self.category()
            .map(background_for)
            .unwrap_or(DEFAULT_BACKGROUND)
    }

    pub fn icon(&self) -> Option<IconId> {
        self.category().map(icon_for)
    }

    pub fn label(&self) -> Option<&'static str> {
        self.category().map(label_for)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use citycast_core::Coordinates;

    fn report(code: i32) -> WeatherReport {
        WeatherReport {
            location: Location {
                name: "Oslo".into(),
                country_code: "NO".into(),
                coordinates: Coordinates {
                    latitude: 59.91,
                    longitude: 10.75,
                },
            },
            conditions: CurrentConditions {
                weather_code: code,
                temperature: -3.5,
                wind_speed: 12.0,
                wind_direction: 270.0,
            },
        }
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert!(state.query.is_empty());
        assert!(!state.is_loading);
        assert!(state.error.is_none());
        assert!(state.location().is_none());
        assert!(state.conditions().is_none());
    }

    #[test]
    fn test_derived_without_conditions() {
        let state = AppState::new();
        assert_eq!(state.background(), DEFAULT_BACKGROUND);
        assert_eq!(state.icon(), None);
        assert_eq!(state.label(), None);
    }

    #[test]
    fn test_derived_with_conditions() {
        let state = AppState {
            report: Some(report(85)),
            ..AppState::new()
        };

        assert_eq!(state.category(), Some(Category::Snow));
        assert_eq!(state.icon(), Some(IconId::Snow));
        assert_eq!(state.label(), Some("Snowy"));
        assert_eq!(state.background(), background_for(Category::Snow));
    }
}
