//! Actions
//!
//! Naming convention:
//! - Prefix groups related actions: WeatherFetch, WeatherDidLoad -> "weather"
//! - "Did" prefix marks an async result
//! - Verbs at end: Change, Fetch, Load, Resize, Quit

use citycast_core::WeatherReport;
use tui_dispatch::ActionSummary;

/// Categories are inferred from the prefix:
/// - `query`: QueryChange
/// - `weather`: WeatherFetch, WeatherDidLoad, WeatherDidError
/// - `ui`: UiTerminalResize
/// - `uncategorized`: Tick, Quit
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq)]
#[action(infer_categories)]
pub enum Action {
    // ===== Query =====
    /// The search input text changed
    QueryChange(String),

    // ===== Weather =====
    /// Intent: submit the current query (geocode, then fetch weather)
    WeatherFetch,

    /// Result: both lookup steps succeeded
    WeatherDidLoad(WeatherReport),

    /// Result: the lookup failed; carries the user-facing message
    WeatherDidError(String),

    // ===== UI =====
    /// Terminal was resized - update sprite sizing
    UiTerminalResize(u16, u16),

    // ===== Global =====
    /// Periodic tick for loading animation
    Tick,

    /// Exit the application
    Quit,
}

/// Concise description for logs, instead of the full Debug output
impl ActionSummary for Action {
    fn summary(&self) -> String {
        match self {
            Action::WeatherDidLoad(report) => format!(
                "WeatherDidLoad {{ city: {}, temp: {}°C, code: {} }}",
                report.location.display_name(),
                report.conditions.temperature,
                report.conditions.weather_code
            ),
            Action::WeatherDidError(e) => {
                let msg = if e.chars().count() > 40 {
                    format!("{}...", e.chars().take(37).collect::<String>())
                } else {
                    e.clone()
                };
                format!("WeatherDidError({:?})", msg)
            }
            _ => format!("{:?}", self),
        }
    }
}
