//! Effects - side effects declared by the reducer
//!
//! Effects are returned from the reducer and handled by the runtime, which
//! spawns [`run_lookup`] on the task manager. The future always resolves to
//! exactly one result action, so the loading flag is always cleared.

use citycast_core::{lookup, WeatherService};

use crate::action::Action;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Geocode `query`, then fetch current weather for the result
    Lookup { query: String },
}

/// Run a lookup and turn its outcome into the matching result action.
pub async fn run_lookup<S>(service: &S, query: &str) -> Action
where
    S: WeatherService + ?Sized,
{
    match lookup(service, query).await {
        Ok(report) => {
            tracing::info!(city = %report.location.display_name(), "weather loaded");
            Action::WeatherDidLoad(report)
        }
        Err(e) => {
            tracing::warn!(%query, error = %e, "lookup failed");
            Action::WeatherDidError(e.user_message())
        }
    }
}
