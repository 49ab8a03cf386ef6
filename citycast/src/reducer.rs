//! Reducer - (state, action) -> (changed, effects)
//!
//! All state mutations happen here. Network work is only declared (as
//! [`Effect`]s) and never performed, so every transition is synchronous.

use citycast_core::{LookupError, FALLBACK_ERROR_MESSAGE};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;
use tui_dispatch::DispatchResult;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Query =====
        Action::QueryChange(query) => {
            if state.query == query {
                return DispatchResult::unchanged();
            }
            state.query = query;
            DispatchResult::changed()
        }

        // ===== Weather =====
        Action::WeatherFetch => {
            // One lookup at a time; resubmits while loading are dropped
            if state.is_loading {
                return DispatchResult::unchanged();
            }

            let query = state.query.trim();
            if query.is_empty() {
                // No request; whatever is on screen stays
                state.error = Some(LookupError::EmptyQuery.to_string());
                return DispatchResult::changed();
            }

            let effect = Effect::Lookup {
                query: query.to_string(),
            };
            state.is_loading = true;
            state.error = None;
            DispatchResult::changed_with(effect)
        }

        Action::WeatherDidLoad(report) => {
            state.report = Some(report);
            state.error = None;
            state.is_loading = false;
            DispatchResult::changed()
        }

        Action::WeatherDidError(message) => {
            let message = if message.trim().is_empty() {
                FALLBACK_ERROR_MESSAGE.to_string()
            } else {
                message
            };
            state.report = None;
            state.error = Some(message);
            state.is_loading = false;
            DispatchResult::changed()
        }

        // ===== UI =====
        Action::UiTerminalResize(width, height) => {
            if state.terminal_size != (width, height) {
                state.terminal_size = (width, height);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== Global =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // only re-render while loading (spinner animation)
            if state.is_loading {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // Quit is handled in the runtime loop, not here
        Action::Quit => DispatchResult::unchanged(),
    }
}
