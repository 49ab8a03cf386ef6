//! Event/action loop
//!
//! - Crossterm events are polled on a background task and mapped to actions
//!   by the root component
//! - Actions are dispatched to the [`EffectStore`]; effects go to the
//!   [`TaskManager`], whose results come back as actions
//! - A tick interval drives the loading spinner
//! - The frame is redrawn only when the state changed

use std::io;
use std::sync::Arc;
use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tui_dispatch::Action as _;
use tui_dispatch::{
    process_raw_event, spawn_event_poller, ActionSummary, EffectStore, EventKind, RawEvent,
    TaskManager,
};

use citycast_core::WeatherService;

use crate::action::Action;
use crate::components::{Component, WeatherPanel, WeatherPanelProps};
use crate::effect::{run_lookup, Effect};
use crate::reducer::reducer;
use crate::state::{AppState, LOADING_ANIM_TICK_MS};

/// Task key for the city lookup; a new lookup replaces the old one
pub const LOOKUP_TASK: &str = "lookup";

/// How long the poller waits for a terminal event per poll
const POLL_TIMEOUT: Duration = Duration::from_millis(10);
/// Pause between poller iterations
const LOOP_SLEEP: Duration = Duration::from_millis(16);

pub struct Runtime {
    store: EffectStore<AppState, Action, Effect>,
    tasks: TaskManager<Action>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    service: Arc<dyn WeatherService>,
    ui: WeatherPanel,
    should_render: bool,
}

impl Runtime {
    pub fn new(state: AppState, service: Arc<dyn WeatherService>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            store: EffectStore::new(state, reducer),
            tasks: TaskManager::new(action_tx.clone()),
            action_tx,
            action_rx,
            service,
            ui: WeatherPanel::new(),
            should_render: true,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// Queue an action to be dispatched by the loop
    pub fn enqueue(&self, action: Action) {
        let _ = self.action_tx.send(action);
    }

    /// Dispatch one action and start any effects it declares.
    ///
    /// Returns whether the state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        if !matches!(action, Action::Tick) {
            tracing::debug!(action = action.name(), summary = %action.summary(), "dispatch");
        }

        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.handle_effect(effect);
        }
        result.changed
    }

    fn handle_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Lookup { query } => {
                let service = Arc::clone(&self.service);
                self.tasks.spawn(LOOKUP_TASK, async move {
                    run_lookup(service.as_ref(), &query).await
                });
            }
        }
    }

    fn map_event(&mut self, event: &EventKind) -> Vec<Action> {
        if let EventKind::Resize(width, height) = event {
            return vec![Action::UiTerminalResize(*width, *height)];
        }

        let props = WeatherPanelProps {
            state: self.store.state(),
            is_focused: true,
        };
        self.ui.handle_event(event, props)
    }

    /// Run the event/action loop until quit.
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let size = terminal.size()?;
        self.store.state_mut().terminal_size = (size.width, size.height);

        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
        let cancel_token = CancellationToken::new();
        let _handle =
            spawn_event_poller(event_tx, POLL_TIMEOUT, LOOP_SLEEP, cancel_token.clone());

        let mut ticks = tokio::time::interval(Duration::from_millis(LOADING_ANIM_TICK_MS));

        loop {
            if self.should_render {
                let state = self.store.state();
                let ui = &mut self.ui;
                terminal.draw(|frame| {
                    let props = WeatherPanelProps {
                        state,
                        is_focused: true,
                    };
                    ui.render(frame, frame.area(), props);
                })?;
                self.should_render = false;
            }

            tokio::select! {
                Some(raw_event) = event_rx.recv() => {
                    let event = process_raw_event(raw_event);
                    for action in self.map_event(&event) {
                        let _ = self.action_tx.send(action);
                    }
                    // Cursor moves change nothing in the store but still move on screen
                    self.should_render = true;
                }

                Some(action) = self.action_rx.recv() => {
                    if matches!(action, Action::Quit) {
                        tracing::info!("quit requested");
                        break;
                    }
                    if self.dispatch(action) {
                        self.should_render = true;
                    }
                }

                _ = ticks.tick() => {
                    let _ = self.action_tx.send(Action::Tick);
                }

                else => {
                    break;
                }
            }
        }

        cancel_token.cancel();
        self.tasks.cancel_all();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use citycast_core::{Coordinates, CurrentConditions, Location, LookupError};

    struct Sunny;

    #[async_trait]
    impl WeatherService for Sunny {
        async fn geocode(&self, query: &str) -> Result<Option<Location>, LookupError> {
            Ok(Some(Location {
                name: query.to_string(),
                country_code: "FR".into(),
                coordinates: Coordinates {
                    latitude: 48.85,
                    longitude: 2.35,
                },
            }))
        }

        async fn current_conditions(
            &self,
            _coordinates: Coordinates,
        ) -> Result<CurrentConditions, LookupError> {
            Ok(CurrentConditions {
                weather_code: 0,
                temperature: 22.0,
                wind_speed: 10.0,
                wind_direction: 180.0,
            })
        }
    }

    #[tokio::test]
    async fn test_dispatch_runs_lookup_task() {
        let mut runtime = Runtime::new(AppState::with_query("Paris"), Arc::new(Sunny));

        assert!(runtime.dispatch(Action::WeatherFetch));
        assert!(runtime.state().is_loading);

        let action = tokio::time::timeout(Duration::from_secs(1), runtime.action_rx.recv())
            .await
            .expect("timeout")
            .expect("channel closed");
        assert!(matches!(action, Action::WeatherDidLoad(_)));

        runtime.dispatch(action);
        assert!(!runtime.state().is_loading);
        assert_eq!(
            runtime.state().location().map(Location::display_name),
            Some("Paris, FR".to_string())
        );
    }

    #[tokio::test]
    async fn test_resize_event_maps_to_action() {
        let mut runtime = Runtime::new(AppState::new(), Arc::new(Sunny));

        let actions = runtime.map_event(&EventKind::Resize(120, 40));
        assert_eq!(actions, vec![Action::UiTerminalResize(120, 40)]);
    }
}
