//! citycast: terminal weather lookup
//!
//! The app follows a unidirectional data flow:
//! 1. Event (keyboard) -> Component.handle_event() -> Actions
//! 2. Actions dispatched to the EffectStore
//! 3. Reducer updates state and returns effects
//! 4. Effects handled by the TaskManager (the city lookup)
//! 5. If state changed, re-render
//!
//! Exposed as a library so the reducer, components and render output can be
//! exercised from integration tests.

pub mod action;
pub mod components;
pub mod config;
pub mod effect;
pub mod logging;
pub mod reducer;
pub mod runtime;
pub mod sprites;
pub mod state;
