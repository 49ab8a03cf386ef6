//! UI components
//!
//! Components follow these rules:
//! 1. Props contain ALL read-only data needed for rendering
//! 2. `handle_event` returns actions, never mutates external state
//! 3. `render` is a pure function of props (plus internal UI state like the
//!    cursor position)

pub mod help_bar;
pub mod location_header;
pub mod search_bar;
pub mod weather_body;
pub mod weather_panel;

pub use tui_dispatch::Component;

pub use help_bar::{HelpBar, HelpBarProps};
pub use location_header::{LocationHeader, LocationHeaderProps};
pub use search_bar::{SearchBar, SearchBarProps};
pub use weather_body::{WeatherBody, WeatherBodyProps};
pub use weather_panel::{WeatherPanel, WeatherPanelProps, SPINNERS};
