//! Core types for citycast
//!
//! Everything here is independent of the terminal UI:
//!
//! - **codes**: WMO weather code → category → icon / background / label
//! - **model**: resolved location and current conditions
//! - **service**: the two-step lookup (geocode, then weather) behind a trait
//! - **client**: the Open-Meteo implementation of that trait
//!
//! # Example
//!
//! ```ignore
//! use citycast_core::{lookup, ClientConfig, OpenMeteoClient};
//!
//! let client = OpenMeteoClient::new(ClientConfig::default())?;
//! let report = lookup(&client, "Paris").await?;
//! println!("{}", report.location.display_name());
//! ```

pub mod client;
pub mod codes;
pub mod error;
pub mod model;
pub mod service;

pub use client::{ClientConfig, OpenMeteoClient};
pub use codes::{
    background_for, classify, icon_for, label_for, Category, IconId, ImageRef, DEFAULT_BACKGROUND,
};
pub use error::{ErrorKind, LookupError, FALLBACK_ERROR_MESSAGE};
pub use model::{Coordinates, CurrentConditions, Location, WeatherReport};
pub use service::{lookup, WeatherService};
