//! Command line arguments

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use citycast_core::client::{DEFAULT_FORECAST_URL, DEFAULT_GEOCODING_URL, DEFAULT_TIMEOUT_SECS};
use citycast_core::ClientConfig;

/// Terminal weather lookup backed by Open-Meteo
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "citycast", version)]
#[command(about = "Type a city, get its current weather")]
pub struct Args {
    /// City to look up on start
    #[arg(long, short, env = "CITYCAST_CITY")]
    pub city: Option<String>,

    /// Base URL of the geocoding service
    #[arg(long, env = "CITYCAST_GEOCODING_URL", default_value = DEFAULT_GEOCODING_URL)]
    pub geocoding_url: String,

    /// Base URL of the forecast service
    #[arg(long, env = "CITYCAST_FORECAST_URL", default_value = DEFAULT_FORECAST_URL)]
    pub forecast_url: String,

    /// Per-request timeout in seconds
    #[arg(
        long,
        env = "CITYCAST_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long, env = "CITYCAST_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            geocoding_url: self.geocoding_url.clone(),
            forecast_url: self.forecast_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    /// The initial query, if one was given and is not blank
    pub fn initial_query(&self) -> Option<&str> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
    }
}
