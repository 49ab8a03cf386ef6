//! Lookup error type

/// Shown when a failure carries no usable message.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to fetch weather data";

/// Coarse classification of a [`LookupError`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyQuery,
    CityNotFound,
    NetworkOrServiceFailure,
}

/// Errors produced while resolving a city and fetching its weather.
///
/// The `Display` output is the message shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Please enter a city")]
    EmptyQuery,

    #[error("City not found")]
    CityNotFound,

    #[error("Request failed with status code {0}")]
    Status(u16),

    /// The request URL is stripped so the query never reaches the screen
    #[error("Network error: {0}")]
    Network(reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        LookupError::Network(e.without_url())
    }
}

impl LookupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::EmptyQuery => ErrorKind::EmptyQuery,
            LookupError::CityNotFound => ErrorKind::CityNotFound,
            LookupError::Status(_) | LookupError::Network(_) | LookupError::InvalidResponse(_) => {
                ErrorKind::NetworkOrServiceFailure
            }
        }
    }

    /// Message for display, falling back to [`FALLBACK_ERROR_MESSAGE`] when blank.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}
