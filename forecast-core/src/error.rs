//! Errors raised while resolving a forecast.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    /// The API answered with a non-success status. `detail` comes from the
    /// error body the API sends back.
    #[error("weather API error ({status}): {detail}")]
    Upstream { status: u16, detail: String },

    #[error("malformed response from weather API: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("malformed forecast feed: {0}")]
    MalformedFeed(String),

    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl WeatherError {
    /// Detail string reported by the API, for upstream failures only.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Upstream { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// User-friendly message for display.
    pub fn user_message(&self) -> String {
        match self {
            Self::Upstream { detail, .. } => format!("Forecast unavailable: {detail}"),
            Self::MalformedResponse(_) | Self::MalformedFeed(_) => {
                "Forecast unavailable: the weather service sent an unexpected response".to_string()
            }
            Self::Transport(_) => "Network error. Check your connection.".to_string(),
        }
    }
}
