use thiserror::Error;

/// Failures of a single forecast lookup.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The place is not one of the keys in the region table.
    #[error("Unknown place: {0}")]
    UnknownPlace(String),

    /// Connection failure, timeout or unreadable body.
    #[error("Request to the forecast service failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Forecast service returned status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The body did not have the expected forecast shape.
    #[error("Malformed forecast response: {0}")]
    MalformedResponse(String),
}

impl WeatherError {
    pub fn is_unknown_place(&self) -> bool {
        matches!(self, WeatherError::UnknownPlace(_))
    }
}
