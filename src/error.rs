//! Error types and handling for the Skycast application

use thiserror::Error;

/// Main error type for the Skycast application
#[derive(Error, Debug)]
pub enum SkycastError {
    /// Input validation errors, caught before any I/O
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Geocoding returned no match for the requested place
    #[error("Location not found: {message}")]
    NotFound { message: String },

    /// Transport failure or non-success response from an upstream service
    #[error("Network error: {message}")]
    Network { message: String },

    /// Structurally incomplete payload from the forecast service
    #[error("Incomplete weather data: {message}")]
    NoData { message: String },

    /// Geolocation denial or missing platform support
    #[error("Geolocation error: {message}")]
    Geolocation { message: String },
}

impl SkycastError {
    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new no-data error
    pub fn no_data<S: Into<String>>(message: S) -> Self {
        Self::NoData {
            message: message.into(),
        }
    }

    /// Create a new geolocation error
    pub fn geolocation<S: Into<String>>(message: S) -> Self {
        Self::Geolocation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message for the error banner
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SkycastError::Validation { message } => message.clone(),
            SkycastError::NotFound { message } => {
                format!("City not found: {message}")
            }
            SkycastError::Network { .. } => {
                "Failed to fetch weather data. Please check your internet connection.".to_string()
            }
            SkycastError::NoData { .. } => {
                "Weather service returned incomplete data. Please try again later.".to_string()
            }
            SkycastError::Geolocation { message } => message.clone(),
        }
    }
}

impl From<reqwest::Error> for SkycastError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}
