//! Location model for geographic coordinates and display metadata

use serde::{Deserialize, Serialize};

/// A resolved geographic location
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Display name from geocoding, absent when only coordinates are known
    pub display_name: Option<String>,
}

impl Location {
    /// Create a location from bare coordinates
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            display_name: None,
        }
    }

    /// Create a location with a geocoded display name
    #[must_use]
    pub fn named(latitude: f64, longitude: f64, name: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            display_name: Some(name.into()),
        }
    }

    /// Format location as a coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.2}, {:.2}", self.latitude, self.longitude)
    }

    /// Label for display: the geocoded name, or coordinates as a fallback
    #[must_use]
    pub fn display_label(&self) -> String {
        self.display_name
            .clone()
            .unwrap_or_else(|| self.format_coordinates())
    }
}
