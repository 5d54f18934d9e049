//! Temperature unit preference and conversion
//!
//! All weather data is stored in Celsius; the preference only affects how
//! labels are rendered.

use serde::{Deserialize, Serialize};

/// Active temperature unit for rendered labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitPreference {
    #[default]
    Celsius,
    Fahrenheit,
}

impl UnitPreference {
    /// Convert a Celsius value into this unit
    #[must_use]
    pub fn convert(&self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        }
    }

    /// Degree suffix for display
    #[must_use]
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }

    /// Format a stored Celsius value as a display label, e.g. `"20.0°C"`
    #[must_use]
    pub fn format(&self, celsius: f64) -> String {
        format!("{:.1}{}", self.convert(celsius), self.suffix())
    }

    /// Parse a toggle flag such as `"c"` or `"fahrenheit"`
    #[must_use]
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag.trim().to_ascii_lowercase().as_str() {
            "c" | "celsius" => Some(Self::Celsius),
            "f" | "fahrenheit" => Some(Self::Fahrenheit),
            _ => None,
        }
    }
}
