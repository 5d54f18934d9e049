//! Deterministic classification tables for weather codes, wind, and décor
//!
//! Everything in this module is a pure lookup: WMO weather codes map to icon
//! buckets, descriptions, and ambient scenes; wind degrees map to compass
//! labels; temperatures map to background themes and the simplified
//! feels-like estimate. The code groupings mirror the Open-Meteo WMO tables
//! and must stay total — unknown codes always land in a default bucket.

use serde::Serialize;

/// The 16 compass labels, clockwise from north
const COMPASS_LABELS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Icon buckets for weather codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    Clear,
    PartlyCloudy,
    Fog,
    Rain,
    Snow,
    Cloud,
}

impl IconKind {
    /// Bucket a WMO weather code into one of the six icon kinds.
    /// Unrecognized codes (overcast, thunderstorm, anything new) fall back
    /// to the generic cloud.
    #[must_use]
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Clear,
            1..=3 => Self::PartlyCloudy,
            45 | 48 => Self::Fog,
            51 | 53 | 55 | 61 | 63 | 65 | 66 | 67 | 80 | 81 | 82 => Self::Rain,
            71 | 73 | 75 | 77 | 85 | 86 => Self::Snow,
            _ => Self::Cloud,
        }
    }

    /// Stable icon identifier, with a day/night variant where one exists
    #[must_use]
    pub fn icon_id(&self, daytime: bool) -> &'static str {
        match (self, daytime) {
            (Self::Clear, true) => "sun",
            (Self::Clear, false) => "moon",
            (Self::PartlyCloudy, true) => "partly-cloudy-day",
            (Self::PartlyCloudy, false) => "partly-cloudy-night",
            (Self::Fog, _) => "fog",
            (Self::Rain, _) => "rain",
            (Self::Snow, _) => "snow",
            (Self::Cloud, _) => "cloud",
        }
    }
}

/// Convert a WMO weather code to a human-readable description
#[must_use]
pub fn weather_description(code: u8) -> &'static str {
    match code {
        0 => "Clear Sky",
        1 => "Mainly Clear",
        2 => "Partly Cloudy",
        3 => "Overcast",
        45 => "Foggy",
        48 => "Depositing Rime Fog",
        51 => "Light Drizzle",
        53 => "Moderate Drizzle",
        55 => "Dense Drizzle",
        61 => "Slight Rain",
        63 => "Moderate Rain",
        65 => "Heavy Rain",
        66 => "Light Freezing Rain",
        67 => "Heavy Freezing Rain",
        71 => "Slight Snow",
        73 => "Moderate Snow",
        75 => "Heavy Snow",
        77 => "Snow Grains",
        80 => "Slight Rain Showers",
        81 => "Moderate Rain Showers",
        82 => "Violent Rain Showers",
        85 => "Slight Snow Showers",
        86 => "Heavy Snow Showers",
        95 => "Thunderstorm",
        96 | 99 => "Thunderstorm with Hail",
        _ => "Unknown",
    }
}

/// Convert wind direction degrees to one of 16 compass labels.
/// 360 wraps back to north; values round to the nearest sector.
#[must_use]
pub fn compass_direction(degrees: f64) -> &'static str {
    let index = (degrees / 22.5).round() as usize % 16;
    COMPASS_LABELS[index]
}

/// Simplified wind-chill estimate, computed in Celsius.
///
/// At or above 10 °C the air temperature is returned unchanged; below that,
/// each km/h of wind discounts 0.2 °C. This is the widget's calibrated
/// formula, not a meteorological index — keep it as-is for compatible output.
#[must_use]
pub fn feels_like_c(temperature_c: f64, wind_speed_kmh: f64) -> f64 {
    if temperature_c >= 10.0 {
        temperature_c
    } else {
        temperature_c - wind_speed_kmh * 0.2
    }
}

/// Background gradient theme selected from the current temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundTheme {
    Cold,
    Cool,
    Mild,
    Warm,
}

impl BackgroundTheme {
    /// Four fixed bands; each boundary belongs to the upper band
    #[must_use]
    pub fn from_temperature(temperature_c: f64) -> Self {
        if temperature_c < 0.0 {
            Self::Cold
        } else if temperature_c < 10.0 {
            Self::Cool
        } else if temperature_c < 20.0 {
            Self::Mild
        } else {
            Self::Warm
        }
    }

    /// CSS gradient for the rendering surface
    #[must_use]
    pub fn css_gradient(&self) -> &'static str {
        match self {
            Self::Cold => "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
            Self::Cool => "linear-gradient(135deg, #83a4d4 0%, #b6fbff 100%)",
            Self::Mild => "linear-gradient(135deg, #a1c4fd 0%, #c2e9fb 100%)",
            Self::Warm => "linear-gradient(135deg, #fbc2eb 0%, #a6c1ee 100%)",
        }
    }
}

/// Ambient decorations layered over the backdrop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decoration {
    Cloud1,
    Cloud2,
    Cloud3,
    Sun,
}

impl Decoration {
    /// Whether this decoration is one of the cloud layers
    #[must_use]
    pub fn is_cloud(&self) -> bool {
        matches!(self, Self::Cloud1 | Self::Cloud2 | Self::Cloud3)
    }
}

/// Ambient animation scene: precipitation marker offsets plus the active
/// decoration set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmbientScene {
    /// Horizontal offsets of precipitation markers, in percent
    pub drop_positions: Vec<u8>,
    /// Decorations to display, in layer order
    pub decorations: Vec<Decoration>,
}

impl AmbientScene {
    /// Build the scene for a weather code. Five animation classes:
    /// rain-type codes get five markers and two clouds, snow-type codes get
    /// three markers and two clouds, partly-cloudy codes get clouds plus sun,
    /// clear sky gets sun only, and everything else (fog, overcast,
    /// thunderstorm, unrecognized) gets three clouds.
    #[must_use]
    pub fn for_code(code: u8) -> Self {
        use Decoration::{Cloud1, Cloud2, Cloud3, Sun};
        match code {
            51 | 53 | 55 | 61 | 63 | 65 | 66 | 67 | 80 | 81 | 82 => Self {
                drop_positions: (0..5).map(|i| i * 20 + 10).collect(),
                decorations: vec![Cloud1, Cloud2],
            },
            71 | 73 | 75 | 77 | 85 | 86 => Self {
                drop_positions: (0..3).map(|i| i * 30 + 20).collect(),
                decorations: vec![Cloud1, Cloud3],
            },
            1..=3 => Self {
                drop_positions: Vec::new(),
                decorations: vec![Cloud1, Cloud2, Sun],
            },
            0 => Self {
                drop_positions: Vec::new(),
                decorations: vec![Sun],
            },
            _ => Self {
                drop_positions: Vec::new(),
                decorations: vec![Cloud1, Cloud2, Cloud3],
            },
        }
    }

    /// Number of precipitation markers in the scene
    #[must_use]
    pub fn drop_count(&self) -> usize {
        self.drop_positions.len()
    }

    /// Number of active cloud layers in the scene
    #[must_use]
    pub fn cloud_count(&self) -> usize {
        self.decorations.iter().filter(|d| d.is_cloud()).count()
    }
}

/// Daytime rule used for icon selection: hours 6 through 19 inclusive
#[must_use]
pub fn is_daytime_hour(hour: u32) -> bool {
    (6..20).contains(&hour)
}
