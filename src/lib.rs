//! Skycast — interactive weather lookup
//!
//! This library resolves a place name or device coordinates, fetches
//! current/daily/hourly weather from Open-Meteo, and transforms the result
//! into unit-converted view fragments: current conditions, a 7-day forecast,
//! a 24-hour forecast, a background theme, and an ambient animation scene.

pub mod api;
pub mod classify;
pub mod config;
pub mod error;
pub mod location_resolver;
pub mod models;
pub mod render;
pub mod session;
pub mod units;

// Re-export core types for public API
pub use api::{ForecastSource, WeatherApiClient};
pub use classify::{AmbientScene, BackgroundTheme, Decoration, IconKind};
pub use config::SkycastConfig;
pub use error::SkycastError;
pub use location_resolver::LocationResolver;
pub use models::{DailyEntry, HourlyEntry, Location, WeatherBundle, WeatherSnapshot};
pub use render::{CurrentConditions, DailyRow, HourlyRow};
pub use session::{GeolocationProvider, NoGeolocation, ViewState, WeatherSession};
pub use units::UnitPreference;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SkycastError>;
