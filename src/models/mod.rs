//! Core data models shared across the pipeline

pub mod location;
pub mod openmeteo;
pub mod weather;

pub use location::Location;
pub use weather::{DailyEntry, HourlyEntry, WeatherBundle, WeatherSnapshot};
