//! Render pipeline
//!
//! Pure transformations from fetched weather data plus the active unit
//! preference into display fragments. Calling any renderer twice with the
//! same inputs yields identical output; nothing here performs I/O or touches
//! session state.

use crate::classify::{self, IconKind};
use crate::models::{DailyEntry, HourlyEntry, WeatherSnapshot};
use crate::units::UnitPreference;
use chrono::{DateTime, Local, Timelike};
use serde::Serialize;

/// Maximum daily rows rendered, regardless of how many entries arrive
const DAILY_ROW_CAP: usize = 7;
/// Maximum hourly rows rendered
const HOURLY_ROW_CAP: usize = 24;

/// Current-conditions fragment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    /// Place heading: first comma segment of the display name
    pub place: String,
    /// Icon identifier
    pub icon: &'static str,
    /// Human-readable condition
    pub description: &'static str,
    /// Temperature label in the active unit
    pub temperature: String,
    /// Wind speed label, always km/h
    pub wind_speed: String,
    /// Compass label for the wind direction
    pub wind_direction: &'static str,
    /// Feels-like label in the active unit
    pub feels_like: String,
    /// When the data was fetched
    pub last_updated: String,
}

/// One row of the multi-day forecast
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRow {
    /// Short weekday name
    pub day: String,
    /// Icon identifier (daily rows always use the day variant)
    pub icon: &'static str,
    /// Minimum temperature label
    pub min: String,
    /// Maximum temperature label
    pub max: String,
    /// Precipitation sum label
    pub precipitation: String,
}

/// One row of the hourly forecast
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyRow {
    /// Hour label, `"{H}:00"`
    pub hour: String,
    /// Icon identifier, day/night per the entry's own hour
    pub icon: &'static str,
    /// Temperature label
    pub temperature: String,
}

/// Render the current-conditions fragment.
///
/// The feels-like value is computed in Celsius first and only then converted,
/// so both units describe the same estimate. Day/night icon selection uses
/// the fetch timestamp's local hour.
#[must_use]
pub fn render_current(
    snapshot: &WeatherSnapshot,
    unit: UnitPreference,
    display_name: &str,
    fetched_at: DateTime<Local>,
) -> CurrentConditions {
    let daytime = classify::is_daytime_hour(fetched_at.hour());
    let feels_like_c = classify::feels_like_c(snapshot.temperature_c, snapshot.wind_speed_kmh);

    CurrentConditions {
        place: display_name
            .split(',')
            .next()
            .unwrap_or(display_name)
            .trim()
            .to_string(),
        icon: IconKind::from_code(snapshot.weather_code).icon_id(daytime),
        description: classify::weather_description(snapshot.weather_code),
        temperature: unit.format(snapshot.temperature_c),
        wind_speed: format!("{:.1} km/h", snapshot.wind_speed_kmh),
        wind_direction: classify::compass_direction(snapshot.wind_direction_deg),
        feels_like: unit.format(feels_like_c),
        last_updated: fetched_at.format("%a, %b %-d, %I:%M %p").to_string(),
    }
}

/// Render the multi-day forecast, capped at the first seven entries
#[must_use]
pub fn render_daily(entries: &[DailyEntry], unit: UnitPreference) -> Vec<DailyRow> {
    entries
        .iter()
        .take(DAILY_ROW_CAP)
        .map(|entry| DailyRow {
            day: entry.date.format("%a").to_string(),
            icon: IconKind::from_code(entry.weather_code).icon_id(true),
            min: unit.format(entry.min_temp_c),
            max: unit.format(entry.max_temp_c),
            precipitation: format!("{}mm", entry.precipitation_mm),
        })
        .collect()
}

/// Render the hourly forecast, capped at the first 24 entries. Daytime for
/// icon selection is each entry's own local hour, not the current wall clock.
#[must_use]
pub fn render_hourly(entries: &[HourlyEntry], unit: UnitPreference) -> Vec<HourlyRow> {
    entries
        .iter()
        .take(HOURLY_ROW_CAP)
        .map(|entry| {
            let hour = entry.time.hour();
            HourlyRow {
                hour: format!("{hour}:00"),
                icon: IconKind::from_code(entry.weather_code).icon_id(classify::is_daytime_hour(hour)),
                temperature: unit.format(entry.temperature_c),
            }
        })
        .collect()
}
