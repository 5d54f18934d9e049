//! Weather data models
//!
//! All temperatures are stored in Celsius and wind speeds in km/h; unit
//! conversion happens only at render time.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Instantaneous current conditions
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherSnapshot {
    /// Air temperature in Celsius
    pub temperature_c: f64,
    /// Wind speed in km/h
    pub wind_speed_kmh: f64,
    /// Wind direction in degrees, 0/360 is north
    pub wind_direction_deg: f64,
    /// WMO weather code
    pub weather_code: u8,
}

/// One day of the multi-day forecast
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DailyEntry {
    /// Calendar date of this entry
    pub date: NaiveDate,
    /// Daily minimum temperature in Celsius
    pub min_temp_c: f64,
    /// Daily maximum temperature in Celsius
    pub max_temp_c: f64,
    /// Precipitation sum in millimeters
    pub precipitation_mm: f64,
    /// WMO weather code
    pub weather_code: u8,
}

/// One hour of the hourly forecast
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HourlyEntry {
    /// Local timestamp of this entry
    pub time: NaiveDateTime,
    /// Temperature in Celsius
    pub temperature_c: f64,
    /// WMO weather code
    pub weather_code: u8,
}

/// Everything one successful fetch yields. The snapshot and both forecast
/// series are always replaced together; a failed fetch never produces a
/// partial bundle.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WeatherBundle {
    /// Current conditions
    pub current: WeatherSnapshot,
    /// Daily forecast entries, chronological
    pub daily: Vec<DailyEntry>,
    /// Hourly forecast entries, chronological
    pub hourly: Vec<HourlyEntry>,
    /// When this bundle was retrieved
    pub fetched_at: DateTime<Local>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    #[test]
    fn test_bundle_round_trips_through_json() {
        let bundle = WeatherBundle {
            current: WeatherSnapshot {
                temperature_c: 12.5,
                wind_speed_kmh: 8.0,
                wind_direction_deg: 200.0,
                weather_code: 2,
            },
            daily: vec![DailyEntry {
                date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                min_temp_c: 4.0,
                max_temp_c: 14.0,
                precipitation_mm: 0.3,
                weather_code: 61,
            }],
            hourly: Vec::new(),
            fetched_at: Local::now(),
        };

        let json = serde_json::to_string(&bundle).unwrap();
        let back: WeatherBundle = serde_json::from_str(&json).unwrap();
        assert_eq!(back.current, bundle.current);
        assert_eq!(back.daily, bundle.daily);
    }
}
