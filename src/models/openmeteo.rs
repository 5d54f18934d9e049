//! Open-Meteo API response structures and conversion into the internal model
//!
//! The forecast endpoint returns parallel arrays aligned by index; the
//! conversion below checks that alignment and fails with a no-data error
//! instead of letting the render pipeline see a partial bundle.

use crate::error::SkycastError;
use crate::models::{DailyEntry, HourlyEntry, Location, WeatherBundle, WeatherSnapshot};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::Deserialize;

/// Forecast response from Open-Meteo
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub current_weather: Option<CurrentWeather>,
    pub daily: Option<DailyBlock>,
    pub hourly: Option<HourlyBlock>,
}

/// Current conditions block
#[derive(Debug, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub windspeed: f64,
    pub winddirection: f64,
    pub weathercode: u8,
}

/// Daily forecast arrays, aligned by index
#[derive(Debug, Deserialize)]
pub struct DailyBlock {
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Vec<f64>,
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: Vec<f64>,
    #[serde(rename = "weathercode")]
    pub weather_code: Vec<u8>,
    #[serde(rename = "precipitation_sum")]
    pub precipitation: Vec<f64>,
}

/// Hourly forecast arrays, aligned by index
#[derive(Debug, Deserialize)]
pub struct HourlyBlock {
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m")]
    pub temperature: Vec<f64>,
    #[serde(rename = "weathercode")]
    pub weather_code: Vec<u8>,
}

/// Geocoding response from Open-Meteo
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    pub results: Option<Vec<GeocodingResult>>,
}

/// A single geocoding match
#[derive(Debug, Deserialize, Clone)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    pub admin1: Option<String>,
}

impl From<GeocodingResult> for Location {
    fn from(result: GeocodingResult) -> Self {
        // Region (admin1) disambiguates; country is the fallback
        let suffix = result.admin1.or(result.country);
        let name = match suffix {
            Some(s) if !s.is_empty() && s != result.name => format!("{}, {}", result.name, s),
            _ => result.name,
        };
        Location::named(result.latitude, result.longitude, name)
    }
}

impl ForecastResponse {
    /// Convert the raw response into the internal bundle, validating that
    /// every block is present and its arrays line up.
    pub fn into_bundle(self, fetched_at: DateTime<Local>) -> Result<WeatherBundle, SkycastError> {
        let current = self
            .current_weather
            .ok_or_else(|| SkycastError::no_data("missing current weather block"))?;
        let daily = self
            .daily
            .ok_or_else(|| SkycastError::no_data("missing daily forecast block"))?;
        let hourly = self
            .hourly
            .ok_or_else(|| SkycastError::no_data("missing hourly forecast block"))?;

        Ok(WeatherBundle {
            current: WeatherSnapshot {
                temperature_c: current.temperature,
                wind_speed_kmh: current.windspeed,
                wind_direction_deg: current.winddirection,
                weather_code: current.weathercode,
            },
            daily: daily.into_entries()?,
            hourly: hourly.into_entries()?,
            fetched_at,
        })
    }
}

impl DailyBlock {
    fn into_entries(self) -> Result<Vec<DailyEntry>, SkycastError> {
        let mut entries = Vec::with_capacity(self.time.len());
        for (i, raw_date) in self.time.iter().enumerate() {
            let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").map_err(|_| {
                SkycastError::no_data(format!("unparseable daily date: {raw_date}"))
            })?;
            let max_temp_c = copied(self.temperature_max.get(i), "temperature_2m_max", i)?;
            let min_temp_c = copied(self.temperature_min.get(i), "temperature_2m_min", i)?;
            let precipitation_mm = copied(self.precipitation.get(i), "precipitation_sum", i)?;
            let weather_code = copied(self.weather_code.get(i), "weathercode", i)?;
            entries.push(DailyEntry {
                date,
                min_temp_c,
                max_temp_c,
                precipitation_mm,
                weather_code,
            });
        }
        Ok(entries)
    }
}

impl HourlyBlock {
    fn into_entries(self) -> Result<Vec<HourlyEntry>, SkycastError> {
        let mut entries = Vec::with_capacity(self.time.len());
        for (i, raw_time) in self.time.iter().enumerate() {
            let time = NaiveDateTime::parse_from_str(raw_time, "%Y-%m-%dT%H:%M").map_err(|_| {
                SkycastError::no_data(format!("unparseable hourly timestamp: {raw_time}"))
            })?;
            let temperature_c = copied(self.temperature.get(i), "temperature_2m", i)?;
            let weather_code = copied(self.weather_code.get(i), "weathercode", i)?;
            entries.push(HourlyEntry {
                time,
                temperature_c,
                weather_code,
            });
        }
        Ok(entries)
    }
}

fn copied<T: Copy>(value: Option<&T>, field: &str, index: usize) -> Result<T, SkycastError> {
    value
        .copied()
        .ok_or_else(|| SkycastError::no_data(format!("{field} array missing index {index}")))
}
