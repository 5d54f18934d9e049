//! Session flow tests against a mock forecast source
//!
//! These cover the user-triggered chains end to end: search, geolocation,
//! unit toggling, and the guarantees around the error banner, the loading
//! indicator, and atomic data replacement.

use async_trait::async_trait;
use chrono::{Local, NaiveDate, TimeZone};
use skycast::models::openmeteo::GeocodingResult;
use skycast::{
    DailyEntry, ForecastSource, GeolocationProvider, HourlyEntry, SkycastError, UnitPreference,
    WeatherBundle, WeatherSession, WeatherSnapshot,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Forecast source with scriptable responses and call counters
struct MockSource {
    geocode_calls: Arc<AtomicUsize>,
    forecast_calls: Arc<AtomicUsize>,
    matches: Arc<Mutex<Vec<GeocodingResult>>>,
    fail_forecast: Arc<AtomicBool>,
    bundle: WeatherBundle,
}

/// Shared handles for steering a `MockSource` after it moved into a session
struct MockHandles {
    geocode_calls: Arc<AtomicUsize>,
    forecast_calls: Arc<AtomicUsize>,
    matches: Arc<Mutex<Vec<GeocodingResult>>>,
    fail_forecast: Arc<AtomicBool>,
}

#[async_trait]
impl ForecastSource for MockSource {
    async fn geocode(&self, _name: &str) -> Result<Vec<GeocodingResult>, SkycastError> {
        self.geocode_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.matches.lock().unwrap().clone())
    }

    async fn fetch_forecast(&self, _lat: f64, _lon: f64) -> Result<WeatherBundle, SkycastError> {
        self.forecast_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_forecast.load(Ordering::SeqCst) {
            return Err(SkycastError::network("connection reset"));
        }
        Ok(self.bundle.clone())
    }
}

fn berlin_match() -> GeocodingResult {
    GeocodingResult {
        name: "Berlin".to_string(),
        latitude: 52.52,
        longitude: 13.405,
        country: Some("Germany".to_string()),
        admin1: Some("Berlin".to_string()),
    }
}

fn bundle(temperature_c: f64, weather_code: u8, daily: usize, hourly: usize) -> WeatherBundle {
    let first_day = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    WeatherBundle {
        current: WeatherSnapshot {
            temperature_c,
            wind_speed_kmh: 10.0,
            wind_direction_deg: 90.0,
            weather_code,
        },
        daily: (0..daily)
            .map(|i| DailyEntry {
                date: first_day + chrono::Duration::days(i as i64),
                min_temp_c: temperature_c - 3.0,
                max_temp_c: temperature_c + 3.0,
                precipitation_mm: 0.2,
                weather_code,
            })
            .collect(),
        hourly: (0..hourly)
            .map(|i| HourlyEntry {
                time: first_day.and_hms_opt(0, 0, 0).unwrap() + chrono::Duration::hours(i as i64),
                temperature_c,
                weather_code,
            })
            .collect(),
        fetched_at: Local.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
    }
}

fn mock_session(bundle: WeatherBundle) -> (WeatherSession<MockSource>, MockHandles) {
    let handles = MockHandles {
        geocode_calls: Arc::new(AtomicUsize::new(0)),
        forecast_calls: Arc::new(AtomicUsize::new(0)),
        matches: Arc::new(Mutex::new(vec![berlin_match()])),
        fail_forecast: Arc::new(AtomicBool::new(false)),
    };
    let source = MockSource {
        geocode_calls: handles.geocode_calls.clone(),
        forecast_calls: handles.forecast_calls.clone(),
        matches: handles.matches.clone(),
        fail_forecast: handles.fail_forecast.clone(),
        bundle,
    };
    (
        WeatherSession::new(source, UnitPreference::Celsius),
        handles,
    )
}

struct GrantedPosition(f64, f64);

#[async_trait]
impl GeolocationProvider for GrantedPosition {
    async fn current_position(&self) -> Result<(f64, f64), SkycastError> {
        Ok((self.0, self.1))
    }
}

struct DeniedPosition;

#[async_trait]
impl GeolocationProvider for DeniedPosition {
    async fn current_position(&self) -> Result<(f64, f64), SkycastError> {
        Err(SkycastError::geolocation("Location access denied."))
    }
}

#[tokio::test]
async fn search_populates_all_fragments_atomically() {
    let (mut session, handles) = mock_session(bundle(21.0, 61, 10, 30));

    session.search("Berlin").await;

    let view = session.view();
    assert!(!view.loading);
    assert!(view.error.is_empty());

    let current = view.current.as_ref().expect("current conditions rendered");
    assert_eq!(current.place, "Berlin");
    assert_eq!(current.temperature, "21.0°C");
    assert_eq!(current.wind_direction, "E");

    // Caps apply regardless of how much data arrived
    assert_eq!(view.daily.len(), 7);
    assert_eq!(view.hourly.len(), 24);

    assert_eq!(
        view.theme,
        Some(skycast::BackgroundTheme::Warm),
        "21 °C lands in the warm band"
    );
    let scene = view.scene.as_ref().expect("scene rendered");
    assert_eq!(scene.drop_count(), 5);

    assert_eq!(handles.geocode_calls.load(Ordering::SeqCst), 1);
    assert_eq!(handles.forecast_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unit_toggle_rerenders_without_any_fetch() {
    let (mut session, handles) = mock_session(bundle(20.0, 0, 7, 24));

    session.search("Berlin").await;
    assert_eq!(handles.forecast_calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        session.view().current.as_ref().unwrap().temperature,
        "20.0°C"
    );

    session.set_unit(UnitPreference::Fahrenheit);

    let view = session.view();
    assert_eq!(view.current.as_ref().unwrap().temperature, "68.0°F");
    assert!(view.daily.iter().all(|row| row.max.ends_with("°F")));
    assert!(view.hourly.iter().all(|row| row.temperature.ends_with("°F")));

    // The toggle is render-only
    assert_eq!(handles.geocode_calls.load(Ordering::SeqCst), 1);
    assert_eq!(handles.forecast_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unit_toggle_before_first_fetch_only_records_preference() {
    let (mut session, handles) = mock_session(bundle(20.0, 0, 7, 24));

    session.set_unit(UnitPreference::Fahrenheit);
    assert!(!session.has_data());
    assert!(session.view().current.is_none());
    assert_eq!(handles.forecast_calls.load(Ordering::SeqCst), 0);

    session.search("Berlin").await;
    assert!(session.has_data());
    assert_eq!(
        session.view().current.as_ref().unwrap().temperature,
        "68.0°F"
    );
}

#[tokio::test]
async fn short_query_is_rejected_before_any_io() {
    let (mut session, handles) = mock_session(bundle(20.0, 0, 7, 24));

    session.search(" x ").await;

    assert_eq!(session.view().error, "Please enter a valid city name");
    assert_eq!(handles.geocode_calls.load(Ordering::SeqCst), 0);
    assert_eq!(handles.forecast_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn single_character_query_is_rejected_even_when_multibyte() {
    let (mut session, handles) = mock_session(bundle(20.0, 0, 7, 24));

    // One character but three bytes; rejection counts characters
    session.search("京").await;

    assert_eq!(session.view().error, "Please enter a valid city name");
    assert_eq!(handles.geocode_calls.load(Ordering::SeqCst), 0);
    assert_eq!(handles.forecast_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unknown_city_leaves_previous_weather_untouched() {
    let (mut session, handles) = mock_session(bundle(15.0, 2, 7, 24));

    session.search("Berlin").await;
    assert!(session.view().error.is_empty());

    handles.matches.lock().unwrap().clear();
    session.search("Qqzxnotacity").await;

    let view = session.view();
    assert!(view.error.contains("City not found"));
    assert!(!view.loading);

    // Prior weather still displayed
    assert_eq!(view.current.as_ref().unwrap().place, "Berlin");
    assert_eq!(view.daily.len(), 7);
    assert_eq!(handles.forecast_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failed_fetch_replaces_nothing() {
    let (mut session, handles) = mock_session(bundle(15.0, 2, 7, 24));

    session.search("Berlin").await;
    let before = session.view().current.clone().unwrap();

    handles.fail_forecast.store(true, Ordering::SeqCst);
    session.search("Paris").await;

    let view = session.view();
    assert!(view.error.contains("Failed to fetch"));
    assert_eq!(view.current.as_ref(), Some(&before));
}

#[tokio::test]
async fn successful_search_clears_a_previous_error() {
    let (mut session, handles) = mock_session(bundle(15.0, 2, 7, 24));

    handles.matches.lock().unwrap().clear();
    session.search("Qqzxnotacity").await;
    assert!(!session.view().error.is_empty());

    *handles.matches.lock().unwrap() = vec![berlin_match()];
    session.search("Berlin").await;
    assert!(session.view().error.is_empty());
    assert!(session.view().current.is_some());
}

#[tokio::test]
async fn geolocation_denial_short_circuits_without_fetch() {
    let (mut session, handles) = mock_session(bundle(15.0, 2, 7, 24));

    session.locate(&DeniedPosition).await;

    let view = session.view();
    assert_eq!(view.error, "Location access denied.");
    assert!(!view.loading);
    assert_eq!(handles.geocode_calls.load(Ordering::SeqCst), 0);
    assert_eq!(handles.forecast_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn geolocation_grant_fetches_with_coordinate_label() {
    let (mut session, handles) = mock_session(bundle(5.0, 71, 7, 24));

    session.locate(&GrantedPosition(47.6062, -122.3321)).await;

    let view = session.view();
    assert!(view.error.is_empty());
    // Coordinate display names keep only the latitude segment in the heading
    assert_eq!(view.current.as_ref().unwrap().place, "47.61");
    assert_eq!(view.theme, Some(skycast::BackgroundTheme::Cool));
    assert_eq!(view.scene.as_ref().unwrap().drop_count(), 3);

    assert_eq!(handles.geocode_calls.load(Ordering::SeqCst), 0);
    assert_eq!(handles.forecast_calls.load(Ordering::SeqCst), 1);
}
