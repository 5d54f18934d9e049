//! Session state and input-event glue
//!
//! `WeatherSession` owns what the widget kept in module-level globals: the
//! active unit, the last fetched bundle, the last resolved location, and the
//! derived view state. Every user action runs one chain
//! (resolve → fetch → render) to completion; operations take `&mut self`, so
//! two chains can never interleave and a stale response can never overwrite
//! a newer one.

use crate::api::ForecastSource;
use crate::classify::{AmbientScene, BackgroundTheme};
use crate::error::SkycastError;
use crate::location_resolver::LocationResolver;
use crate::models::{Location, WeatherBundle};
use crate::render::{self, CurrentConditions, DailyRow, HourlyRow};
use crate::units::UnitPreference;
use async_trait::async_trait;
use tracing::{debug, info};

/// One-shot positioning source, the stand-in for the platform geolocation
/// service
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    /// Return the device position as (latitude, longitude), or a geolocation
    /// error on denial or missing support
    async fn current_position(&self) -> Result<(f64, f64), SkycastError>;
}

/// Provider for hosts without any positioning service
pub struct NoGeolocation;

#[async_trait]
impl GeolocationProvider for NoGeolocation {
    async fn current_position(&self) -> Result<(f64, f64), SkycastError> {
        Err(SkycastError::geolocation("Geolocation not supported."))
    }
}

/// Everything the rendering surface needs, fully recomputed from the stored
/// data on every render
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Blocking loading indicator
    pub loading: bool,
    /// Error banner text; empty means hidden
    pub error: String,
    /// Current-conditions fragment
    pub current: Option<CurrentConditions>,
    /// Multi-day forecast rows
    pub daily: Vec<DailyRow>,
    /// Hourly forecast rows
    pub hourly: Vec<HourlyRow>,
    /// Background gradient theme
    pub theme: Option<BackgroundTheme>,
    /// Ambient animation scene
    pub scene: Option<AmbientScene>,
}

/// Session owning the weather state and the view derived from it
pub struct WeatherSession<S: ForecastSource> {
    source: S,
    unit: UnitPreference,
    data: Option<WeatherBundle>,
    location: Option<Location>,
    view: ViewState,
}

impl<S: ForecastSource> WeatherSession<S> {
    /// Create a session with no data fetched yet
    pub fn new(source: S, unit: UnitPreference) -> Self {
        Self {
            source,
            unit,
            data: None,
            location: None,
            view: ViewState::default(),
        }
    }

    /// Current view state
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Active unit preference
    pub fn unit(&self) -> UnitPreference {
        self.unit
    }

    /// Whether a successful fetch has happened in this session
    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    /// Search-box action: validate, resolve the place name, fetch, render.
    /// Validation rejects input shorter than two characters before any I/O.
    /// On failure the previously displayed weather stays untouched and only
    /// the error banner changes.
    pub async fn search(&mut self, query: &str) {
        let query = query.trim();
        if query.chars().count() < 2 {
            self.view.error =
                SkycastError::validation("Please enter a valid city name").user_message();
            return;
        }

        self.begin();
        let result = self.run_search(query).await;
        self.finish(result);
    }

    /// Geolocation-button action: one-shot position request feeding the same
    /// fetch-and-render chain. Denial or missing support short-circuits to
    /// the error banner without touching the network.
    pub async fn locate(&mut self, provider: &dyn GeolocationProvider) {
        self.begin();
        let result = match provider.current_position().await {
            Ok((lat, lon)) => {
                info!("Geolocation granted: {:.4}, {:.4}", lat, lon);
                self.fetch_and_store(LocationResolver::from_coordinates(lat, lon))
                    .await
            }
            Err(e) => Err(e),
        };
        self.finish(result);
    }

    /// Unit-toggle action: mutually exclusive preference switch. Re-renders
    /// already-held data without any I/O; before the first successful fetch
    /// it only records the preference.
    pub fn set_unit(&mut self, unit: UnitPreference) {
        debug!("Unit preference set to {:?}", unit);
        self.unit = unit;
        if self.data.is_some() {
            self.render();
        }
    }

    async fn run_search(&mut self, query: &str) -> Result<(), SkycastError> {
        let location = LocationResolver::resolve_name(&self.source, query).await?;
        self.fetch_and_store(location).await
    }

    /// Fetch for the given location and replace snapshot, daily, and hourly
    /// data atomically; nothing is stored until the full fetch succeeds
    async fn fetch_and_store(&mut self, location: Location) -> Result<(), SkycastError> {
        let bundle = self
            .source
            .fetch_forecast(location.latitude, location.longitude)
            .await?;

        self.location = Some(location);
        self.data = Some(bundle);
        self.render();
        Ok(())
    }

    /// Recompute the whole view from stored data and the active unit
    fn render(&mut self) {
        let (Some(bundle), Some(location)) = (&self.data, &self.location) else {
            return;
        };

        self.view.current = Some(render::render_current(
            &bundle.current,
            self.unit,
            &location.display_label(),
            bundle.fetched_at,
        ));
        self.view.daily = render::render_daily(&bundle.daily, self.unit);
        self.view.hourly = render::render_hourly(&bundle.hourly, self.unit);
        self.view.theme = Some(BackgroundTheme::from_temperature(
            bundle.current.temperature_c,
        ));
        self.view.scene = Some(AmbientScene::for_code(bundle.current.weather_code));
    }

    /// Start of an operation: show the loading indicator and clear the error
    /// banner exactly once
    fn begin(&mut self) {
        self.view.loading = true;
        self.view.error.clear();
    }

    /// Single exit path: the loading indicator is cleared on success and
    /// failure alike, and a failure surfaces exactly one user-visible message
    fn finish(&mut self, result: Result<(), SkycastError>) {
        self.view.loading = false;
        if let Err(e) = result {
            self.view.error = e.user_message();
        }
    }
}
