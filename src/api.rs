//! Weather API client for Open-Meteo
//!
//! HTTP access to the two upstream services: the geocoding endpoint for
//! free-text place search and the forecast endpoint for current/daily/hourly
//! data. Every request is a single attempt — no retries, no caching — and
//! failure is normalized into the crate error type.

use crate::config::SkycastConfig;
use crate::error::SkycastError;
use crate::models::openmeteo::{ForecastResponse, GeocodingResponse, GeocodingResult};
use crate::models::WeatherBundle;
use async_trait::async_trait;
use chrono::Local;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Abstraction over the two upstream lookups, so the session layer can be
/// exercised against a mock source in tests.
#[async_trait]
pub trait ForecastSource: Send + Sync {
    /// Look up a free-text place name; an empty vector means "not found"
    async fn geocode(&self, name: &str) -> Result<Vec<GeocodingResult>, SkycastError>;

    /// Fetch the full weather bundle for coordinates
    async fn fetch_forecast(&self, lat: f64, lon: f64) -> Result<WeatherBundle, SkycastError>;
}

/// HTTP client for the Open-Meteo APIs
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    client: Client,
    geocoding_url: String,
    forecast_url: String,
}

impl WeatherApiClient {
    /// Create a new client from configuration
    pub fn new(config: &SkycastConfig) -> Result<Self, SkycastError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.weather.timeout_seconds.into()))
            .user_agent(config.weather.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            geocoding_url: config.weather.geocoding_url.clone(),
            forecast_url: config.weather.forecast_url.clone(),
        })
    }

    /// Send a GET request and surface transport errors and non-success
    /// statuses as network errors
    async fn get_checked(&self, url: &str) -> Result<reqwest::Response, SkycastError> {
        debug!("Requesting: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Upstream returned status {}", status);
            return Err(SkycastError::network(format!(
                "request failed with status {status}"
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl ForecastSource for WeatherApiClient {
    #[instrument(skip(self))]
    async fn geocode(&self, name: &str) -> Result<Vec<GeocodingResult>, SkycastError> {
        info!("Geocoding location: '{}'", name);

        let url = format!(
            "{}?name={}&count=5&language=en&format=json",
            self.geocoding_url,
            urlencoding::encode(name)
        );

        let response = self.get_checked(&url).await?;
        let body: GeocodingResponse = response
            .json()
            .await
            .map_err(|e| SkycastError::network(format!("invalid geocoding response: {e}")))?;

        let matches = body.results.unwrap_or_default();
        if matches.is_empty() {
            warn!("No geocoding results for '{}'", name);
        } else {
            debug!("Found {} geocoding results for '{}'", matches.len(), name);
        }

        Ok(matches)
    }

    #[instrument(skip(self))]
    async fn fetch_forecast(&self, lat: f64, lon: f64) -> Result<WeatherBundle, SkycastError> {
        info!("Fetching forecast for coordinates: {:.4}, {:.4}", lat, lon);

        let url = format!(
            "{}?latitude={lat}&longitude={lon}&current_weather=true\
             &daily=temperature_2m_max,temperature_2m_min,weathercode,precipitation_sum\
             &hourly=temperature_2m,weathercode&timezone=auto",
            self.forecast_url
        );

        let response = self.get_checked(&url).await?;
        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| SkycastError::no_data(format!("undecodable forecast response: {e}")))?;

        let bundle = body.into_bundle(Local::now())?;
        info!(
            "Fetched forecast: {} daily entries, {} hourly entries",
            bundle.daily.len(),
            bundle.hourly.len()
        );

        Ok(bundle)
    }
}
