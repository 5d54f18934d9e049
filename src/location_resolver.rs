//! Location resolution
//!
//! Turns a free-text place name into coordinates plus a display name via the
//! geocoding service. Coordinates supplied directly (device geolocation)
//! skip resolution entirely.

use crate::api::ForecastSource;
use crate::error::SkycastError;
use crate::models::Location;
use tracing::debug;

/// Service for resolving location inputs
pub struct LocationResolver;

impl LocationResolver {
    /// Resolve a place name to a location. Every call re-resolves; there is
    /// no cache. Fails with a not-found error when the geocoding service has
    /// zero matches.
    pub async fn resolve_name<S: ForecastSource>(
        source: &S,
        name: &str,
    ) -> Result<Location, SkycastError> {
        debug!("Resolving place name: {}", name);

        let matches = source.geocode(name).await?;
        let Some(best) = matches.into_iter().next() else {
            return Err(SkycastError::not_found(name));
        };

        let location: Location = best.into();
        debug!(
            "Resolved '{}' to {} at ({:.4}, {:.4})",
            name,
            location.display_label(),
            location.latitude,
            location.longitude
        );

        Ok(location)
    }

    /// Wrap raw device coordinates; the display label falls back to
    /// `"lat, lon"` with two decimals
    #[must_use]
    pub fn from_coordinates(lat: f64, lon: f64) -> Location {
        Location::new(lat, lon)
    }
}
