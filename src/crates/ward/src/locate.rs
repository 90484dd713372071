//! Best-effort geolocation for centering the map
//!
//! Resolution order: configured coordinates, then a network lookup against
//! the configured service, then the built-in fallback center. Resolution
//! never fails; the fallback always applies.

use crate::config::LocationConfig;
use crate::error::{Result, WardError};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};
use ward_core::{Coordinates, DEFAULT_CENTER};

/// Where the active coordinates came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationSource {
    /// Explicit coordinates from configuration
    Configured,
    /// Detected via the geolocation service
    Detected,
    /// Built-in default center
    Fallback,
}

impl LocationSource {
    /// Short label for the status line
    pub fn label(&self) -> &'static str {
        match self {
            LocationSource::Configured => "configured",
            LocationSource::Detected => "detected",
            LocationSource::Fallback => "default",
        }
    }
}

/// Resolved location with provenance
#[derive(Debug, Clone, Copy)]
pub struct LocationFix {
    pub coords: Coordinates,
    pub source: LocationSource,
}

/// Resolve the user's location
///
/// Never fails: lookup errors degrade to the default center.
pub async fn resolve(config: &LocationConfig) -> LocationFix {
    if let Some(coords) = config.override_coords() {
        info!(%coords, "Using configured location");
        return LocationFix {
            coords,
            source: LocationSource::Configured,
        };
    }

    if config.offline {
        debug!("Offline mode, skipping location lookup");
    } else {
        match fetch(config).await {
            Ok(coords) => {
                info!(%coords, "Detected location");
                return LocationFix {
                    coords,
                    source: LocationSource::Detected,
                };
            }
            Err(e) => {
                warn!(error = %e, "Location lookup failed, using default center");
            }
        }
    }

    LocationFix {
        coords: DEFAULT_CENTER,
        source: LocationSource::Fallback,
    }
}

/// Response shape shared by the common IP geolocation services
#[derive(Debug, Deserialize)]
struct GeoResponse {
    #[serde(alias = "latitude")]
    lat: f64,
    #[serde(alias = "lon", alias = "longitude")]
    lng: f64,
}

/// Single lookup against the configured service, no retries
async fn fetch(config: &LocationConfig) -> Result<Coordinates> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(config.timeout_ms))
        .build()?;

    let response = client.get(&config.service_url).send().await?;

    if !response.status().is_success() {
        return Err(WardError::Location(format!(
            "Geolocation service returned {}",
            response.status()
        )));
    }

    let geo: GeoResponse = response.json().await?;
    Ok(Coordinates::new(geo.lat, geo.lng))
}
