//! Request and result types for directory search.

use sedir_core::{Coordinates, SearchQueryState};
use serde::{Deserialize, Serialize};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// What the results list asks the search backend for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    /// Free-text query
    pub text: Option<String>,
    /// Location text as typed
    pub location: Option<String>,
    /// Resolved coordinates for `location`
    pub coords: Option<Coordinates>,
}

impl SearchRequest {
    /// Builds the request for the homepage's current search.
    pub fn from_state(state: &SearchQueryState) -> Self {
        Self {
            text: state.search_text.clone(),
            location: state.search_location_text.clone(),
            coords: state.search_coords.clone(),
        }
    }

    /// True when there is neither text nor a location to search for.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.location.is_none()
    }

    /// Parsed coordinates, if present and well-formed.
    pub fn lat_lon(&self) -> Option<(f64, f64)> {
        self.coords.as_ref().and_then(Coordinates::lat_lon)
    }
}

/// A social enterprise listed in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enterprise {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description of goods and services
    #[serde(default)]
    pub description: Option<String>,
    /// Street address
    #[serde(default)]
    pub address: Option<String>,
    /// Website URL
    #[serde(default)]
    pub website: Option<String>,
    /// Latitude of the main location
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude of the main location
    #[serde(default)]
    pub lon: Option<f64>,
}

impl Enterprise {
    /// Great-circle distance in kilometres from `(lat, lon)`, if this enterprise has a location.
    pub fn distance_km(&self, lat: f64, lon: f64) -> Option<f64> {
        let (own_lat, own_lon) = (self.lat?, self.lon?);
        let (phi1, phi2) = (lat.to_radians(), own_lat.to_radians());
        let d_phi = (own_lat - lat).to_radians();
        let d_lambda = (own_lon - lon).to_radians();

        let a = (d_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
        Some(2.0 * EARTH_RADIUS_KM * a.sqrt().asin())
    }

    /// Case-insensitive match of `needle` against name and description.
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }
}
