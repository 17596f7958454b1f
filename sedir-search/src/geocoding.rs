//! Resolving typed location text to coordinates.

use std::collections::HashMap;

use sedir_core::{Coordinates, PlaceConfig};
use tracing::debug;

/// Resolves a location name to `[lat, lon]`.
///
/// `None` means the location was not found; the homepage then shows its
/// "no match for location" message.
pub trait Geocoder: Send + Sync + std::fmt::Debug {
    /// Look up `location_text`.
    fn resolve(&self, location_text: &str) -> Option<[f64; 2]>;
}

/// Geocoder over a fixed table of named places.
///
/// Names match case-insensitively after trimming. Text that already reads
/// as `"lat,lon"` resolves to itself.
#[derive(Debug, Clone, Default)]
pub struct GazetteerGeocoder {
    places: HashMap<String, [f64; 2]>,
}

impl GazetteerGeocoder {
    /// Builds the table from configured places. Later duplicates win.
    pub fn from_places(places: &[PlaceConfig]) -> Self {
        let places = places
            .iter()
            .map(|place| (normalize(&place.name), [place.lat, place.lon]))
            .collect();
        Self { places }
    }

    /// Number of known places.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// True when no places are known.
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl Geocoder for GazetteerGeocoder {
    fn resolve(&self, location_text: &str) -> Option<[f64; 2]> {
        if let Some((lat, lon)) = Coordinates::from_raw(location_text).lat_lon() {
            if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) {
                return Some([lat, lon]);
            }
        }

        let resolved = self.places.get(&normalize(location_text)).copied();
        debug!(location_text, found = resolved.is_some(), "Geocoded location");
        resolved
    }
}

fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
