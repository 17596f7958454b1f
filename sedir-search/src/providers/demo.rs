//! Demo provider with a small built-in directory.

use async_trait::async_trait;

use super::DirectorySearchProvider;
use crate::errors::SearchError;
use crate::types::{Enterprise, SearchRequest};

/// Default radius around resolved coordinates, in kilometres.
const DEFAULT_RADIUS_KM: f64 = 25.0;

/// Demo provider for development without a search API.
///
/// Matches text against names and descriptions. With coordinates, results
/// are limited to a radius and sorted nearest first.
#[derive(Debug, Clone)]
pub struct DemoProvider {
    enterprises: Vec<Enterprise>,
    radius_km: f64,
}

impl DemoProvider {
    /// Creates a demo provider over the built-in sample directory.
    pub fn new() -> Self {
        Self::with_enterprises(sample_directory())
    }

    /// Creates a demo provider over `enterprises`.
    pub fn with_enterprises(enterprises: Vec<Enterprise>) -> Self {
        Self {
            enterprises,
            radius_km: DEFAULT_RADIUS_KM,
        }
    }

    /// Sets the search radius used when coordinates are given.
    pub fn with_radius_km(mut self, radius_km: f64) -> Self {
        self.radius_km = radius_km;
        self
    }

    fn matching(&self, request: &SearchRequest) -> Vec<Enterprise> {
        let text = request.text.as_deref().unwrap_or_default();
        let mut hits: Vec<(Option<f64>, &Enterprise)> = self
            .enterprises
            .iter()
            .filter(|e| e.matches_text(text))
            .map(|e| (request.lat_lon().and_then(|(lat, lon)| e.distance_km(lat, lon)), e))
            .collect();

        if request.lat_lon().is_some() {
            hits.retain(|(distance, _)| distance.is_some_and(|d| d <= self.radius_km));
            hits.sort_by(|(a, _), (b, _)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        }

        hits.into_iter().map(|(_, e)| e.clone()).collect()
    }
}

impl Default for DemoProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DirectorySearchProvider for DemoProvider {
    async fn search(
        &self,
        _api_root: &str,
        request: &SearchRequest,
    ) -> Result<Vec<Enterprise>, SearchError> {
        Ok(self.matching(request))
    }

    async fn fetch(&self, _api_root: &str, id: &str) -> Result<Option<Enterprise>, SearchError> {
        Ok(self.enterprises.iter().find(|e| e.id == id).cloned())
    }
}

fn sample(
    id: &str,
    name: &str,
    description: &str,
    address: &str,
    lat: f64,
    lon: f64,
) -> Enterprise {
    Enterprise {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        address: Some(address.to_string()),
        website: None,
        lat: Some(lat),
        lon: Some(lon),
    }
}

/// Sample enterprises around Ottawa used for demos and tests.
pub fn sample_directory() -> Vec<Enterprise> {
    vec![
        sample(
            "riverside-bakery",
            "Riverside Bakery",
            "Bread and pastries baked by youth in job training",
            "120 Rideau St, Ottawa",
            45.4275,
            -75.6900,
        ),
        sample(
            "second-spin-bikes",
            "Second Spin Bikes",
            "Refurbished bicycles and community repair nights",
            "45 Beechwood Ave, Vanier",
            45.4390,
            -75.6640,
        ),
        sample(
            "common-table-catering",
            "Common Table Catering",
            "Catering for events, staffed by newcomers to Canada",
            "300 Carling Ave, Ottawa",
            45.3990,
            -75.7140,
        ),
        sample(
            "westend-thrift",
            "West End Thrift",
            "Clothing and housewares resale funding local shelters",
            "500 Terry Fox Dr, Kanata",
            45.3120,
            -75.9050,
        ),
        sample(
            "green-print-coop",
            "Green Print Co-op",
            "Printing and design services on recycled paper",
            "15 Rue Principale, Gatineau",
            45.4790,
            -75.7030,
        ),
        sample(
            "eastside-coffee",
            "Eastside Coffee Roasters",
            "Fair trade coffee roasted by adults with disabilities",
            "2100 St Joseph Blvd, Orleans",
            45.4710,
            -75.5180,
        ),
    ]
}
