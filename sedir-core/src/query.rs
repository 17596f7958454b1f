//! URL query parameters for shareable search links.
//!
//! A search lives in three keys: `q` (search text), `near` (location text)
//! and `at` (resolved coordinates as `"lat,lon"`). Values are
//! form-urlencoded; parsing never fails.

use std::fmt;

use url::form_urlencoded;

/// Query key carrying the free-text search.
pub const SEARCH_TEXT_KEY: &str = "q";
/// Query key carrying resolved coordinates.
pub const COORDINATES_KEY: &str = "at";
/// Query key carrying the location text typed by the user.
pub const LOCATION_TEXT_KEY: &str = "near";

/// Ordered key/value pairs from a URL query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw query string. A leading `?` is ignored.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let pairs = form_urlencoded::parse(raw.as_bytes())
            .into_owned()
            .collect();
        Self { pairs }
    }

    /// Returns the first value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the first value for `key`, treating an empty value as missing.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Appends a pair, keeping insertion order.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serializes back to `application/x-www-form-urlencoded` without a leading `?`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Coordinates as carried by the `at` parameter.
///
/// The raw text is kept exactly as received; [`Coordinates::lat_lon`] parses
/// on demand and returns `None` for anything that is not two numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinates(String);

impl Coordinates {
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Formats a latitude/longitude pair as `"lat,lon"`.
    ///
    /// Uses `f64`'s shortest round-trip `Display`. It never switches to
    /// exponent notation (`1e-7` prints as `0.0000001`) and keeps the sign of
    /// `-0.0`, unlike JavaScript's `Number#toString`; in-range coordinates
    /// print the same either way.
    pub fn from_lat_lon(lat: f64, lon: f64) -> Self {
        Self(format!("{lat},{lon}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn lat_lon(&self) -> Option<(f64, f64)> {
        let (lat, lon) = self.0.split_once(',')?;
        let lat = lat.trim().parse::<f64>().ok()?;
        let lon = lon.trim().parse::<f64>().ok()?;
        (lat.is_finite() && lon.is_finite()).then_some((lat, lon))
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lat_lon_formatting() {
        assert_eq!(Coordinates::from_lat_lon(45.4215, -75.6972).as_str(), "45.4215,-75.6972");
        assert_eq!(Coordinates::from_lat_lon(45.0, -75.5).as_str(), "45,-75.5");
        assert_eq!(Coordinates::from_lat_lon(1e-7, -0.0).as_str(), "0.0000001,-0");
    }

    #[test]
    fn test_parse_decodes_pairs_in_order() {
        let params = QueryParams::parse("?q=fair+trade&near=Ottawa&at=45.4%2C-75.7");

        assert_eq!(params.len(), 3);
        assert_eq!(params.get("q"), Some("fair trade"));
        assert_eq!(params.get("near"), Some("Ottawa"));
        assert_eq!(params.get("at"), Some("45.4,-75.7"));
        let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["q", "near", "at"]);
    }

    #[test]
    fn test_empty_query_string() {
        assert!(QueryParams::parse("").is_empty());
        assert!(QueryParams::parse("?").is_empty());
        assert_eq!(QueryParams::new().to_query_string(), "");
    }

    #[test]
    fn test_non_empty_skips_blank_values() {
        let params = QueryParams::parse("q=&near=Kanata");

        assert!(params.contains_key("q"));
        assert_eq!(params.get("q"), Some(""));
        assert_eq!(params.non_empty("q"), None);
        assert_eq!(params.non_empty("near"), Some("Kanata"));
    }

    #[test]
    fn test_first_value_wins() {
        let params = QueryParams::parse("q=first&q=second");
        assert_eq!(params.get("q"), Some("first"));
    }

    #[test]
    fn test_serialization_escapes_values() {
        let params: QueryParams = [("q", "café & co"), ("at", "45.4,-75.7")]
            .into_iter()
            .collect();

        assert_eq!(params.to_query_string(), "q=caf%C3%A9+%26+co&at=45.4%2C-75.7");
    }

    #[test]
    fn test_coordinates_format() {
        assert_eq!(Coordinates::from_lat_lon(45.4, -75.7).as_str(), "45.4,-75.7");
        assert_eq!(Coordinates::from_lat_lon(45.0, 0.5).as_str(), "45,0.5");
    }

    #[test]
    fn test_coordinates_parse_on_demand() {
        assert_eq!(
            Coordinates::from_raw("45.4, -75.7").lat_lon(),
            Some((45.4, -75.7))
        );
        assert_eq!(Coordinates::from_raw("somewhere").lat_lon(), None);
        assert_eq!(Coordinates::from_raw("45.4").lat_lon(), None);
        assert_eq!(Coordinates::from_raw("NaN,1").lat_lon(), None);
    }

    #[test]
    fn test_malformed_coordinates_are_kept_verbatim() {
        let coords = Coordinates::from_raw("not,numbers");
        assert_eq!(coords.to_string(), "not,numbers");
    }
}
