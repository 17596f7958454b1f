//! Configuration files feed the geocoder and the results gate

use std::io::Write;

use sedir_core::SiteConfig;

use crate::common::{app_with, location, post_form};

#[tokio::test]
async fn test_places_from_file_are_geocoded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"api": {{"api_root": "https://api.example.org"}}, "places": [{{"name": "Perth", "lat": 44.9, "lon": -76.25}}]}}"#
    )
    .unwrap();

    let config = SiteConfig::load(file.path()).unwrap().with_default_places();
    let app = app_with(config);

    let response = post_form(&app.router, "/search", "near=perth").await;
    assert_eq!(location(&response), "/?at=44.9%2C-76.25&near=perth");

    let response = post_form(&app.router, "/search", "near=Ottawa").await;
    assert_eq!(location(&response), "/?near=Ottawa");
}
