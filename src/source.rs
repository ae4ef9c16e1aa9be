use crate::config::MapConfig;
use crate::types::CountryFeature;
use anyhow::{anyhow, Context, Result};
use geo::MultiPolygon;
use geojson::GeoJson;
use std::convert::TryInto;
use std::fs;
use tracing::info;

/// Returns the country polygons, reading the local cache when present and
/// otherwise fetching from the WFS service. The raw response body is
/// persisted to the cache path before parsing, so a later run skips the
/// network entirely.
pub async fn load_polygons(config: &MapConfig) -> Result<Vec<CountryFeature>> {
    let raw = if config.cache_file.exists() {
        info!(cache = ?config.cache_file, "Loading cached country polygons");
        fs::read_to_string(&config.cache_file)
            .with_context(|| format!("Failed to read cache file: {:?}", config.cache_file))?
    } else {
        let body = fetch_wfs(config).await?;
        fs::write(&config.cache_file, &body)
            .with_context(|| format!("Failed to write cache file: {:?}", config.cache_file))?;
        body
    };

    parse_features(&raw)
}

async fn fetch_wfs(config: &MapConfig) -> Result<String> {
    info!(url = %config.wfs_url, dataset = %config.dataset, "Fetching country polygons from WFS");

    let client = reqwest::Client::new();
    let response = client
        .get(&config.wfs_url)
        .query(&[
            ("srsName", "EPSG:4326"),
            ("typename", config.dataset.as_str()),
            ("outputFormat", "json"),
            ("version", "1.0.0"),
            ("service", "WFS"),
            ("request", "GetFeature"),
        ])
        .send()
        .await
        .context("WFS request failed")?
        .error_for_status()
        .context("WFS service returned an error status")?;

    response
        .text()
        .await
        .context("Failed to read WFS response body")
}

/// Parses a GeoJSON FeatureCollection into country features. Features
/// without a `COUNTRY_NA` property or without polygon geometry are skipped.
pub fn parse_features(raw: &str) -> Result<Vec<CountryFeature>> {
    let geojson: GeoJson = raw.parse().context("Failed to parse GeoJSON")?;

    let collection = match geojson {
        GeoJson::FeatureCollection(fc) => fc,
        _ => return Err(anyhow!("Country data must be a FeatureCollection")),
    };

    let mut features = Vec::new();

    for feature in collection.features {
        let name = match feature
            .properties
            .as_ref()
            .and_then(|props| props.get("COUNTRY_NA"))
        {
            Some(serde_json::Value::String(s)) => s.clone(),
            _ => continue,
        };

        let geometry = match feature.geometry {
            Some(geom) => {
                let valid_geo: geo::Geometry<f64> = geom
                    .value
                    .try_into()
                    .map_err(|e| anyhow!("Failed to convert geometry for {}: {:?}", name, e))?;

                match valid_geo {
                    geo::Geometry::MultiPolygon(mp) => mp,
                    geo::Geometry::Polygon(p) => MultiPolygon::new(vec![p]),
                    _ => continue, // Skip points/lines
                }
            }
            None => continue,
        };

        features.push(CountryFeature::new(name, geometry));
    }

    info!(count = features.len(), "Parsed country polygons");
    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfig;
    use httpmock::prelude::*;

    const SMALL_COLLECTION: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"COUNTRY_NA": "Morocco"},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]]
                }
            },
            {
                "type": "Feature",
                "properties": {"COUNTRY_NA": "France"},
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [[[[2.0, 2.0], [3.0, 2.0], [3.0, 3.0], [2.0, 3.0], [2.0, 2.0]]]]
                }
            },
            {
                "type": "Feature",
                "properties": {"COUNTRY_NA": "Nowhere"},
                "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}
            },
            {
                "type": "Feature",
                "properties": {"OTHER": "ignored"},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
                }
            }
        ]
    }"#;

    #[test]
    fn parses_polygons_and_skips_other_geometry() {
        let features = parse_features(SMALL_COLLECTION).unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].name, "Morocco");
        assert_eq!(features[1].name, "France");
        assert_eq!(features[0].geometry.0.len(), 1);
    }

    #[test]
    fn rejects_non_collection_input() {
        let err = parse_features(r#"{"type": "Point", "coordinates": [0.0, 0.0]}"#);
        assert!(err.is_err());
    }

    #[tokio::test]
    async fn fetch_persists_cache_before_returning() {
        let server = MockServer::start();
        let wfs_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/wfs")
                .query_param("service", "WFS")
                .query_param("request", "GetFeature")
                .query_param("outputFormat", "json");
            then.status(200).body(SMALL_COLLECTION);
        });

        let dir = tempfile::tempdir().unwrap();
        let config = MapConfig {
            cache_file: dir.path().join("countries.geojson"),
            wfs_url: server.url("/wfs"),
            ..MapConfig::default()
        };

        let features = load_polygons(&config).await.unwrap();

        wfs_mock.assert();
        assert_eq!(features.len(), 2);
        let cached = fs::read_to_string(&config.cache_file).unwrap();
        assert_eq!(cached, SMALL_COLLECTION);
    }

    #[tokio::test]
    async fn cache_hit_skips_the_network() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("countries.geojson");
        fs::write(&cache, SMALL_COLLECTION).unwrap();

        let config = MapConfig {
            cache_file: cache,
            wfs_url: "http://127.0.0.1:1/unreachable".to_string(),
            ..MapConfig::default()
        };

        let features = load_polygons(&config).await.unwrap();
        assert_eq!(features.len(), 2);
    }

    #[tokio::test]
    async fn server_error_is_fatal() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/wfs");
            then.status(500);
        });

        let dir = tempfile::tempdir().unwrap();
        let config = MapConfig {
            cache_file: dir.path().join("countries.geojson"),
            wfs_url: server.url("/wfs"),
            ..MapConfig::default()
        };

        assert!(load_polygons(&config).await.is_err());
        assert!(!config.cache_file.exists());
    }
}
