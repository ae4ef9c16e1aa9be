use crate::types::CountryFeature;
use anyhow::{Context, Result};
use geojson::{Feature, FeatureCollection, JsonObject};
use std::fs;
use std::path::Path;
use tracing::info;

/// Builds a GeoJSON FeatureCollection carrying each feature's geometry and
/// its name/ISO3/continent/region attributes. The name keeps the source
/// dataset's `COUNTRY_NA` key so outputs stay drop-in compatible.
pub fn to_feature_collection(features: &[CountryFeature]) -> FeatureCollection {
    let features = features
        .iter()
        .map(|feature| {
            let mut properties = JsonObject::new();
            properties.insert(
                "COUNTRY_NA".to_string(),
                serde_json::Value::String(feature.name.clone()),
            );
            properties.insert("iso3".to_string(), serde_json::json!(feature.iso3));
            properties.insert("continent".to_string(), serde_json::json!(feature.continent));
            properties.insert("region".to_string(), serde_json::json!(feature.region));

            Feature {
                bbox: None,
                geometry: Some(geojson::Geometry::new(geojson::Value::from(
                    &feature.geometry,
                ))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Serializes the collection as GeoJSON, overwriting any existing file.
pub fn write_geojson(features: &[CountryFeature], path: &Path) -> Result<()> {
    let collection = to_feature_collection(features);
    let json = serde_json::to_string(&collection).context("Failed to serialize GeoJSON")?;
    fs::write(path, json).with_context(|| format!("Failed to write GeoJSON: {:?}", path))?;
    info!(path = ?path, count = features.len(), "Wrote GeoJSON");
    Ok(())
}

/// Writes an already assembled JSON document (used for the TopoJSON output),
/// overwriting any existing file.
pub fn write_json(value: &serde_json::Value, path: &Path) -> Result<()> {
    let json = serde_json::to_string(value).context("Failed to serialize JSON")?;
    fs::write(path, json).with_context(|| format!("Failed to write JSON: {:?}", path))?;
    info!(path = ?path, "Wrote JSON");
    Ok(())
}
