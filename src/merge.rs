use crate::types::CountryFeature;
use anyhow::{anyhow, Result};
use geo::BooleanOps;
use tracing::{debug, info};

/// Replaces the `keep` feature's geometry with the union of its own and the
/// `absorb` feature's geometry, then drops `absorb` from the collection.
///
/// When a name appears more than once, the first match is used (the source
/// dataset treats names as unique but never enforces it). A name with no
/// match at all is a fatal error.
pub fn merge_countries(
    mut features: Vec<CountryFeature>,
    keep: &str,
    absorb: &str,
) -> Result<Vec<CountryFeature>> {
    let absorb_geometry = features
        .iter()
        .find(|f| f.name == absorb)
        .ok_or_else(|| anyhow!("Country '{}' not found in collection", absorb))?
        .geometry
        .clone();

    let keep_index = features
        .iter()
        .position(|f| f.name == keep)
        .ok_or_else(|| anyhow!("Country '{}' not found in collection", keep))?;

    if features.iter().filter(|f| f.name == keep).count() > 1 {
        debug!(name = keep, "Duplicate country name, merging into first match");
    }

    info!(keep, absorb, "Merging country polygons");
    features[keep_index].geometry = features[keep_index].geometry.union(&absorb_geometry);
    features.retain(|f| f.name != absorb);

    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich;
    use approx::assert_relative_eq;
    use geo::{polygon, Area, MultiPolygon, Polygon};

    fn square(x0: f64, y0: f64, size: f64) -> MultiPolygon<f64> {
        let poly: Polygon<f64> = polygon![
            (x: x0, y: y0),
            (x: x0 + size, y: y0),
            (x: x0 + size, y: y0 + size),
            (x: x0, y: y0 + size),
        ];
        MultiPolygon::new(vec![poly])
    }

    #[test]
    fn merge_unions_geometry_and_drops_absorbed_feature() {
        let features = vec![
            CountryFeature::new("Morocco", square(0.0, 0.0, 1.0)),
            CountryFeature::new("Western Sahara (disp)", square(1.0, 0.0, 1.0)),
        ];

        let merged = merge_countries(features, "Morocco", "Western Sahara (disp)").unwrap();

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "Morocco");
        assert!(!merged.iter().any(|f| f.name == "Western Sahara (disp)"));
        assert_relative_eq!(merged[0].geometry.unsigned_area(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn union_never_shrinks_either_input() {
        let a = square(0.0, 0.0, 2.0);
        let b = square(1.0, 1.0, 2.0);
        let a_area = a.unsigned_area();
        let b_area = b.unsigned_area();

        let features = vec![
            CountryFeature::new("A", a),
            CountryFeature::new("B", b),
        ];
        let merged = merge_countries(features, "A", "B").unwrap();
        let union_area = merged[0].geometry.unsigned_area();

        assert!(union_area >= a_area);
        assert!(union_area >= b_area);
        assert_relative_eq!(union_area, 7.0, epsilon = 1e-9);
    }

    #[test]
    fn merge_leaves_kept_attributes_untouched() {
        let mut keep = CountryFeature::new("Morocco", square(0.0, 0.0, 1.0));
        keep.iso3 = Some("MAR".to_string());
        keep.continent = Some("Africa".to_string());
        keep.region = Some("Northern Africa".to_string());
        let absorb = CountryFeature::new("Western Sahara (disp)", square(1.0, 0.0, 1.0));

        let merged = merge_countries(vec![keep, absorb], "Morocco", "Western Sahara (disp)").unwrap();
        assert_eq!(merged[0].iso3.as_deref(), Some("MAR"));
        assert_eq!(merged[0].region.as_deref(), Some("Northern Africa"));
    }

    #[test]
    fn missing_name_is_a_fatal_error() {
        let features = vec![CountryFeature::new("Morocco", square(0.0, 0.0, 1.0))];
        assert!(merge_countries(features.clone(), "Morocco", "Nowhere").is_err());
        assert!(merge_countries(features, "Nowhere", "Morocco").is_err());
    }

    #[test]
    fn duplicate_keep_name_uses_first_match() {
        let features = vec![
            CountryFeature::new("Morocco", square(0.0, 0.0, 1.0)),
            CountryFeature::new("Morocco", square(10.0, 10.0, 1.0)),
            CountryFeature::new("Western Sahara (disp)", square(1.0, 0.0, 1.0)),
        ];

        let merged = merge_countries(features, "Morocco", "Western Sahara (disp)").unwrap();
        assert_eq!(merged.len(), 2);
        assert_relative_eq!(merged[0].geometry.unsigned_area(), 2.0, epsilon = 1e-9);
        assert_relative_eq!(merged[1].geometry.unsigned_area(), 1.0, epsilon = 1e-9);
    }

    // The documented scenario: filter to Africa, then fold the disputed
    // territory into Morocco.
    #[test]
    fn filter_then_merge_end_to_end() {
        let features = enrich::enrich(vec![
            CountryFeature::new("Morocco", square(0.0, 0.0, 1.0)),
            CountryFeature::new("Western Sahara (disp)", square(1.0, 0.0, 1.0)),
            CountryFeature::new("France", square(5.0, 5.0, 1.0)),
        ]);

        let filtered = enrich::filter_continent(features, "Africa");
        assert_eq!(filtered.len(), 2);

        let merged = merge_countries(filtered, "Morocco", "Western Sahara (disp)").unwrap();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "Morocco");
        assert_relative_eq!(merged[0].geometry.unsigned_area(), 2.0, epsilon = 1e-9);
    }
}
