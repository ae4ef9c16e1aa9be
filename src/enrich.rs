use crate::countries;
use crate::types::CountryFeature;
use tracing::warn;

/// Attaches ISO3, continent and UN region attributes derived from each
/// feature's country name. Unrecognized names are logged and left with
/// empty attributes; downstream stages must tolerate the gaps.
pub fn enrich(mut features: Vec<CountryFeature>) -> Vec<CountryFeature> {
    for feature in &mut features {
        match countries::lookup(&feature.name) {
            Some(entry) => {
                feature.iso3 = Some(entry.iso3.to_string());
                feature.continent = Some(entry.continent.to_string());
                feature.region = Some(entry.region.to_string());
            }
            None => {
                warn!(name = %feature.name, "Country name not recognized, leaving attributes empty");
            }
        }
    }
    features
}

/// Keeps only features whose continent matches the target. Order is
/// preserved.
pub fn filter_continent(features: Vec<CountryFeature>, target: &str) -> Vec<CountryFeature> {
    features
        .into_iter()
        .filter(|f| f.continent.as_deref() == Some(target))
        .collect()
}
