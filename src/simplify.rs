use crate::types::CountryFeature;
use geo::SimplifyVwPreserve;
use tracing::debug;

/// Simplifies every feature's boundary under the given tolerance using the
/// topology-preserving Visvalingam-Whyatt variant: no self-intersections
/// are introduced and no feature disappears. Attributes are untouched.
pub fn simplify_features(mut features: Vec<CountryFeature>, tolerance: f64) -> Vec<CountryFeature> {
    for feature in &mut features {
        feature.geometry = feature.geometry.simplify_vw_preserve(&tolerance);
    }
    debug!(count = features.len(), tolerance, "Simplified feature geometries");
    features
}
