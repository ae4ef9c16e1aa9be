use geo::MultiPolygon;

/// One country polygon with the attributes the map pipeline carries.
///
/// Identity is the country name as spelled in the source dataset. The
/// ISO3/continent/region attributes are derived by the enricher and stay
/// `None` when the name is not recognized.
#[derive(Debug, Clone)]
pub struct CountryFeature {
    pub name: String,
    pub iso3: Option<String>,
    pub continent: Option<String>,
    pub region: Option<String>,
    pub geometry: MultiPolygon<f64>,
}

impl CountryFeature {
    pub fn new(name: impl Into<String>, geometry: MultiPolygon<f64>) -> Self {
        CountryFeature {
            name: name.into(),
            iso3: None,
            continent: None,
            region: None,
            geometry,
        }
    }
}
