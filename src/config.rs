use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub map: MapConfig,
    pub summary: SummaryConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MapConfig {
    pub cache_file: PathBuf,
    pub wfs_url: String,
    pub dataset: String,
    pub target_continent: String,
    pub merge_keep: String,
    pub merge_absorb: String,
    pub simplify_tolerance: f64,
    pub topo_tolerance: f64,
    pub large_output: PathBuf,
    pub topo_output: PathBuf,
    pub small_output: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SummaryConfig {
    pub input_dir: PathBuf,
    pub sample_rows: usize,
    pub output_file: PathBuf,
}

// Defaults mirror the constants the pipelines were originally run with.
impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            cache_file: PathBuf::from("countries.geojson"),
            wfs_url: "http://geonode.state.gov/geoserver/wfs".to_string(),
            dataset: "geonode:Global_LSIB_Polygons_Detailed".to_string(),
            target_continent: "Africa".to_string(),
            merge_keep: "Morocco".to_string(),
            merge_absorb: "Western Sahara (disp)".to_string(),
            simplify_tolerance: 0.015,
            topo_tolerance: 0.2,
            large_output: PathBuf::from("africa_large.geojson"),
            topo_output: PathBuf::from("africa.topojson"),
            small_output: PathBuf::from("africa.geojson"),
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        SummaryConfig {
            input_dir: PathBuf::from("../data/raw/test"),
            sample_rows: 10,
            output_file: PathBuf::from("../data/raw/test/summary.md"),
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| "Failed to parse TOML configuration")?;
        Ok(config)
    }

    /// Loads the config file if it exists, otherwise falls back to the
    /// built-in defaults. Both scripts are routinely run without a config.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(AppConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_original_constants() {
        let config = AppConfig::default();
        assert_eq!(config.map.cache_file, PathBuf::from("countries.geojson"));
        assert_eq!(config.map.target_continent, "Africa");
        assert_eq!(config.map.merge_keep, "Morocco");
        assert_eq!(config.map.merge_absorb, "Western Sahara (disp)");
        assert_eq!(config.map.simplify_tolerance, 0.015);
        assert_eq!(config.map.topo_tolerance, 0.2);
        assert_eq!(config.summary.sample_rows, 10);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[map]\ntarget_continent = \"Europe\"").unwrap();

        let config = AppConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.map.target_continent, "Europe");
        assert_eq!(config.map.merge_keep, "Morocco");
        assert_eq!(config.summary.sample_rows, 10);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_or_default(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.map.target_continent, "Africa");
    }
}
