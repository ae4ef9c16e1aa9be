pub mod config;
pub mod countries;
pub mod enrich;
pub mod merge;
pub mod output;
pub mod report;
pub mod simplify;
pub mod source;
pub mod summarize;
pub mod topology;
pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prepare the Africa map data: fetch, enrich, filter, merge, simplify, write
    PrepareMap {
        #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
        config: PathBuf,
    },
    /// Summarize the test CSV datasets into a Markdown report
    Summarize {
        #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::PrepareMap { config } => {
            let app_config = config::AppConfig::load_or_default(config)?;
            let map = &app_config.map;

            let polygons = source::load_polygons(map).await?;
            let polygons = enrich::enrich(polygons);
            let polygons = enrich::filter_continent(polygons, &map.target_continent);
            info!(
                count = polygons.len(),
                continent = %map.target_continent,
                "Filtered to target continent"
            );
            let polygons = merge::merge_countries(polygons, &map.merge_keep, &map.merge_absorb)?;

            // Full-resolution output first, then the two simplified variants.
            output::write_geojson(&polygons, &map.large_output)?;

            let topology = topology::build_topology(&polygons, map.topo_tolerance);
            output::write_json(&topology, &map.topo_output)?;

            let polygons = simplify::simplify_features(polygons, map.simplify_tolerance);
            output::write_geojson(&polygons, &map.small_output)?;

            info!("Map preparation complete");
        }
        Commands::Summarize { config } => {
            let app_config = config::AppConfig::load_or_default(config)?;
            let report_path = summarize::run(&app_config.summary)?;
            info!(report = ?report_path, "Summarization complete");
        }
    }

    Ok(())
}
