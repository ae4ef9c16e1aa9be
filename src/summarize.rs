use crate::config::SummaryConfig;
use crate::report;
use anyhow::{anyhow, Context, Result};
use rand::Rng;
use statrs::statistics::{Data, OrderStatistics, Statistics};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Everything the report needs about one CSV file.
#[derive(Debug)]
pub struct TableSummary {
    pub filename: String,
    pub headers: Vec<String>,
    /// Sampled rows as (original row index, cells), in drawn order.
    pub sample: Vec<(usize, Vec<String>)>,
    pub stats: Vec<ColumnStats>,
}

/// Descriptive statistics for one numeric column.
#[derive(Debug)]
pub struct ColumnStats {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Lists the `*.csv` files in the directory, sorted by filename so the
/// report order does not depend on the filesystem.
pub fn discover_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read input directory: {:?}", dir))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if is_csv && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Loads a CSV file, draws `sample_rows` distinct rows uniformly at random,
/// and computes descriptive statistics for every numeric column. A file
/// with fewer rows than the sample size is a fatal error.
pub fn summarize_file<R: Rng>(
    path: &Path,
    sample_rows: usize,
    rng: &mut R,
) -> Result<TableSummary> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open CSV file: {:?}", path))?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result.with_context(|| format!("Malformed CSV record in {:?}", path))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    if rows.len() < sample_rows {
        return Err(anyhow!(
            "{:?} has {} rows, need at least {} to sample",
            path,
            rows.len(),
            sample_rows
        ));
    }

    let sample = rand::seq::index::sample(rng, rows.len(), sample_rows)
        .into_iter()
        .map(|i| (i, rows[i].clone()))
        .collect();

    let stats = column_stats(&headers, &rows);

    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();

    Ok(TableSummary {
        filename,
        headers,
        sample,
        stats,
    })
}

/// A column is numeric when it has at least one non-empty value and every
/// non-empty value parses as a float. Empty cells are treated as missing
/// and excluded from the count.
fn column_stats(headers: &[String], rows: &[Vec<String>]) -> Vec<ColumnStats> {
    let mut stats = Vec::new();

    for (col, header) in headers.iter().enumerate() {
        let mut values = Vec::new();
        let mut numeric = true;
        for row in rows {
            let cell = row.get(col).map(String::as_str).unwrap_or("");
            if cell.is_empty() {
                continue;
            }
            match cell.trim().parse::<f64>() {
                Ok(v) => values.push(v),
                Err(_) => {
                    numeric = false;
                    break;
                }
            }
        }
        if !numeric || values.is_empty() {
            continue;
        }

        let mut data = Data::new(values.clone());
        stats.push(ColumnStats {
            column: header.clone(),
            count: values.len(),
            mean: (&values).mean(),
            std: (&values).std_dev(),
            min: (&values).min(),
            q1: data.lower_quartile(),
            median: data.median(),
            q3: data.upper_quartile(),
            max: (&values).max(),
        });
    }

    stats
}

/// Runs the whole summarization pipeline: discover, summarize, assemble,
/// write. Returns the report path.
pub fn run(config: &SummaryConfig) -> Result<PathBuf> {
    let files = discover_csv_files(&config.input_dir)?;
    info!(count = files.len(), dir = ?config.input_dir, "Discovered CSV files");

    let mut rng = rand::thread_rng();
    let mut summaries = Vec::new();
    for path in &files {
        info!(file = ?path, "Summarizing");
        summaries.push(summarize_file(path, config.sample_rows, &mut rng)?);
    }

    let content = report::assemble_report(&summaries);
    report::write_report(&content, &config.output_file)?;
    Ok(config.output_file.clone())
}
