use crate::summarize::TableSummary;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

const TITLE: &str = "# Test data summary";
const DESCRIPTION: &str = "This data is from a test run from the model and serves\n\
to give an example of what we can expect when we run\n\
the model";

const STAT_ROWS: &[&str] = &["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Concatenates one Markdown section per summarized file beneath the fixed
/// title and description.
pub fn assemble_report(summaries: &[TableSummary]) -> String {
    let sections: Vec<String> = summaries.iter().map(render_section).collect();
    format!("{}\n\n{}\n\n{}\n", TITLE, DESCRIPTION, sections.join("\n"))
}

/// Writes the report, overwriting any existing file at the path.
pub fn write_report(content: &str, path: &Path) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write report: {:?}", path))?;
    info!(path = ?path, "Wrote summary report");
    Ok(())
}

fn render_section(summary: &TableSummary) -> String {
    format!(
        "## {}\n### Table snapshot\n{}\n### Dataset summary\n{}\n",
        summary.filename,
        render_sample_table(summary),
        render_stats_table(summary),
    )
}

/// The sampled rows as a pipe table, with a leading original-row-index
/// column.
fn render_sample_table(summary: &TableSummary) -> String {
    let mut header = vec![String::new()];
    header.extend(summary.headers.iter().cloned());

    let rows: Vec<Vec<String>> = summary
        .sample
        .iter()
        .map(|(index, cells)| {
            let mut row = vec![index.to_string()];
            row.extend(cells.iter().cloned());
            row
        })
        .collect();

    render_table(&header, &rows)
}

/// The describe-style table: one row per statistic, one column per numeric
/// column.
fn render_stats_table(summary: &TableSummary) -> String {
    let mut header = vec![String::new()];
    header.extend(summary.stats.iter().map(|s| s.column.clone()));

    let rows: Vec<Vec<String>> = STAT_ROWS
        .iter()
        .map(|&stat| {
            let mut row = vec![stat.to_string()];
            for column in &summary.stats {
                let value = match stat {
                    "count" => column.count.to_string(),
                    "mean" => fmt_stat(column.mean),
                    "std" => fmt_stat(column.std),
                    "min" => fmt_stat(column.min),
                    "25%" => fmt_stat(column.q1),
                    "50%" => fmt_stat(column.median),
                    "75%" => fmt_stat(column.q3),
                    _ => fmt_stat(column.max),
                };
                row.push(value);
            }
            row
        })
        .collect();

    render_table(&header, &rows)
}

fn render_table(header: &[String], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    out.push_str(&format!("| {} |\n", header.join(" | ")));
    out.push_str(&format!(
        "|{}\n",
        header.iter().map(|_| " --- |").collect::<String>()
    ));
    for row in rows {
        out.push_str(&format!("| {} |\n", row.join(" | ")));
    }
    out
}

/// Up to six decimal places, trailing zeros trimmed; NaN (the std of a
/// single value) renders as "nan" the way the tables always showed it.
fn fmt_stat(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let formatted = format!("{:.6}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SummaryConfig;
    use crate::summarize::{self, ColumnStats};

    fn summary_fixture() -> TableSummary {
        TableSummary {
            filename: "a.csv".to_string(),
            headers: vec!["x".to_string(), "label".to_string()],
            sample: vec![
                (3, vec!["4".to_string(), "row4".to_string()]),
                (0, vec!["1".to_string(), "row1".to_string()]),
            ],
            stats: vec![ColumnStats {
                column: "x".to_string(),
                count: 12,
                mean: 6.5,
                std: 3.605551,
                min: 1.0,
                q1: 3.75,
                median: 6.5,
                q3: 9.25,
                max: 12.0,
            }],
        }
    }

    #[test]
    fn section_contains_both_tables() {
        let report = assemble_report(&[summary_fixture()]);

        assert!(report.starts_with("# Test data summary\n"));
        assert!(report.contains("## a.csv\n"));
        assert!(report.contains("### Table snapshot\n"));
        assert!(report.contains("### Dataset summary\n"));
        assert!(report.contains("|  | x | label |"));
        assert!(report.contains("| 3 | 4 | row4 |"));
        assert!(report.contains("| count | 12 |"));
        assert!(report.contains("| mean | 6.5 |"));
        assert!(report.contains("| max | 12 |"));
    }

    #[test]
    fn fmt_stat_trims_and_handles_nan() {
        assert_eq!(fmt_stat(6.5), "6.5");
        assert_eq!(fmt_stat(12.0), "12");
        assert_eq!(fmt_stat(3.605551), "3.605551");
        assert_eq!(fmt_stat(f64::NAN), "nan");
    }

    // Directory with a.csv (12 rows of x,y) and b.csv (11 rows of z) turns
    // into one report with a section per file, sorted by filename.
    #[test]
    fn end_to_end_summary_report() {
        let dir = tempfile::tempdir().unwrap();
        let mut a = String::from("x,y\n");
        for i in 1..=12 {
            a.push_str(&format!("{},{}\n", i, i * 2));
        }
        let mut b = String::from("z\n");
        for i in 1..=11 {
            b.push_str(&format!("{}\n", i));
        }
        fs::write(dir.path().join("a.csv"), a).unwrap();
        fs::write(dir.path().join("b.csv"), b).unwrap();

        let config = SummaryConfig {
            input_dir: dir.path().to_path_buf(),
            sample_rows: 10,
            output_file: dir.path().join("summary.md"),
        };

        let path = summarize::run(&config).unwrap();
        let report = fs::read_to_string(path).unwrap();

        let a_pos = report.find("## a.csv").unwrap();
        let b_pos = report.find("## b.csv").unwrap();
        assert!(a_pos < b_pos);

        // Each section samples exactly ten rows.
        let a_section = &report[a_pos..b_pos];
        let snapshot = a_section
            .split("### Dataset summary")
            .next()
            .unwrap();
        let data_rows = snapshot
            .lines()
            .filter(|l| l.starts_with("| ") && !l.contains("---") && !l.contains(" x "))
            .count();
        assert_eq!(data_rows, 10);

        assert!(report.contains("| count | 12 | 12 |"));
        assert!(report.contains("| count | 11 |"));
    }
}
