//! Rendering and persistence of mining results.
//!
//! Levels are emitted in ascending size and itemsets in canonical order, so the
//! output of two runs over the same input is byte-identical apart from timings.

use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::info;

use crate::errors::ReportError;
use crate::item_sets::{Apriori, ItemSetMiner};

/// Wall-clock figures for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimingMetrics {
    pub data_load: Duration,
    pub processing: Duration,
    pub total: Duration,
}

impl TimingMetrics {
    pub fn data_load_secs(&self) -> f64 {
        self.data_load.as_secs_f64()
    }

    pub fn processing_secs(&self) -> f64 {
        self.processing.as_secs_f64()
    }

    pub fn total_secs(&self) -> f64 {
        self.total.as_secs_f64()
    }
}

/// One frequent itemset with its support.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemsetRow {
    pub size: usize,
    /// Canonical comma-joined item list.
    pub items: String,
    pub support: f64,
}

/// Paths of the tables written by [`write_csv_reports`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFiles {
    pub summary: PathBuf,
    pub size_distribution: PathBuf,
    pub support_distribution: PathBuf,
    pub performance: PathBuf,
}

impl ReportFiles {
    pub fn new(results_dir: &Path, basename: &str) -> Self {
        Self {
            summary: results_dir.join(format!("{basename}_summary.csv")),
            size_distribution: results_dir.join(format!("{basename}_size_distribution.csv")),
            support_distribution: results_dir
                .join(format!("{basename}_support_distribution.csv")),
            performance: results_dir.join(format!("{basename}_performance.csv")),
        }
    }
}

/// Every frequent itemset, level by level, with its support.
pub fn itemset_rows(miner: &Apriori) -> Vec<ItemsetRow> {
    let mut rows = Vec::with_capacity(miner.total_frequent_itemsets());
    for (&size, itemsets) in miner.frequent_sets() {
        let mut level: Vec<_> = itemsets.iter().collect();
        level.sort();
        rows.extend(level.into_iter().map(|itemset| ItemsetRow {
            size,
            items: itemset.to_string(),
            support: miner.calculate_support(itemset),
        }));
    }
    rows
}

/// `(size, count)` for each recorded level.
pub fn size_distribution(miner: &Apriori) -> Vec<(usize, usize)> {
    miner
        .frequent_sets()
        .iter()
        .map(|(&size, itemsets)| (size, itemsets.len()))
        .collect()
}

/// Human-readable listing of every level.
pub fn render_console(miner: &Apriori) -> String {
    let mut out = String::from("Frequent Itemsets:\n");
    if miner.is_empty() {
        out.push_str("\n(none)\n");
        return out;
    }

    let mut current = 0;
    for row in itemset_rows(miner) {
        if row.size != current {
            current = row.size;
            let _ = write!(out, "\n{current}-itemsets:\n");
        }
        let _ = writeln!(
            out,
            "  [{}] (Support: {:.2})",
            row.items.replace(',', ", "),
            row.support
        );
    }
    out
}

/// Timing summary printed after a run.
pub fn render_timing(metrics: &TimingMetrics) -> String {
    format!(
        "Performance Metrics:\n\
         Data Loading Time: {:.2} seconds\n\
         Processing Time: {:.2} seconds\n\
         Total Time: {:.2} seconds\n",
        metrics.data_load_secs(),
        metrics.processing_secs(),
        metrics.total_secs()
    )
}

/// Writes the summary, size distribution, support distribution and performance
/// tables under `results_dir`, creating it if needed.
///
/// The miner is only read; a failure part-way leaves its results untouched.
pub fn write_csv_reports(
    miner: &Apriori,
    results_dir: &Path,
    basename: &str,
    metrics: &TimingMetrics,
) -> Result<ReportFiles, ReportError> {
    fs::create_dir_all(results_dir).map_err(|source| ReportError::CreateDir {
        path: results_dir.display().to_string(),
        source,
    })?;

    let files = ReportFiles::new(results_dir, basename);
    let rows = itemset_rows(miner);

    write_table(&files.summary, |w| {
        writeln!(w, "Size,Items,Support")?;
        for row in &rows {
            writeln!(w, "{},{},{:.6}", row.size, csv_field(&row.items), row.support)?;
        }
        Ok(())
    })?;

    write_table(&files.size_distribution, |w| {
        writeln!(w, "Size,Count")?;
        for (size, count) in size_distribution(miner) {
            writeln!(w, "{size},{count}")?;
        }
        Ok(())
    })?;

    write_table(&files.support_distribution, |w| {
        writeln!(w, "ItemsetSize,Items,Support")?;
        for row in &rows {
            writeln!(w, "{},{},{:.6}", row.size, csv_field(&row.items), row.support)?;
        }
        Ok(())
    })?;

    write_table(&files.performance, |w| {
        writeln!(w, "Metric,Time(seconds)")?;
        writeln!(w, "Data Loading,{:.6}", metrics.data_load_secs())?;
        writeln!(w, "Processing,{:.6}", metrics.processing_secs())?;
        writeln!(w, "Total,{:.6}", metrics.total_secs())?;
        writeln!(w, "Total Transactions,{}", miner.transaction_len())?;
        writeln!(w, "Total Frequent Itemsets,{}", miner.total_frequent_itemsets())?;
        Ok(())
    })?;

    Ok(files)
}

/// Quotes a CSV field, doubling embedded quotes.
pub fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn write_table(
    path: &Path,
    body: impl FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
) -> Result<(), ReportError> {
    let to_error = |source| ReportError::Write {
        path: path.display().to_string(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(to_error)?);
    body(&mut writer).map_err(to_error)?;
    writer.flush().map_err(to_error)?;

    info!(path = %path.display(), "table written");
    Ok(())
}
