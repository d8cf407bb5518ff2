//! Report rendering
//!
//! Commands return [`Report`]s; this module writes them as a plain table,
//! a JSON array or CSV rows. Floats are printed with Rust's shortest
//! round-trip representation, so equal output text means bit-identical
//! values.

use serde::Serialize;
use std::io::Write;

use seedling_core::SeedSource;

use crate::config::OutputFormat;
use crate::Result;

/// Widest frequency bar in table output
const BAR_WIDTH: usize = 40;

/// One row of a frequency table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyRow {
    pub value: i64,
    pub count: usize,
}

/// Values produced by one command
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum Draws {
    Ints(Vec<i64>),
    Floats(Vec<f64>),
    Items(Vec<String>),
    Frequencies(Vec<FrequencyRow>),
}

impl Draws {
    /// Number of rows this draw set renders to
    pub fn len(&self) -> usize {
        match self {
            Draws::Ints(v) => v.len(),
            Draws::Floats(v) => v.len(),
            Draws::Items(v) => v.len(),
            Draws::Frequencies(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(key, value)` pairs: positional index for sequences, the drawn value
    /// and its count for frequency tables
    fn rows(&self) -> Vec<(String, String)> {
        match self {
            Draws::Ints(v) => enumerate(v),
            Draws::Floats(v) => enumerate(v),
            Draws::Items(v) => enumerate(v),
            Draws::Frequencies(rows) => rows
                .iter()
                .map(|r| (r.value.to_string(), r.count.to_string()))
                .collect(),
        }
    }
}

fn enumerate<T: ToString>(values: &[T]) -> Vec<(String, String)> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (i.to_string(), v.to_string()))
        .collect()
}

/// Titled result of one command step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub title: String,
    /// Explicit seed the generator was initialised with, if any
    pub seed: Option<u64>,
    pub draws: Draws,
}

impl Report {
    pub fn new(title: impl Into<String>, source: SeedSource, draws: Draws) -> Self {
        Self {
            title: title.into(),
            seed: source.seed(),
            draws,
        }
    }

    fn seed_label(&self) -> String {
        match self.seed {
            Some(seed) => seed.to_string(),
            None => "entropy".to_string(),
        }
    }
}

/// Write `reports` to `out` in the requested format
pub fn render<W: Write>(reports: &[Report], format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Table => render_table(reports, out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, reports)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Csv => render_csv(reports, out),
    }
}

fn render_table<W: Write>(reports: &[Report], out: &mut W) -> Result<()> {
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{} [seed: {}]", report.title, report.seed_label())?;

        match &report.draws {
            Draws::Frequencies(rows) => {
                let max = rows.iter().map(|r| r.count).max().unwrap_or(0).max(1);
                writeln!(out, "{:>8}  {:>8}", "value", "count")?;
                for row in rows {
                    let bar = "#".repeat(row.count * BAR_WIDTH / max);
                    writeln!(out, "{:>8}  {:>8}  {}", row.value, row.count, bar)?;
                }
            }
            draws => {
                for (key, value) in draws.rows() {
                    writeln!(out, "{:>8}  {}", key, value)?;
                }
            }
        }
    }
    Ok(())
}

fn render_csv<W: Write>(reports: &[Report], out: &mut W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["title", "seed", "key", "value"])?;
    for report in reports {
        let seed = report.seed_label();
        for (key, value) in report.draws.rows() {
            writer.write_record([report.title.as_str(), seed.as_str(), key.as_str(), value.as_str()])?;
        }
    }
    writer.flush()?;
    Ok(())
}
