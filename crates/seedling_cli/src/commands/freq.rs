//! Frequency command implementation
//!
//! Draws integers and tabulates how often each value occurred.

use seedling_core::frequency::FrequencyTable;
use tracing::info;

use super::generator;
use crate::config::SeedlingConfig;
use crate::output::{Draws, FrequencyRow, Report};
use crate::Result;

/// Draw `count` integers in `[low, high]` and return the sorted table rows
pub fn tabulate_draws(
    rng: &mut seedling_core::Generator,
    low: i64,
    high: i64,
    count: usize,
) -> Result<Vec<FrequencyRow>> {
    let mut table = FrequencyTable::new();
    for _ in 0..count {
        table.record(rng.next_int(low, high)?);
    }

    // Uniformity summary only for ranges small enough to enumerate
    if high.abs_diff(low) < 10_000 {
        let expected: Vec<i64> = (low..=high).collect();
        info!(
            distinct = table.len(),
            max_deviation = table.max_relative_deviation(&expected),
            "frequency table built"
        );
    }

    Ok(table
        .sorted()
        .into_iter()
        .map(|(value, count)| FrequencyRow { value, count })
        .collect())
}

/// Run the freq command
pub fn run(config: &SeedlingConfig, low: i64, high: i64) -> Result<Vec<Report>> {
    let mut rng = generator(config);
    let rows = tabulate_draws(&mut rng, low, high, config.count)?;

    Ok(vec![Report::new(
        format!("frequency of {} draws in [{}, {}]", config.count, low, high),
        rng.seed_source(),
        Draws::Frequencies(rows),
    )])
}
