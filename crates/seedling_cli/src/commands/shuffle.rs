//! Shuffle command implementation

use tracing::info;

use super::generator;
use crate::config::SeedlingConfig;
use crate::output::{Draws, Report};
use crate::{CliError, Result};

/// Run the shuffle command
pub fn run(config: &SeedlingConfig, items: &[String]) -> Result<Vec<Report>> {
    if items.is_empty() {
        return Err(CliError::invalid_argument("shuffle needs at least one item"));
    }
    info!(items = items.len(), "shuffling");

    let mut rng = generator(config);
    let mut shuffled = items.to_vec();
    rng.shuffle(&mut shuffled);

    Ok(vec![Report::new(
        format!("shuffle of {} items", items.len()),
        rng.seed_source(),
        Draws::Items(shuffled),
    )])
}
