//! Scalar draw commands: `int`, `float` and `gauss`.

use tracing::info;

use super::generator;
use crate::config::SeedlingConfig;
use crate::output::{Draws, Report};
use crate::Result;

/// Run the int command
pub fn int(config: &SeedlingConfig, low: i64, high: i64) -> Result<Vec<Report>> {
    info!(low, high, count = config.count, "drawing integers");
    let mut rng = generator(config);

    let values = (0..config.count)
        .map(|_| rng.next_int(low, high))
        .collect::<seedling_core::Result<Vec<_>>>()?;

    Ok(vec![Report::new(
        format!("{} integers in [{}, {}]", config.count, low, high),
        rng.seed_source(),
        Draws::Ints(values),
    )])
}

/// Run the float command
pub fn float(config: &SeedlingConfig) -> Result<Vec<Report>> {
    info!(count = config.count, "drawing uniform floats");
    let mut rng = generator(config);

    let mut values = vec![0.0; config.count];
    rng.fill_uniform(&mut values);

    Ok(vec![Report::new(
        format!("{} floats in [0, 1)", config.count),
        rng.seed_source(),
        Draws::Floats(values),
    )])
}

/// Run the gauss command
pub fn gauss(config: &SeedlingConfig, mean: f64, stddev: f64) -> Result<Vec<Report>> {
    info!(mean, stddev, count = config.count, "drawing gaussian samples");
    let mut rng = generator(config);

    let values = (0..config.count)
        .map(|_| rng.next_gaussian(mean, stddev))
        .collect::<seedling_core::Result<Vec<_>>>()?;

    Ok(vec![Report::new(
        format!("{} gaussian samples, mean {}, stddev {}", config.count, mean, stddev),
        rng.seed_source(),
        Draws::Floats(values),
    )])
}
