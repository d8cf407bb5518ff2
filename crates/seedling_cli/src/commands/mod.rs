//! CLI command implementations
//!
//! Each submodule implements one subcommand and returns the reports to
//! render. Commands never write to stdout themselves.

pub mod draw;
pub mod freq;
pub mod shuffle;
pub mod walkthrough;

use seedling_core::Generator;
use tracing::info;

use crate::config::SeedlingConfig;

/// Build the generator a command draws from
///
/// An explicit seed in the configuration makes every command reproducible;
/// otherwise the generator is seeded from OS entropy.
pub fn generator(config: &SeedlingConfig) -> Generator {
    let rng = match config.seed {
        Some(seed) => Generator::from_seed(seed),
        None => Generator::new(),
    };
    info!(seed = %rng.seed_source(), "generator ready");
    rng
}
