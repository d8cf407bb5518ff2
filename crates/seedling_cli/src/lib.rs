//! # seedling CLI
//!
//! Command-line front end for the seedling generator. Each subcommand builds
//! a [`Generator`](seedling_core::Generator) from the resolved configuration,
//! performs its draws and returns one or more [`Report`](output::Report)s,
//! which `main` renders to stdout as a table, JSON or CSV.
//!
//! # Commands
//!
//! - `seedling int --low A --high B` - inclusive integer draws
//! - `seedling float` - uniform draws in [0, 1)
//! - `seedling gauss --mean M --stddev S` - Gaussian draws
//! - `seedling shuffle ITEM...` - one shuffled permutation
//! - `seedling freq --low A --high B` - integer draws tabulated by value
//! - `seedling walkthrough` - the seeding demonstration end to end

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, Result};

/// Crate version reported at start-up
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
