//! # seedling_core: Deterministic Pseudo-Random Generation
//!
//! seedling_core provides one seedable generator and the draws derived from
//! it:
//! - Uniform floats in [0, 1) and in an arbitrary `[low, high)` interval
//! - Inclusive bounded integers
//! - Gaussian samples with a given mean and standard deviation
//! - In-place Fisher-Yates shuffles, single choice and sampling without
//!   replacement
//!
//! Two generators seeded with the same value and driven by the same ordered
//! sequence of draws produce identical output, value for value.
//!
//! ## Module Structure
//!
//! - [`rng`]: The [`Generator`](rng::Generator), per-worker streams and the
//!   process-wide singleton
//! - [`frequency`]: Occurrence counting over previously drawn values
//! - [`error`]: The [`RngError`](error::RngError) type
//!
//! ## Usage Example
//!
//! ```rust
//! use seedling_core::rng::Generator;
//! use seedling_core::frequency::FrequencyTable;
//!
//! let mut rng = Generator::from_seed(0);
//! let draws: Vec<i64> = (0..3).map(|_| rng.next_int(10, 20).unwrap()).collect();
//!
//! // Reseeding replays the same draws
//! rng.seed(Some(0));
//! let again: Vec<i64> = (0..3).map(|_| rng.next_int(10, 20).unwrap()).collect();
//! assert_eq!(draws, again);
//!
//! let table: FrequencyTable<i64> = draws.into_iter().collect();
//! assert_eq!(table.total(), 3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod frequency;
pub mod rng;

pub use error::RngError;
pub use rng::{Generator, SeedSource};

/// Convenience alias for results produced by generator draws.
pub type Result<T> = std::result::Result<T, RngError>;
