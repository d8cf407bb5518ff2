//! # Random Number Generation
//!
//! This module provides the seedable [`Generator`] and the facilities built
//! around it for concurrent and ambient use.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: An explicit seed fully determines every later draw
//! - **Explicit ownership**: Each `Generator` owns its state; no hidden globals
//!   outside the opt-in [`global`] module
//! - **Validation first**: Draws check their parameters before consuming the
//!   stream, so failed calls never perturb later output
//! - **Efficiency**: Zero-allocation batch operations via `&mut [f64]` slices
//!
//! ## Algorithm
//!
//! The bit generator is ChaCha with 8 rounds (`rand_chacha::ChaCha8Rng`).
//! An integer seed is expanded into the 256-bit key by
//! `SeedableRng::seed_from_u64`. Derived draws are documented on each method
//! of [`Generator`].
//!
//! ## Module Structure
//!
//! - `generator`: The [`Generator`] and its captured [`GeneratorState`]
//! - `streams`: Independent per-worker generators and parallel batch fills
//! - [`global`]: A single process-wide generator behind a mutex
//!
//! ## Usage Example
//!
//! ```rust
//! use seedling_core::rng::Generator;
//!
//! let mut rng = Generator::from_seed(12345);
//!
//! let u = rng.next_float();
//! let n = rng.next_int(1, 6).unwrap();
//! let g = rng.next_gaussian(0.0, 1.0).unwrap();
//!
//! let mut deck = vec!['a', 'b', 'c', 'd'];
//! rng.shuffle(&mut deck);
//!
//! assert!((0.0..1.0).contains(&u));
//! assert!((1..=6).contains(&n));
//! assert!(g.is_finite());
//! ```

mod generator;
pub mod global;
mod streams;

// Public re-exports
pub use generator::{Generator, GeneratorState, SeedSource};
pub use streams::{par_fill_normal, par_fill_uniform, StreamFamily, DEFAULT_CHUNK_SIZE};

#[cfg(test)]
mod tests;
