//! Integration tests for module exports.
//!
//! Verify that all public modules and types are reachable via absolute
//! paths and via the crate-root re-exports.

#[test]
fn test_rng_module_exports() {
    use seedling_core::rng::global;
    use seedling_core::rng::{par_fill_normal, par_fill_uniform, DEFAULT_CHUNK_SIZE};
    use seedling_core::rng::{Generator, GeneratorState, SeedSource, StreamFamily};

    let mut rng = Generator::from_seed(1);
    let state: GeneratorState = rng.state();
    rng.set_state(&state);
    assert_eq!(rng.seed_source(), SeedSource::Explicit(1));

    let mut worker = StreamFamily::new(1).generator(2);
    assert_eq!(worker.stream(), 2);
    let _ = worker.next_float();

    let mut buffer = vec![0.0; 16];
    par_fill_uniform(1, &mut buffer, DEFAULT_CHUNK_SIZE);
    par_fill_normal(1, &mut buffer, DEFAULT_CHUNK_SIZE);

    let _ = global::next_float();
}

#[test]
fn test_crate_root_exports() {
    use seedling_core::{Generator, RngError, SeedSource};

    let mut rng = Generator::default();
    assert_eq!(rng.seed_source(), SeedSource::Entropy);

    let err: seedling_core::Result<i64> = rng.next_int(2, 1);
    assert!(matches!(err, Err(RngError::InvalidRange { .. })));
}

#[test]
fn test_frequency_module_exports() {
    use seedling_core::frequency::{tabulate, FrequencyTable};

    let table: FrequencyTable<char> = tabulate("hello".chars());
    assert_eq!(table.count(&'l'), 2);
    assert_eq!(table.len(), 4);
}
