//! Bad requests fail before any table is produced.

use chrono::NaiveDate;
use dispatch_synth_core::{
    config::GeneratorConfig,
    corpus::Corpus,
    engine::{generate, BatchRequest, Generator},
    GenError,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn zero_count_rejected() {
    let generator = Generator::build_test().unwrap();
    let result = generator.generate(&BatchRequest::new(0, d(2024, 1, 1), d(2024, 12, 31)));
    assert!(matches!(result, Err(GenError::InvalidCount)));
}

#[test]
fn empty_window_rejected() {
    let generator = Generator::build_test().unwrap();
    let result = generator.generate(&BatchRequest::new(10, d(2024, 5, 1), d(2024, 5, 1)));
    assert!(matches!(result, Err(GenError::InvalidDateRange { .. })));
}

#[test]
fn reversed_window_rejected() {
    let generator = Generator::build_test().unwrap();
    let result = generator.generate(&BatchRequest::new(10, d(2024, 5, 2), d(2024, 5, 1)));
    assert!(matches!(result, Err(GenError::InvalidDateRange { .. })));
}

#[test]
fn zero_names_per_shift_rejected() {
    let generator = Generator::build_test().unwrap();
    let request = BatchRequest::new(10, d(2024, 1, 1), d(2024, 2, 1)).with_names_per_shift(0);
    assert!(matches!(
        generator.generate(&request),
        Err(GenError::InvalidNamesPerShift)
    ));
}

#[test]
fn invalid_config_rejected_at_generate() {
    let mut config = GeneratorConfig::default_test();
    let corpus = Corpus::build(1, config.address_pool_size).unwrap();
    config.reception_weights.clear();
    let request = BatchRequest::new(10, d(2024, 1, 1), d(2024, 2, 1));
    assert!(matches!(
        generate(&corpus, &config, &request),
        Err(GenError::InvalidConfig { .. })
    ));
}

#[test]
fn empty_address_pool_rejected() {
    assert!(matches!(
        Corpus::build(1, 0),
        Err(GenError::InvalidConfig { .. })
    ));
    assert!(matches!(
        Corpus::from_addresses(Vec::new()),
        Err(GenError::CorpusExhausted { .. })
    ));
}
