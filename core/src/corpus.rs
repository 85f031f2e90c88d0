//! Static category pools shared read-only by every batch.
//!
//! A `Corpus` is built once by the caller and passed by reference into
//! every `generate` call. Nothing in it changes after construction.

use crate::{
    error::{GenError, GenResult},
    name_generator::AddressGenerator,
    rng::{ColumnSlot, RngBank},
    types::Agency,
};
use std::collections::HashSet;

/// Give up on unique address generation after this many draws per slot.
pub const ADDRESS_ATTEMPTS_PER_SLOT: usize = 20;

pub const LAW_PROBLEMS: &[&str] = &[
    "TRAFFIC STOP",
    "PARKING COMPLAINT",
    "DISORDERLY CONDUCT",
    "SUSPICIOUS EVENT",
    "MVC",
    "POLICE INFORMATION",
    "ALARM COMMERCIAL",
    "DOMESTIC VIOL",
    "TRESPASSING",
    "ASSIST CITIZEN",
    "PUBLIC SERVICE - LAW",
    "MENTAL HEALTH",
    "NOISE COMPLAINT",
    "LARCENY",
    "DISABLED MOTORIST",
    "ALARM RESIDENTIAL",
    "DRUG COMPLAINT",
    "FLAG DOWN",
    "ASSAULT",
    "GLA",
];

pub const FIRE_PROBLEMS: &[&str] = &[
    "FIRE ALARM",
    "ELEVATOR",
    "MVC AUTO",
    "GAS LEAK",
    "PUBLIC SERVICE - FIRE",
    "OUTSIDE FIRE",
    "CO ALARM",
    "RESIDENTIAL BUILDING FIRE",
    "HIGHRISE BUILDING FIRE",
    "COMMERCIAL BUILDING FIRE",
    "ODOR OF SMOKE",
    "APPLIANCE FIRE",
    "LOCKOUT",
    "ENTRAPMENT",
    "MVC SCHOOL BUS",
    "WIRES DOWN",
    "HAZMAT",
    "MVC MOTORCYCLE",
];

// "PUBLIC SERICE EMS" is the value downstream consumers already match on.
pub const EMS_PROBLEMS: &[&str] = &[
    "ALS EMERGENCY",
    "BLS EMERGENCY",
    "TROUBLE BREATHING ALS",
    "FALL BLS",
    "PUBLIC SERICE EMS",
    "CHEST PAIN ALS",
    "CARDIAC ARREST ALS",
    "ALTERED LOC ALS",
    "UNCONSCIOUS ALS",
    "HEART PROBLEMS ALS",
    "SEIZURE ALS",
    "STROKE ALS",
    "INJURED PERSON BLS",
    "BACK PAIN BLS",
    "MENTAL HEALTH ALS",
    "ASSAULT ALS",
    "DIABETIC EMERGENCY ALS",
    "OVERDOSE ALS",
    "HEADACHE BLS",
    "ALLERGIC REACTION ALS",
    "PSYCHIATRIC EMERGENCY ALS",
];

#[derive(Debug, Clone)]
pub struct Corpus {
    addresses: Vec<String>,
}

impl Corpus {
    /// Build the address pool deterministically from `seed`.
    /// Fails with `CorpusExhausted` rather than returning duplicates.
    pub fn build(seed: u64, address_pool_size: usize) -> GenResult<Self> {
        if address_pool_size == 0 {
            return Err(GenError::InvalidConfig {
                reason: "address_pool_size must be > 0".into(),
            });
        }
        let mut rng = RngBank::new(seed).for_column(ColumnSlot::AddressCorpus);
        let addresses = unique_pool(address_pool_size, || {
            AddressGenerator::street_address(&mut rng)
        })?;
        log::debug!("corpus: built {} unique addresses", addresses.len());
        Ok(Self { addresses })
    }

    /// Wrap an externally supplied address list. Duplicates are rejected.
    pub fn from_addresses(addresses: Vec<String>) -> GenResult<Self> {
        let unique: HashSet<&str> = addresses.iter().map(String::as_str).collect();
        if addresses.is_empty() || unique.len() != addresses.len() {
            return Err(GenError::CorpusExhausted {
                requested: addresses.len().max(1),
                produced: unique.len(),
            });
        }
        Ok(Self { addresses })
    }

    pub fn addresses(&self) -> &[String] {
        &self.addresses
    }

    pub fn problems(&self, agency: Agency) -> &'static [&'static str] {
        match agency {
            Agency::Law  => LAW_PROBLEMS,
            Agency::Ems  => EMS_PROBLEMS,
            Agency::Fire => FIRE_PROBLEMS,
        }
    }

    /// Same lookup keyed by the written agency label (`LAW`, `EMS`, `FIRE`),
    /// for callers holding rows read back from an exported table.
    pub fn problems_for_label(&self, label: &str) -> GenResult<&'static [&'static str]> {
        Agency::ALL
            .into_iter()
            .find(|a| a.as_str() == label)
            .map(|a| self.problems(a))
            .ok_or_else(|| GenError::UnknownAgency { value: label.to_string() })
    }
}

/// Draw until `requested` distinct values are collected, or fail once
/// `requested * ADDRESS_ATTEMPTS_PER_SLOT` draws have been spent.
pub fn unique_pool(
    requested: usize,
    mut draw: impl FnMut() -> String,
) -> GenResult<Vec<String>> {
    let max_attempts = requested.saturating_mul(ADDRESS_ATTEMPTS_PER_SLOT);
    let mut seen = HashSet::with_capacity(requested);
    let mut pool = Vec::with_capacity(requested);

    let mut attempts = 0usize;
    while pool.len() < requested {
        if attempts >= max_attempts {
            return Err(GenError::CorpusExhausted {
                requested,
                produced: pool.len(),
            });
        }
        attempts += 1;
        let value = draw();
        if seen.insert(value.clone()) {
            pool.push(value);
        }
    }
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_sizes_match_categories() {
        assert_eq!(LAW_PROBLEMS.len(), 20);
        assert_eq!(FIRE_PROBLEMS.len(), 18);
        assert_eq!(EMS_PROBLEMS.len(), 21);
    }

    #[test]
    fn default_pool_size_is_unique() {
        let corpus = Corpus::build(42, 2500).unwrap();
        let unique: HashSet<&String> = corpus.addresses().iter().collect();
        assert_eq!(corpus.addresses().len(), 2500);
        assert_eq!(unique.len(), 2500);
    }

    #[test]
    fn build_is_deterministic() {
        let a = Corpus::build(9, 100).unwrap();
        let b = Corpus::build(9, 100).unwrap();
        assert_eq!(a.addresses(), b.addresses());
    }

    #[test]
    fn exhausted_source_fails_fast() {
        let values = ["1 Elm Street", "2 Elm Street", "3 Elm Street"];
        let mut i = 0;
        let result = unique_pool(5, || {
            i += 1;
            values[i % values.len()].to_string()
        });
        match result {
            Err(GenError::CorpusExhausted { requested, produced }) => {
                assert_eq!(requested, 5);
                assert_eq!(produced, 3);
            }
            other => panic!("expected CorpusExhausted, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_supplied_addresses_rejected() {
        let result = Corpus::from_addresses(vec!["1 Elm Street".into(), "1 Elm Street".into()]);
        assert!(matches!(result, Err(GenError::CorpusExhausted { .. })));
    }

    #[test]
    fn unknown_agency_label_is_an_error() {
        let corpus = Corpus::build(1, 10).unwrap();
        assert_eq!(corpus.problems_for_label("FIRE").unwrap().len(), 18);
        assert!(matches!(
            corpus.problems_for_label("COAST GUARD"),
            Err(GenError::UnknownAgency { .. })
        ));
    }
}
