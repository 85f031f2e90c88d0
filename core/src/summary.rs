//! End-of-run descriptive statistics.

use crate::{
    engine::Batch,
    record::CallRecord,
    types::{Agency, Seconds},
};
use serde::Serialize;
use std::collections::BTreeMap;

/// count / mean / std / min / quartiles / max of one integer column.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ColumnStats {
    pub count: usize,
    pub mean:  f64,
    /// Sample standard deviation (n - 1). Zero for fewer than two values.
    pub std:   f64,
    pub min:   Seconds,
    pub p25:   f64,
    pub p50:   f64,
    pub p75:   f64,
    pub max:   Seconds,
}

impl ColumnStats {
    /// `None` for an empty column.
    pub fn describe(values: &[Seconds]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_unstable();

        let count = sorted.len();
        let mean = sorted.iter().sum::<Seconds>() as f64 / count as f64;
        let std = if count > 1 {
            let ss: f64 = sorted.iter().map(|&v| (v as f64 - mean).powi(2)).sum();
            (ss / (count - 1) as f64).sqrt()
        } else {
            0.0
        };

        Some(Self {
            count,
            mean,
            std,
            min: sorted[0],
            p25: quantile(&sorted, 0.25),
            p50: quantile(&sorted, 0.50),
            p75: quantile(&sorted, 0.75),
            max: sorted[count - 1],
        })
    }
}

/// Linear interpolation between closest ranks.
fn quantile(sorted: &[Seconds], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] as f64 + (sorted[hi] - sorted[lo]) as f64 * frac
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub records:       usize,
    pub agency_counts: BTreeMap<Agency, usize>,
    pub phone_time:    Option<ColumnStats>,
    pub process_time:  Option<ColumnStats>,
    pub total_time:    Option<ColumnStats>,
}

impl BatchSummary {
    pub fn from_batch(batch: &Batch) -> Self {
        let mut agency_counts = BTreeMap::new();
        for r in &batch.records {
            *agency_counts.entry(r.agency).or_insert(0) += 1;
        }
        let column = |f: fn(&CallRecord) -> Seconds| -> Vec<Seconds> {
            batch.records.iter().map(f).collect()
        };
        Self {
            records: batch.len(),
            agency_counts,
            phone_time: ColumnStats::describe(&column(|r| r.phone_time)),
            process_time: ColumnStats::describe(&column(|r| r.process_time)),
            total_time: ColumnStats::describe(&column(|r| r.total_time)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_matches_hand_computed_values() {
        let stats = ColumnStats::describe(&[4, 1, 3, 2, 5]).unwrap();
        assert_eq!(stats.count, 5);
        assert_eq!(stats.mean, 3.0);
        assert!((stats.std - 2.5f64.sqrt()).abs() < 1e-12);
        assert_eq!(stats.min, 1);
        assert_eq!(stats.p25, 2.0);
        assert_eq!(stats.p50, 3.0);
        assert_eq!(stats.p75, 4.0);
        assert_eq!(stats.max, 5);
    }

    #[test]
    fn quartiles_interpolate() {
        let stats = ColumnStats::describe(&[10, 20, 30, 40]).unwrap();
        assert_eq!(stats.p25, 17.5);
        assert_eq!(stats.p50, 25.0);
        assert_eq!(stats.p75, 32.5);
    }

    #[test]
    fn single_value_and_empty() {
        let stats = ColumnStats::describe(&[7]).unwrap();
        assert_eq!(stats.std, 0.0);
        assert_eq!(stats.p75, 7.0);
        assert!(ColumnStats::describe(&[]).is_none());
    }
}
