//! Service-time sampling.
//!
//! Each duration column is drawn for the whole batch at once from its own
//! RNG stream, truncated to whole seconds, then clipped. Columns are
//! independent: changing N or one column's parameters never shifts another
//! column's draws.

use crate::{
    config::{ChiSquaredSpec, GammaSpec, LogNormalSpec, PhoneMixSpec, ServiceTimeConfig},
    error::{GenError, GenResult},
    rng::{ColumnRng, ColumnSlot, RngBank},
    types::Seconds,
};
use rand::seq::SliceRandom;
use rand_distr::{ChiSquared, Distribution, Exp, Gamma, LogNormal};

/// The six sampled service-time columns for one batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DurationColumns {
    pub queue: Vec<Seconds>,
    pub dispatch: Vec<Seconds>,
    pub phone: Vec<Seconds>,
    pub ack: Vec<Seconds>,
    pub enroute: Vec<Seconds>,
    pub on_scene: Vec<Seconds>,
}

impl DurationColumns {
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// queue + dispatch
    pub fn process_time(&self, i: usize) -> Seconds {
        self.queue[i] + self.dispatch[i]
    }

    /// Everything from pickup to close. Phone time runs in parallel and is excluded.
    pub fn total_time(&self, i: usize) -> Seconds {
        self.queue[i] + self.dispatch[i] + self.ack[i] + self.enroute[i] + self.on_scene[i]
    }
}

pub fn sample_durations(
    bank: &RngBank,
    config: &ServiceTimeConfig,
    n: usize,
) -> GenResult<DurationColumns> {
    let columns = DurationColumns {
        queue: sample_queue(&mut bank.for_column(ColumnSlot::QueueTime), &config.queue, n)?,
        dispatch: sample_dispatch(
            &mut bank.for_column(ColumnSlot::DispatchTime),
            &config.dispatch,
            n,
        )?,
        phone: sample_phone(&mut bank.for_column(ColumnSlot::PhoneTime), &config.phone, n)?,
        ack: sample_gamma(&mut bank.for_column(ColumnSlot::AckTime), &config.ack, n)?,
        enroute: sample_gamma(&mut bank.for_column(ColumnSlot::EnrouteTime), &config.enroute, n)?,
        on_scene: sample_gamma(
            &mut bank.for_column(ColumnSlot::OnSceneTime),
            &config.on_scene,
            n,
        )?,
    };
    log::debug!(
        "durations: sampled {n} rows (queue mean {:.1}s, on-scene mean {:.1}s)",
        mean(&columns.queue),
        mean(&columns.on_scene)
    );
    Ok(columns)
}

/// Log-normal draws, rescaled so the raw column mean hits `target_mean`,
/// then clipped. Clipping happens last, so the clipped mean drifts.
pub fn sample_queue(rng: &mut ColumnRng, spec: &LogNormalSpec, n: usize) -> GenResult<Vec<Seconds>> {
    let dist = LogNormal::new(spec.mu, spec.sigma).map_err(|e| bad_param("queue", e))?;
    let raw: Vec<Seconds> = (0..n).map(|_| dist.sample(rng) as Seconds).collect();

    let realized = mean(&raw);
    let rescaled: Vec<Seconds> = if realized > 0.0 {
        let factor = spec.target_mean / realized;
        raw.iter().map(|&v| (v as f64 * factor) as Seconds).collect()
    } else {
        log::warn!("durations: raw queue mean is zero, skipping rescale to {}", spec.target_mean);
        raw
    };

    Ok(rescaled.into_iter().map(|v| spec.clip.apply(v)).collect())
}

/// Scaled chi-square draws, clipped.
pub fn sample_dispatch(rng: &mut ColumnRng, spec: &ChiSquaredSpec, n: usize) -> GenResult<Vec<Seconds>> {
    let dist = ChiSquared::new(spec.df).map_err(|e| bad_param("dispatch", e))?;
    Ok((0..n)
        .map(|_| spec.clip.apply((dist.sample(rng) * spec.multiplier) as Seconds))
        .collect())
}

/// Exponential head plus gamma tail, shuffled together. Unclipped.
pub fn sample_phone(rng: &mut ColumnRng, spec: &PhoneMixSpec, n: usize) -> GenResult<Vec<Seconds>> {
    let fast = Exp::new(1.0 / spec.fast_scale).map_err(|e| bad_param("phone.fast", e))?;
    let slow = Gamma::new(spec.slow_shape, spec.slow_scale).map_err(|e| bad_param("phone.slow", e))?;

    let n_fast = (n as f64 * spec.fast_share) as usize;
    let mut values: Vec<f64> = Vec::with_capacity(n);
    values.extend((0..n_fast).map(|_| fast.sample(rng)));
    values.extend((n_fast..n).map(|_| slow.sample(rng)));
    values.shuffle(rng);

    Ok(values.into_iter().map(|v| v as Seconds).collect())
}

/// Gamma(shape, scale) draws, clipped.
pub fn sample_gamma(rng: &mut ColumnRng, spec: &GammaSpec, n: usize) -> GenResult<Vec<Seconds>> {
    let dist = Gamma::new(spec.shape, spec.scale).map_err(|e| bad_param(rng.name, e))?;
    Ok((0..n)
        .map(|_| spec.clip.apply(dist.sample(rng) as Seconds))
        .collect())
}

fn bad_param(field: &str, err: impl std::fmt::Display) -> GenError {
    GenError::InvalidConfig {
        reason: format!("{field} distribution: {err}"),
    }
}

fn mean(values: &[Seconds]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<Seconds>() as f64 / values.len() as f64
}
