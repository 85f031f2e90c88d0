use crate::{
    error::{GenError, GenResult},
    types::{Agency, CallReception, Seconds},
};
use serde::{Deserialize, Serialize};

/// Inclusive clip bounds applied after sampling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ClipRange {
    pub min: Seconds,
    pub max: Seconds,
}

impl ClipRange {
    pub const fn new(min: Seconds, max: Seconds) -> Self {
        Self { min, max }
    }

    pub fn apply(&self, value: Seconds) -> Seconds {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: Seconds) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

// ── Service-time distributions ─────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogNormalSpec {
    pub mu: f64,
    pub sigma: f64,
    /// Raw draws are rescaled so their realized mean lands here.
    pub target_mean: f64,
    pub clip: ClipRange,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChiSquaredSpec {
    pub df: f64,
    pub multiplier: f64,
    pub clip: ClipRange,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GammaSpec {
    pub shape: f64,
    pub scale: f64,
    pub clip: ClipRange,
}

/// Short exponential calls mixed with a long gamma tail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneMixSpec {
    pub fast_share: f64,
    pub fast_scale: f64,
    pub slow_shape: f64,
    pub slow_scale: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceTimeConfig {
    pub queue: LogNormalSpec,
    pub dispatch: ChiSquaredSpec,
    pub phone: PhoneMixSpec,
    pub ack: GammaSpec,
    pub enroute: GammaSpec,
    pub on_scene: GammaSpec,
}

impl Default for ServiceTimeConfig {
    fn default() -> Self {
        Self {
            queue: LogNormalSpec {
                mu: 3.5,
                sigma: 1.2,
                target_mean: 200.0,
                clip: ClipRange::new(0, 90),
            },
            dispatch: ChiSquaredSpec {
                df: 5.0,
                multiplier: 2.0,
                clip: ClipRange::new(5, 600),
            },
            phone: PhoneMixSpec {
                fast_share: 0.8,
                fast_scale: 80.0,
                slow_shape: 2.0,
                slow_scale: 200.0,
            },
            ack: GammaSpec {
                shape: 2.0,
                scale: 30.0,
                clip: ClipRange::new(2, 40),
            },
            enroute: GammaSpec {
                shape: 6.0,
                scale: 70.0,
                clip: ClipRange::new(300, 900),
            },
            on_scene: GammaSpec {
                shape: 3.0,
                scale: 800.0,
                clip: ClipRange::new(300, 7200),
            },
        }
    }
}

// ── Generator config ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub agency_weights: Vec<(Agency, f64)>,
    pub reception_weights: Vec<(CallReception, f64)>,
    /// Inclusive bounds of the uniform priority draw.
    pub priority_range: (u8, u8),
    pub service_times: ServiceTimeConfig,
    pub address_pool_size: usize,
    pub names_per_shift: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            agency_weights: vec![
                (Agency::Law, 0.72),
                (Agency::Ems, 0.17),
                (Agency::Fire, 0.11),
            ],
            reception_weights: vec![
                (CallReception::E911, 0.55),
                (CallReception::Phone, 0.20),
                (CallReception::Officer, 0.10),
                (CallReception::Text, 0.10),
                (CallReception::C2c, 0.05),
            ],
            priority_range: (1, 5),
            service_times: ServiceTimeConfig::default(),
            address_pool_size: 2500,
            names_per_shift: 8,
        }
    }
}

impl GeneratorConfig {
    /// Load from a JSON file. Missing keys take their defaults.
    /// In tests, use GeneratorConfig::default_test().
    pub fn load(path: &str) -> GenResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: GeneratorConfig = serde_json::from_str(&content)?;
        config.validate()?;
        log::debug!("loaded generator config from {path}");
        Ok(config)
    }

    /// Config with a reduced address pool for use in tests.
    pub fn default_test() -> Self {
        Self {
            address_pool_size: 200,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> GenResult<()> {
        check_weights("agency_weights", self.agency_weights.iter().map(|(_, w)| *w))?;
        check_weights(
            "reception_weights",
            self.reception_weights.iter().map(|(_, w)| *w),
        )?;

        for agency in Agency::ALL {
            if !self.agency_weights.iter().any(|(a, _)| *a == agency) {
                return Err(invalid(format!("agency_weights is missing {agency}")));
            }
        }

        let (lo, hi) = self.priority_range;
        if lo > hi {
            return Err(invalid(format!("priority_range {lo}..={hi} is empty")));
        }
        if self.address_pool_size == 0 {
            return Err(invalid("address_pool_size must be > 0".into()));
        }
        if self.names_per_shift == 0 {
            return Err(invalid("names_per_shift must be > 0".into()));
        }

        let st = &self.service_times;
        check_clip("queue", st.queue.clip)?;
        check_clip("dispatch", st.dispatch.clip)?;
        check_clip("ack", st.ack.clip)?;
        check_clip("enroute", st.enroute.clip)?;
        check_clip("on_scene", st.on_scene.clip)?;

        check_positive("queue.sigma", st.queue.sigma)?;
        check_positive("queue.target_mean", st.queue.target_mean)?;
        if !st.queue.mu.is_finite() {
            return Err(invalid("queue.mu must be finite".into()));
        }
        check_positive("dispatch.df", st.dispatch.df)?;
        check_positive("dispatch.multiplier", st.dispatch.multiplier)?;
        check_positive("phone.fast_scale", st.phone.fast_scale)?;
        check_positive("phone.slow_shape", st.phone.slow_shape)?;
        check_positive("phone.slow_scale", st.phone.slow_scale)?;
        if !(0.0..=1.0).contains(&st.phone.fast_share) {
            return Err(invalid(format!(
                "phone.fast_share {} outside [0, 1]",
                st.phone.fast_share
            )));
        }
        for (name, spec) in [("ack", &st.ack), ("enroute", &st.enroute), ("on_scene", &st.on_scene)] {
            check_positive(&format!("{name}.shape"), spec.shape)?;
            check_positive(&format!("{name}.scale"), spec.scale)?;
        }
        Ok(())
    }
}

fn invalid(reason: String) -> GenError {
    GenError::InvalidConfig { reason }
}

fn check_weights(name: &str, weights: impl Iterator<Item = f64>) -> GenResult<()> {
    let mut total = 0.0;
    for w in weights {
        if !(w.is_finite() && w >= 0.0) {
            return Err(invalid(format!("{name} contains invalid weight {w}")));
        }
        total += w;
    }
    if (total - 1.0).abs() > 1e-6 {
        return Err(invalid(format!("{name} sum to {total}, expected 1")));
    }
    Ok(())
}

fn check_clip(name: &str, clip: ClipRange) -> GenResult<()> {
    if clip.min > clip.max {
        return Err(invalid(format!(
            "{name} clip range {}..={} is empty",
            clip.min, clip.max
        )));
    }
    Ok(())
}

fn check_positive(name: &str, value: f64) -> GenResult<()> {
    if !(value.is_finite() && value > 0.0) {
        return Err(invalid(format!("{name} must be positive, got {value}")));
    }
    Ok(())
}
