//! Failure injection for simulated server flakiness.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Decides whether a simulated call fails.
///
/// Implementations must be shareable across concurrent calls.
pub trait FailureInjector: Send + Sync {
    /// Roll once. `true` means the call should fail.
    fn should_fail(&self) -> bool;
}

/// Fails with a fixed probability, driven by a seedable generator.
#[derive(Debug)]
pub struct RandomFailure {
    rate: f64,
    rng: Mutex<StdRng>,
}

impl RandomFailure {
    /// Failure rate with a fixed seed, for reproducible runs.
    pub fn seeded(rate: f64, seed: u64) -> Self {
        Self::with_rng(rate, StdRng::seed_from_u64(seed))
    }

    /// Failure rate seeded from OS entropy.
    pub fn from_entropy(rate: f64) -> Self {
        Self::with_rng(rate, StdRng::from_entropy())
    }

    fn with_rng(rate: f64, rng: StdRng) -> Self {
        // NaN falls back to never failing.
        let rate = if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) };
        Self {
            rate,
            rng: Mutex::new(rng),
        }
    }

    /// The effective failure probability.
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl FailureInjector for RandomFailure {
    fn should_fail(&self) -> bool {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_bool(self.rate)
    }
}

/// Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverFail;

impl FailureInjector for NeverFail {
    fn should_fail(&self) -> bool {
        false
    }
}

/// Always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysFail;

impl FailureInjector for AlwaysFail {
    fn should_fail(&self) -> bool {
        true
    }
}

impl<F: FailureInjector + ?Sized> FailureInjector for Box<F> {
    fn should_fail(&self) -> bool {
        (**self).should_fail()
    }
}
