//! Deterministic random number generation.
//!
//! RULE: Nothing in the generator may call any platform RNG.
//! All randomness flows through StageRng instances derived
//! from the single master seed of the run.
//!
//! Each pipeline stage gets its own RNG stream, seeded deterministically
//! from (master_seed XOR stage_index). This means:
//!   - Changing how many draws one stage takes never shifts another stage.
//!   - Each stage's stream is fully reproducible in isolation.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single pipeline stage.
pub struct StageRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl StageRng {
    /// Create a stage RNG from the master seed and a stable
    /// stage index. The index must never change once assigned.
    pub fn new(master_seed: u64, stage_index: u64) -> Self {
        let derived_seed = master_seed ^ (stage_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::RngCore;
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Uniform float in [low, high).
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }

    /// Uniform integer in [low, high], both ends inclusive.
    pub fn uniform_inclusive(&mut self, low: i64, high: i64) -> i64 {
        assert!(high >= low, "empty range {low}..={high}");
        let span = (high - low) as u64 + 1;
        low + self.next_u64_below(span) as i64
    }

    /// Pick one element uniformly. Panics on an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let index = self.next_u64_below(items.len() as u64) as usize;
        &items[index]
    }

    /// Normal sample via Box–Muller. Only one of the pair is used so the
    /// number of draws per call is fixed at two.
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-12);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    /// Poisson sample (Knuth). Fine for the small lambdas used here.
    pub fn poisson(&mut self, lambda: f64) -> u64 {
        let limit = (-lambda).exp();
        let mut k = 0u64;
        let mut p = self.next_f64();
        while p > limit {
            k += 1;
            p *= self.next_f64();
        }
        k
    }

    /// Exponential sample with the given mean (scale = 1 / rate).
    pub fn exponential(&mut self, mean: f64) -> f64 {
        // 1 - u lies in (0, 1], so ln never sees zero.
        -mean * (1.0 - self.next_f64()).ln()
    }
}

/// All stage RNGs for a single run, indexed by stable slot.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_stage(&self, slot: StageSlot) -> StageRng {
        StageRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable stage slot assignments.
/// NEVER reorder or remove entries — only append.
/// Reordering changes every stage's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StageSlot {
    Clients = 0,
    Products = 1,
    Deals = 2,
    ClientMetrics = 3,
    Auxiliary = 4,
}

impl StageSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Clients => "clients",
            Self::Products => "products",
            Self::Deals => "deals",
            Self::ClientMetrics => "client_metrics",
            Self::Auxiliary => "auxiliary",
        }
    }
}
