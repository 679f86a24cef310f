//! Weighted categorical sampling over a fixed outcome list.

use crate::rng::StageRng;

/// Cumulative-weight sampler. Weights need not sum to exactly 1.0;
/// they are normalised against their total.
#[derive(Debug, Clone)]
pub struct WeightedChoice<T> {
    outcomes: Vec<T>,
    cumulative: Vec<f64>,
}

impl<T: Clone> WeightedChoice<T> {
    /// Panics if the lists differ in length, are empty, or a weight is negative.
    /// Outcome tables are compile-time constants, so a mismatch is a programming error.
    pub fn new(outcomes: &[T], weights: &[f64]) -> Self {
        assert_eq!(outcomes.len(), weights.len(), "outcomes/weights length mismatch");
        assert!(!outcomes.is_empty(), "no outcomes to choose from");

        let total: f64 = weights.iter().sum();
        let mut running = 0.0;
        let cumulative = weights
            .iter()
            .map(|w| {
                assert!(*w >= 0.0, "negative weight {w}");
                running += w / total;
                running
            })
            .collect();

        Self {
            outcomes: outcomes.to_vec(),
            cumulative,
        }
    }

    /// Draw one outcome. Consumes exactly one draw from `rng`.
    pub fn sample(&self, rng: &mut StageRng) -> T {
        let roll = rng.next_f64();
        for (outcome, cum) in self.outcomes.iter().zip(self.cumulative.iter()) {
            if roll < *cum {
                return outcome.clone();
            }
        }
        // Floating-point rounding can leave the final bound a hair under 1.0.
        self.outcomes[self.outcomes.len() - 1].clone()
    }
}
