use serde::{Deserialize, Serialize};

use crate::signals::SignalTriple;

/// Warm / cool / neutral evidence.
///
/// While channels are contributing this is a raw accumulator; after
/// [`EvidenceScore::normalized`] the components are non-negative and sum to 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EvidenceScore {
    pub warm: f64,
    pub cool: f64,
    pub neutral: f64,
}

impl EvidenceScore {
    pub fn new(warm: f64, cool: f64, neutral: f64) -> Self {
        Self {
            warm,
            cool,
            neutral,
        }
    }

    pub fn add_warm(&mut self, amount: f64) {
        self.warm += amount;
    }

    pub fn add_cool(&mut self, amount: f64) {
        self.cool += amount;
    }

    pub fn add_neutral(&mut self, amount: f64) {
        self.neutral += amount;
    }

    pub fn add_weighted(&mut self, triple: SignalTriple, weight: f64) {
        self.warm += weight * triple.warm;
        self.cool += weight * triple.cool;
        self.neutral += weight * triple.neutral;
    }

    pub fn total(&self) -> f64 {
        self.warm + self.cool + self.neutral
    }

    /// Rescale to percentages.
    ///
    /// Negative buckets (a channel may subtract from `cool`) are floored at 0
    /// first. An all-zero accumulator becomes an even split.
    pub fn normalized(&self) -> EvidenceScore {
        let warm = self.warm.max(0.0);
        let cool = self.cool.max(0.0);
        let neutral = self.neutral.max(0.0);
        let total = warm + cool + neutral;

        if !total.is_finite() || total <= 0.0 {
            tracing::warn!(score = ?self, "Evidence sums to zero, falling back to an even split");
            let third = 100.0 / 3.0;
            return EvidenceScore::new(third, third, third);
        }

        EvidenceScore::new(
            warm / total * 100.0,
            cool / total * 100.0,
            neutral / total * 100.0,
        )
    }
}
