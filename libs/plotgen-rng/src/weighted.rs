//! # Weighted Selection
//!
//! Picks one of N discrete outcomes with caller-specified relative
//! likelihoods. Weights are normalized to sum to one and turned into a
//! running-sum table; each selection is a single uniform draw.

use std::borrow::Cow;
use tracing::warn;

use crate::stream::RandomContext;

/// A normalized weight table with its cumulative sums.
///
/// # Example
///
/// ```rust
/// use plotgen_rng::{RandomContext, WeightedSelector};
///
/// let mut rng = RandomContext::new(8);
/// let roof_styles = WeightedSelector::prepared([3.0, 1.0]);
/// let choice = roof_styles.value(&mut rng);
/// assert!(choice < 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeightedSelector {
    weights: Vec<f64>,
    cumulative: Vec<f64>,
}

impl WeightedSelector {
    /// Stores raw weights without normalizing them.
    pub fn new(weights: impl IntoIterator<Item = f64>) -> Self {
        Self {
            weights: weights.into_iter().collect(),
            cumulative: Vec::new(),
        }
    }

    /// Builds a selector that is normalized and ready to sample.
    pub fn prepared(weights: impl IntoIterator<Item = f64>) -> Self {
        let mut selector = Self::new(weights);
        selector.normalize().build_cumulative();
        selector
    }

    /// Rescales the weights to sum to one.
    ///
    /// Negative or non-finite weights count as zero. When nothing positive
    /// remains the distribution falls back to uniform.
    pub fn normalize(&mut self) -> &mut Self {
        for w in &mut self.weights {
            if !w.is_finite() || *w < 0.0 {
                *w = 0.0;
            }
        }
        let total: f64 = self.weights.iter().sum();
        if total > 0.0 {
            for w in &mut self.weights {
                *w /= total;
            }
        } else if !self.weights.is_empty() {
            warn!(
                count = self.weights.len(),
                "weighted selector has no positive weight; using uniform weights"
            );
            let uniform = 1.0 / self.weights.len() as f64;
            self.weights.fill(uniform);
        }
        self
    }

    /// Produces the running-sum table used for sampling.
    pub fn build_cumulative(&mut self) -> &mut Self {
        self.cumulative = running_sum(&self.weights);
        self
    }

    /// Draws one index.
    ///
    /// A selector whose table was never built samples from a normalized
    /// table computed on the fly.
    ///
    /// Returns the first index whose cumulative weight strictly exceeds a
    /// uniform draw. If rounding leaves the draw above every entry the last
    /// index is returned. An empty selector returns 0 without drawing.
    pub fn value(&self, rng: &mut RandomContext) -> usize {
        if self.weights.is_empty() {
            return 0;
        }
        let table: Cow<'_, [f64]> = if self.cumulative.len() == self.weights.len() {
            Cow::Borrowed(&self.cumulative)
        } else {
            Cow::Owned(normalized_running_sum(&self.weights))
        };
        let draw = rng.value();
        table
            .iter()
            .position(|&c| c > draw)
            .unwrap_or(self.weights.len() - 1)
    }

    /// Returns the (possibly normalized) weights.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Returns the cumulative table; empty until `build_cumulative` runs.
    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// Number of outcomes.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true when there are no outcomes.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

fn normalized_running_sum(weights: &[f64]) -> Vec<f64> {
    let clean: Vec<f64> = weights
        .iter()
        .map(|&w| if w.is_finite() && w > 0.0 { w } else { 0.0 })
        .collect();
    let total: f64 = clean.iter().sum();
    if total <= 0.0 {
        let n = weights.len() as f64;
        return (1..=weights.len()).map(|i| i as f64 / n).collect();
    }
    running_sum(&clean)
        .into_iter()
        .map(|c| c / total)
        .collect()
}

fn running_sum(weights: &[f64]) -> Vec<f64> {
    weights
        .iter()
        .scan(0.0, |acc, &w| {
            *acc += w;
            Some(*acc)
        })
        .collect()
}
