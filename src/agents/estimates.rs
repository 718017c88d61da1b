//! Sample-mean action value estimates
use crate::utils::iter::ArgMaxFirst;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Per-action value estimates and selection counts.
///
/// `values[a]` is the sample mean of all rewards observed for action `a`,
/// or the initial value if `a` has never been selected (`counts[a] == 0`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueEstimates {
    values: Array1<f64>,
    counts: Array1<u64>,
}

impl ValueEstimates {
    /// Create estimates for `num_actions` actions, all starting at `initial_value`.
    ///
    /// # Panics
    /// If `num_actions == 0`.
    pub fn new(num_actions: usize, initial_value: f64) -> Self {
        assert!(num_actions > 0, "at least one action is required");
        Self {
            values: Array1::from_elem(num_actions, initial_value),
            counts: Array1::zeros(num_actions),
        }
    }

    /// Create estimates with the given initial values and zero counts.
    ///
    /// # Panics
    /// If `values` is empty.
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let values: Array1<f64> = values.into_iter().collect();
        assert!(!values.is_empty(), "at least one action is required");
        let counts = Array1::zeros(values.len());
        Self { values, counts }
    }

    pub fn num_actions(&self) -> usize {
        self.values.len()
    }

    /// Estimated value of each action.
    pub const fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Number of times each action has been updated.
    pub const fn counts(&self) -> &Array1<u64> {
        &self.counts
    }

    /// Set every estimate to `initial_value` and every count to zero.
    pub fn reset(&mut self, initial_value: f64) {
        self.values.fill(initial_value);
        self.counts.fill(0);
    }

    /// Incorporate a reward observed for `action` into its sample mean.
    ///
    /// `Q[a] += (r - Q[a]) / N[a]` after incrementing `N[a]`,
    /// which equals the mean of all rewards seen for `a` without storing them.
    pub fn update(&mut self, action: usize, reward: f64) {
        self.counts[action] += 1;
        let count = self.counts[action] as f64;
        let value = &mut self.values[action];
        *value += (reward - *value) / count;
    }

    /// The action with the highest estimated value.
    ///
    /// Ties resolve to the lowest index.
    pub fn greedy_action(&self) -> usize {
        self.values
            .iter()
            .argmax_first()
            .expect("estimates are never empty")
    }
}
