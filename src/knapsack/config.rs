//! Greedy policies and their configuration.

use super::engine::{ByRatio, ByShelfLife, RuleEngine, TieBreaker};
use super::types::Item;

/// Which priority order the greedy solver follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GreedyPolicy {
    /// Value/weight ratio, descending.
    #[default]
    Ratio,

    /// Shelf life ascending, then ratio descending.
    ShelfLifeThenRatio,
}

impl GreedyPolicy {
    /// Builds the rule engine implementing this policy.
    pub fn engine(self, config: &GreedyConfig) -> RuleEngine<Item> {
        let engine = RuleEngine::new()
            .with_epsilon(config.epsilon)
            .with_tie_breaker(config.tie_breaker);
        match self {
            GreedyPolicy::Ratio => engine.with_rule(ByRatio),
            GreedyPolicy::ShelfLifeThenRatio => engine.with_rule(ByShelfLife).with_rule(ByRatio),
        }
    }
}

/// Configuration for the greedy solvers.
///
/// # Examples
///
/// ```
/// use u_divconq::knapsack::{GreedyConfig, TieBreaker};
///
/// let config = GreedyConfig::default()
///     .with_epsilon(1e-9)
///     .with_tie_breaker(TieBreaker::ReverseOrder);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyConfig {
    /// Scores closer than this are treated as equal. `0.0` compares exactly.
    pub epsilon: f64,

    /// Ordering among items whose scores all tie.
    pub tie_breaker: TieBreaker,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.0,
            tie_breaker: TieBreaker::PreserveOrder,
        }
    }
}

impl GreedyConfig {
    pub fn with_epsilon(mut self, eps: f64) -> Self {
        self.epsilon = eps;
        self
    }

    pub fn with_tie_breaker(mut self, tb: TieBreaker) -> Self {
        self.tie_breaker = tb;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(format!(
                "epsilon must be finite and non-negative, got {}",
                self.epsilon
            ));
        }
        Ok(())
    }
}
