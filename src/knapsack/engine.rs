//! Priority rules and the sequential rule engine that orders greedy picks.

use super::types::Item;
use std::cmp::Ordering;

/// A scoring rule that assigns a priority value to an item.
///
/// Rules return `f64` scores where **lower is higher priority**.
///
/// # Examples
///
/// ```
/// use u_divconq::knapsack::{Item, PriorityRule};
///
/// // Heaviest first
/// struct Heaviest;
///
/// impl PriorityRule<Item> for Heaviest {
///     fn name(&self) -> &str { "Heaviest" }
///     fn score(&self, item: &Item) -> f64 {
///         -(item.weight as f64)
///     }
/// }
/// ```
pub trait PriorityRule<T>: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes a priority score for the given item.
    ///
    /// Lower scores indicate higher priority.
    fn score(&self, item: &T) -> f64;

    /// Orders two items under this rule.
    ///
    /// Scores differing by no more than `epsilon` compare equal. Rules with
    /// an exact integer key override this to avoid `f64` rounding.
    fn compare(&self, a: &T, b: &T, epsilon: f64) -> Ordering {
        let (sa, sb) = (self.score(a), self.score(b));
        if (sa - sb).abs() > epsilon {
            sa.partial_cmp(&sb).unwrap_or(Ordering::Equal)
        } else {
            Ordering::Equal
        }
    }
}

/// Value/weight ratio, descending.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByRatio;

impl PriorityRule<Item> for ByRatio {
    fn name(&self) -> &str {
        "ByRatio"
    }
    fn score(&self, item: &Item) -> f64 {
        -item.ratio()
    }
}

/// Shelf life, ascending (most perishable first).
#[derive(Debug, Clone, Copy, Default)]
pub struct ByShelfLife;

impl PriorityRule<Item> for ByShelfLife {
    fn name(&self) -> &str {
        "ByShelfLife"
    }
    fn score(&self, item: &Item) -> f64 {
        item.shelf_life as f64
    }
    fn compare(&self, a: &Item, b: &Item, _epsilon: f64) -> Ordering {
        a.shelf_life.cmp(&b.shelf_life)
    }
}

/// Strategy for breaking ties when all rules produce equal scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreaker {
    /// Earlier items first (stable sort).
    #[default]
    PreserveOrder,

    /// Later items first.
    ReverseOrder,
}

/// Engine for composing and applying multiple priority rules.
///
/// Rules are applied in order. A later rule is only consulted when all
/// previous rules tie. Scores compare exactly unless an epsilon is set
/// with [`RuleEngine::with_epsilon`].
///
/// # Examples
///
/// ```
/// use u_divconq::knapsack::{ByRatio, ByShelfLife, Item, RuleEngine};
///
/// let engine = RuleEngine::new().with_rule(ByShelfLife).with_rule(ByRatio);
/// let items = [Item::new(10, 10.0, 3), Item::new(10, 50.0, 3), Item::new(5, 1.0, 1)];
/// assert_eq!(engine.sort_indices(&items), vec![2, 1, 0]);
/// ```
pub struct RuleEngine<T> {
    rules: Vec<Box<dyn PriorityRule<T>>>,
    tie_breaker: TieBreaker,
    epsilon: f64,
}

impl<T> RuleEngine<T> {
    /// Creates an engine with no rules.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::PreserveOrder,
            epsilon: 0.0,
        }
    }

    /// Sets the tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tb: TieBreaker) -> Self {
        self.tie_breaker = tb;
        self
    }

    /// Sets the epsilon for floating-point comparison (default `0.0`).
    pub fn with_epsilon(mut self, eps: f64) -> Self {
        self.epsilon = eps;
        self
    }

    /// Appends a rule. Earlier rules take precedence.
    pub fn with_rule<R: PriorityRule<T> + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns the number of rules in this engine.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all rules in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts items by priority (lowest score first = highest priority).
    ///
    /// Returns indices into the original slice, which is left untouched.
    pub fn sort_indices(&self, items: &[T]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..items.len()).collect();
        if self.rules.is_empty() {
            if self.tie_breaker == TieBreaker::ReverseOrder {
                indices.reverse();
            }
            return indices;
        }

        indices.sort_by(|&a, &b| {
            for rule in &self.rules {
                let ord = rule.compare(&items[a], &items[b], self.epsilon);
                if ord != Ordering::Equal {
                    return ord;
                }
            }

            match self.tie_breaker {
                TieBreaker::PreserveOrder => a.cmp(&b),
                TieBreaker::ReverseOrder => b.cmp(&a),
            }
        });

        indices
    }

    /// Sorts items by priority and returns references in sorted order.
    pub fn sort<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        self.sort_indices(items)
            .into_iter()
            .map(|i| &items[i])
            .collect()
    }
}

impl<T> Default for RuleEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}
