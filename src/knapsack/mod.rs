//! Capacity-constrained item selection (fractional knapsack).
//!
//! Items carry a weight, a value, and a shelf life. Capacity may be filled
//! by taking items whole or, for the last item that does not fit, a
//! proportional fraction of it.
//!
//! - **Ratio greedy**: value/weight descending. Optimal for the fractional
//!   knapsack (exchange argument).
//! - **Shelf-life-then-ratio greedy**: perishable items first, ratio as
//!   tie-breaker. A prioritization policy, not an optimizer.
//! - **Exact hybrid search**: exponential 0/1 include/exclude recursion that
//!   may count a proportional fraction of an item that overflows the
//!   remaining capacity. A small-instance oracle; it is *not*
//!   interchangeable with a pure 0/1 solver.
//! - **Fractional bound**: the fractional optimum computed through LP
//!   duality, independent of any sort order.
//!
//! Every solver runs [`InputValidator`] first; an invalid instance is
//! rejected before any work is done.
//!
//! # Ordering
//!
//! Greedy orders come from a [`RuleEngine`] of [`PriorityRule`]s, applied
//! sequentially: a later rule is consulted only when earlier rules tie.
//! Scores compare exactly by default; [`GreedyConfig::epsilon`] widens the
//! tie band. Remaining ties keep the caller's item order by
//! default ([`TieBreaker::PreserveOrder`]). The solvers sort indices and
//! never reorder the caller's items.
//!
//! # References
//!
//! Dantzig (1957), "Discrete-Variable Extremum Problems";
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems" (rule
//! composition)

mod config;
mod engine;
mod solver;
mod types;
mod validate;

pub use config::{GreedyConfig, GreedyPolicy};
pub use engine::{ByRatio, ByShelfLife, PriorityRule, RuleEngine, TieBreaker};
pub use solver::{KnapsackError, KnapsackSolver};
pub use types::{Item, KnapsackInstance, KnapsackSolution, Selection};
pub use validate::{InputValidator, ValidationError, VALID};
