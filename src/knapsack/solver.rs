//! Greedy, exact, and bound solvers.
//!
//! # Greedy fill
//!
//! 1. Order item indices with the policy's rule engine
//! 2. Walk the order, taking each item whole while it fits
//! 3. Take `remaining / weight` of the first item that does not fit, then stop
//!
//! # Exact hybrid recursion
//!
//! `best(i, r)` over the items in caller order:
//!
//! - no items left or `r == 0`: `0`
//! - `weight_i > r`: `max(best(i + 1, r), value_i * r / weight_i)`
//! - otherwise: `max(best(i + 1, r), value_i + best(i + 1, r - weight_i))`

use super::config::{GreedyConfig, GreedyPolicy};
use super::engine::RuleEngine;
use super::types::{Item, KnapsackInstance, KnapsackSolution, Selection};
use super::validate::{InputValidator, ValidationError};
use tracing::{debug, trace, warn};

/// Why a knapsack solve did not produce a result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KnapsackError {
    /// The instance violates a numeric invariant; nothing was solved.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The greedy configuration was rejected.
    #[error("invalid greedy config: {0}")]
    InvalidConfig(String),
}

/// Solves knapsack instances.
///
/// # Examples
///
/// ```
/// use u_divconq::knapsack::{KnapsackInstance, KnapsackSolver};
///
/// let instance = KnapsackInstance::from_triples(
///     &[(10, 60.0, 3), (20, 100.0, 1), (30, 120.0, 2)],
///     50,
/// );
/// let solution = KnapsackSolver::greedy_by_ratio(&instance).unwrap();
/// assert!((solution.total_value - 240.0).abs() < 1e-9);
/// ```
pub struct KnapsackSolver;

impl KnapsackSolver {
    /// Ratio greedy with the default configuration.
    pub fn greedy_by_ratio(instance: &KnapsackInstance) -> Result<KnapsackSolution, KnapsackError> {
        Self::greedy(instance, GreedyPolicy::Ratio, &GreedyConfig::default())
    }

    /// Shelf-life-first greedy with the default configuration.
    pub fn greedy_by_shelf_life_then_ratio(
        instance: &KnapsackInstance,
    ) -> Result<KnapsackSolution, KnapsackError> {
        Self::greedy(
            instance,
            GreedyPolicy::ShelfLifeThenRatio,
            &GreedyConfig::default(),
        )
    }

    /// Greedy fill following `policy`.
    pub fn greedy(
        instance: &KnapsackInstance,
        policy: GreedyPolicy,
        config: &GreedyConfig,
    ) -> Result<KnapsackSolution, KnapsackError> {
        config.validate().map_err(KnapsackError::InvalidConfig)?;
        debug!(?policy, "greedy knapsack");
        Self::greedy_with_engine(instance, &policy.engine(config))
    }

    /// Greedy fill following a caller-supplied rule engine.
    pub fn greedy_with_engine(
        instance: &KnapsackInstance,
        engine: &RuleEngine<Item>,
    ) -> Result<KnapsackSolution, KnapsackError> {
        validated(instance)?;

        let order = engine.sort_indices(&instance.items);
        let solution = fill(&instance.items, order, instance.capacity);

        debug!(
            n = instance.items.len(),
            capacity = instance.capacity,
            taken = solution.selections.len(),
            total_value = solution.total_value,
            "greedy fill finished"
        );
        Ok(solution)
    }

    /// Exact hybrid search. Exponential in the number of items.
    pub fn exact_brute_force(instance: &KnapsackInstance) -> Result<f64, KnapsackError> {
        validated(instance)?;
        let best = exact_best(&instance.items, instance.capacity);
        debug!(
            n = instance.items.len(),
            capacity = instance.capacity,
            best,
            "exact search finished"
        );
        Ok(best)
    }

    /// Optimum of the unconstrained fractional knapsack.
    ///
    /// Computed as the LP dual `min over λ ≥ 0 of λ·C + Σ max(0, v − λ·w)`,
    /// evaluated at `λ = 0` and at every item ratio (the breakpoints of the
    /// piecewise-linear dual), so it does not depend on any sort order.
    pub fn fractional_bound(instance: &KnapsackInstance) -> Result<f64, KnapsackError> {
        validated(instance)?;

        let capacity = instance.capacity as f64;
        let items = &instance.items;
        let dual = |lambda: f64| -> f64 {
            let surplus: f64 = items
                .iter()
                .map(|it| (it.value - lambda * it.weight as f64).max(0.0))
                .sum();
            lambda * capacity + surplus
        };

        let bound = std::iter::once(0.0)
            .chain(items.iter().map(Item::ratio))
            .map(dual)
            .fold(f64::INFINITY, f64::min);
        Ok(bound)
    }
}

fn validated(instance: &KnapsackInstance) -> Result<(), ValidationError> {
    InputValidator::validate(instance).inspect_err(|reason| {
        warn!(%reason, "rejecting knapsack instance");
    })
}

fn fill(items: &[Item], order: Vec<usize>, capacity: i64) -> KnapsackSolution {
    let mut remaining = capacity;
    let mut total_value = 0.0;
    let mut used_weight = 0.0;
    let mut selections = Vec::new();

    for &index in &order {
        if remaining == 0 {
            break;
        }
        let item = &items[index];

        if remaining >= item.weight {
            remaining -= item.weight;
            total_value += item.value;
            used_weight += item.weight as f64;
            selections.push(Selection {
                index,
                fraction: 1.0,
            });
            trace!(index, remaining, "took whole item");
        } else {
            let fraction = remaining as f64 / item.weight as f64;
            total_value += item.value * fraction;
            used_weight += remaining as f64;
            selections.push(Selection { index, fraction });
            trace!(index, fraction, "took partial item, capacity exhausted");
            break;
        }
    }

    KnapsackSolution {
        total_value,
        used_weight,
        selections,
        order,
    }
}

fn exact_best(items: &[Item], remaining: i64) -> f64 {
    let Some((item, rest)) = items.split_first() else {
        return 0.0;
    };
    if remaining == 0 {
        return 0.0;
    }

    let exclude = exact_best(rest, remaining);
    let include = if item.weight > remaining {
        item.value * remaining as f64 / item.weight as f64
    } else {
        item.value + exact_best(rest, remaining - item.weight)
    };
    exclude.max(include)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knapsack::engine::{ByShelfLife, TieBreaker};
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn six_items() -> KnapsackInstance {
        KnapsackInstance::from_triples(
            &[
                (50, 100.0, 10),
                (30, 120.0, 5),
                (60, 40.0, 20),
                (50, 70.0, 10),
                (90, 300.0, 1),
                (80, 200.0, 4),
            ],
            200,
        )
    }

    fn best_whole_subset(instance: &KnapsackInstance) -> f64 {
        let n = instance.items.len();
        (0u32..1 << n)
            .filter_map(|mask| {
                let (w, v) = (0..n)
                    .filter(|i| mask & (1 << i) != 0)
                    .map(|i| &instance.items[i])
                    .fold((0i64, 0.0), |(w, v), it| (w + it.weight, v + it.value));
                (w <= instance.capacity).then_some(v)
            })
            .fold(0.0, f64::max)
    }

    #[test]
    fn test_ratio_greedy_six_items() {
        let instance = six_items();
        let solution = KnapsackSolver::greedy_by_ratio(&instance).unwrap();

        // ratios 2, 4, 0.67, 1.4, 3.33, 2.5
        assert_eq!(solution.order, vec![1, 4, 5, 0, 3, 2]);
        assert_eq!(solution.whole_items(), vec![1, 4, 5]);
        assert!(!solution.is_fractional());
        assert!((solution.total_value - 620.0).abs() < EPS);
        assert!((solution.used_weight - 200.0).abs() < EPS);

        let bound = KnapsackSolver::fractional_bound(&instance).unwrap();
        assert!((solution.total_value - bound).abs() < EPS);
    }

    #[test]
    fn test_shelf_life_greedy_six_items() {
        let instance = six_items();
        let solution = KnapsackSolver::greedy_by_shelf_life_then_ratio(&instance).unwrap();

        // shelf lives 1, 4, 5, then the two 10s by ratio (2 beats 1.4), then 20
        assert_eq!(solution.order, vec![4, 5, 1, 0, 3, 2]);
        assert!((solution.total_value - 620.0).abs() < EPS);
    }

    #[test]
    fn test_fractional_split() {
        let instance =
            KnapsackInstance::from_triples(&[(10, 60.0, 3), (20, 100.0, 1), (30, 120.0, 2)], 50);
        let solution = KnapsackSolver::greedy_by_ratio(&instance).unwrap();

        assert_eq!(solution.order, vec![0, 1, 2]);
        assert!(solution.is_fractional());
        let last = solution.selections.last().unwrap();
        assert_eq!(last.index, 2);
        assert!((last.fraction - 2.0 / 3.0).abs() < EPS);
        assert!((solution.total_value - 240.0).abs() < EPS);
        assert!((solution.used_weight - 50.0).abs() < EPS);

        // shelf-life order: 20kg (shelf 1), 30kg (shelf 2), then 10kg does not fit
        let shelf = KnapsackSolver::greedy_by_shelf_life_then_ratio(&instance).unwrap();
        assert_eq!(shelf.whole_items(), vec![1, 2]);
        assert!((shelf.total_value - 220.0).abs() < EPS);
        assert!(shelf.total_value <= solution.total_value + EPS);
    }

    #[test]
    fn test_zero_capacity() {
        let instance = KnapsackInstance::from_triples(&[(3, 9.0, 1)], 0);
        let solution = KnapsackSolver::greedy_by_ratio(&instance).unwrap();
        assert!(solution.selections.is_empty());
        assert_eq!(solution.total_value, 0.0);
        assert_eq!(KnapsackSolver::exact_brute_force(&instance).unwrap(), 0.0);
        assert_eq!(KnapsackSolver::fractional_bound(&instance).unwrap(), 0.0);
    }

    #[test]
    fn test_everything_fits() {
        let instance =
            KnapsackInstance::from_triples(&[(5, 10.0, 2), (7, 3.0, 0), (1, 0.0, 9)], 100);
        let total = instance.total_value();
        let greedy = KnapsackSolver::greedy_by_ratio(&instance).unwrap();
        let shelf = KnapsackSolver::greedy_by_shelf_life_then_ratio(&instance).unwrap();
        let exact = KnapsackSolver::exact_brute_force(&instance).unwrap();
        assert!((greedy.total_value - total).abs() < EPS);
        assert!((shelf.total_value - total).abs() < EPS);
        assert!((exact - total).abs() < EPS);
    }

    #[test]
    fn test_invalid_instance_is_not_solved() {
        let instance =
            KnapsackInstance::from_triples(&[(10, 0.0, 1), (20, 0.0, 2), (30, 0.0, 3)], 40);
        let expected = KnapsackError::Validation(ValidationError::AllValuesZero);

        assert_eq!(KnapsackSolver::greedy_by_ratio(&instance), Err(expected.clone()));
        assert_eq!(
            KnapsackSolver::greedy_by_shelf_life_then_ratio(&instance),
            Err(expected.clone())
        );
        assert_eq!(KnapsackSolver::exact_brute_force(&instance), Err(expected.clone()));
        assert_eq!(KnapsackSolver::fractional_bound(&instance), Err(expected.clone()));
        assert_eq!(expected.to_string(), "all item values are zero");
    }

    #[test]
    fn test_invalid_config() {
        let config = GreedyConfig::default().with_epsilon(-1.0);
        let result = KnapsackSolver::greedy(&six_items(), GreedyPolicy::Ratio, &config);
        assert!(matches!(result, Err(KnapsackError::InvalidConfig(_))));
    }

    #[test]
    fn test_items_not_reordered() {
        let instance = six_items();
        let before = instance.clone();
        let _ = KnapsackSolver::greedy_by_shelf_life_then_ratio(&instance).unwrap();
        let _ = KnapsackSolver::greedy_by_ratio(&instance).unwrap();
        assert_eq!(instance, before);
    }

    #[test]
    fn test_exact_hybrid_counts_overflowing_fraction() {
        // Pure 0/1 can only take nothing (weight 10 > 4); the hybrid takes 4/10.
        let instance = KnapsackInstance::from_triples(&[(10, 50.0, 0)], 4);
        let exact = KnapsackSolver::exact_brute_force(&instance).unwrap();
        assert!((exact - 20.0).abs() < EPS);
        assert_eq!(best_whole_subset(&instance), 0.0);
    }

    #[test]
    fn test_exact_prefers_whole_subset() {
        let instance = six_items();
        let exact = KnapsackSolver::exact_brute_force(&instance).unwrap();
        assert!((exact - 620.0).abs() < EPS);
        assert!((best_whole_subset(&instance) - 620.0).abs() < EPS);
    }

    #[test]
    fn test_exact_is_not_pure_zero_one() {
        // best whole subset is 10 + 10 = 20 (weights 3 + 3);
        // the hybrid may fill the spare unit with a fraction of item 2.
        let instance =
            KnapsackInstance::from_triples(&[(3, 10.0, 0), (3, 10.0, 0), (2, 9.0, 0)], 7);
        let exact = KnapsackSolver::exact_brute_force(&instance).unwrap();
        assert!((best_whole_subset(&instance) - 20.0).abs() < EPS);
        assert!((exact - 24.5).abs() < EPS);
    }

    #[test]
    fn test_tie_breaker_keeps_total_value() {
        // equal ratios, cut falls after both tied items
        let instance =
            KnapsackInstance::from_triples(&[(10, 20.0, 0), (5, 10.0, 0), (10, 5.0, 0)], 20);
        let preserve = KnapsackSolver::greedy_by_ratio(&instance).unwrap();
        let reverse = KnapsackSolver::greedy(
            &instance,
            GreedyPolicy::Ratio,
            &GreedyConfig::default().with_tie_breaker(TieBreaker::ReverseOrder),
        )
        .unwrap();

        assert_eq!(preserve.order, vec![0, 1, 2]);
        assert_eq!(reverse.order, vec![1, 0, 2]);
        assert!((preserve.total_value - reverse.total_value).abs() < EPS);
        assert!((preserve.total_value - 32.5).abs() < EPS);
    }

    #[test]
    fn test_custom_engine() {
        let instance =
            KnapsackInstance::from_triples(&[(10, 60.0, 3), (20, 100.0, 1), (30, 120.0, 2)], 25);
        let engine = RuleEngine::new().with_rule(ByShelfLife);
        let solution = KnapsackSolver::greedy_with_engine(&instance, &engine).unwrap();
        assert_eq!(solution.order, vec![1, 2, 0]);
        assert!((solution.total_value - (100.0 + 120.0 * 5.0 / 30.0)).abs() < EPS);
    }

    #[test]
    fn test_ratio_greedy_large_weights() {
        // ratios 1e-10 and 9e-10
        let instance = KnapsackInstance::from_triples(
            &[(10_000_000_000, 1.0, 0), (10_000_000_000, 9.0, 0)],
            10_000_000_000,
        );
        let solution = KnapsackSolver::greedy_by_ratio(&instance).unwrap();
        assert_eq!(solution.order, vec![1, 0]);
        assert_eq!(solution.whole_items(), vec![1]);
        assert!((solution.total_value - 9.0).abs() < EPS);

        let bound = KnapsackSolver::fractional_bound(&instance).unwrap();
        assert!((solution.total_value - bound).abs() < EPS);
    }

    #[test]
    fn test_ratio_greedy_tiny_values() {
        let instance =
            KnapsackInstance::from_triples(&[(1, 1e-7, 0), (2, 1e-6, 0), (4, 3e-6, 0)], 4);
        let solution = KnapsackSolver::greedy_by_ratio(&instance).unwrap();
        assert_eq!(solution.order, vec![2, 1, 0]);
        assert!((solution.total_value - 3e-6).abs() < 1e-15);
    }

    fn arb_instance(max_items: usize) -> impl Strategy<Value = KnapsackInstance> {
        (
            prop::collection::vec((1i64..40, 0.0f64..100.0, 0i64..10), 1..max_items),
            0i64..120,
        )
            .prop_filter("at least one non-zero value", |(items, _)| {
                items.iter().any(|&(_, v, _)| v != 0.0)
            })
            .prop_map(|(items, capacity)| KnapsackInstance::from_triples(&items, capacity))
    }

    /// Weights from 1 to 1e12 and values from 1e-6 to 1e6, both log-uniform.
    fn arb_scaled_instance(max_items: usize) -> impl Strategy<Value = KnapsackInstance> {
        (
            prop::collection::vec((0.0f64..12.0, -6.0f64..6.0, 0i64..10), 1..max_items),
            0.0f64..1.0,
        )
            .prop_map(|(raw, fill)| {
                let items: Vec<Item> = raw
                    .into_iter()
                    .map(|(w, v, shelf)| {
                        let weight = (10f64.powf(w).round() as i64).max(1);
                        Item::new(weight, 10f64.powf(v), shelf)
                    })
                    .collect();
                let total: i64 = items.iter().map(|it| it.weight).sum();
                let capacity = (total as f64 * fill) as i64;
                KnapsackInstance::new(items, capacity)
            })
    }

    proptest! {
        #[test]
        fn prop_ratio_greedy_optimal_across_scales(instance in arb_scaled_instance(12)) {
            let greedy = KnapsackSolver::greedy_by_ratio(&instance).unwrap();
            let bound = KnapsackSolver::fractional_bound(&instance).unwrap();
            let tol = 1e-9 * (bound + instance.total_value());
            prop_assert!((greedy.total_value - bound).abs() <= tol);
        }

        #[test]
        fn prop_ratio_greedy_reaches_fractional_optimum(instance in arb_instance(12)) {
            let greedy = KnapsackSolver::greedy_by_ratio(&instance).unwrap();
            let bound = KnapsackSolver::fractional_bound(&instance).unwrap();
            prop_assert!(greedy.total_value <= bound + 1e-6 * (1.0 + bound));
            prop_assert!((greedy.total_value - bound).abs() <= 1e-6 * (1.0 + bound));
        }

        #[test]
        fn prop_greedy_respects_capacity(instance in arb_instance(12)) {
            for solution in [
                KnapsackSolver::greedy_by_ratio(&instance).unwrap(),
                KnapsackSolver::greedy_by_shelf_life_then_ratio(&instance).unwrap(),
            ] {
                prop_assert!(solution.used_weight <= instance.capacity as f64 + 1e-9);
                let weight: f64 = solution
                    .selections
                    .iter()
                    .map(|s| s.fraction * instance.items[s.index].weight as f64)
                    .sum();
                prop_assert!((weight - solution.used_weight).abs() < 1e-6);
            }
        }

        #[test]
        fn prop_shelf_life_greedy_never_beats_ratio(instance in arb_instance(12)) {
            let ratio = KnapsackSolver::greedy_by_ratio(&instance).unwrap();
            let shelf = KnapsackSolver::greedy_by_shelf_life_then_ratio(&instance).unwrap();
            prop_assert!(shelf.total_value <= ratio.total_value + 1e-6 * (1.0 + ratio.total_value));
        }

        #[test]
        fn prop_uniform_shelf_life_matches_ratio(mut instance in arb_instance(12), shelf in 0i64..10) {
            for item in &mut instance.items {
                item.shelf_life = shelf;
            }
            let ratio = KnapsackSolver::greedy_by_ratio(&instance).unwrap();
            let by_shelf = KnapsackSolver::greedy_by_shelf_life_then_ratio(&instance).unwrap();
            prop_assert_eq!(ratio, by_shelf);
        }

        #[test]
        fn prop_exact_between_whole_subset_and_bound(instance in arb_instance(9)) {
            let exact = KnapsackSolver::exact_brute_force(&instance).unwrap();
            let bound = KnapsackSolver::fractional_bound(&instance).unwrap();
            prop_assert!(exact <= bound + 1e-6 * (1.0 + bound));
            prop_assert!(exact + 1e-9 >= best_whole_subset(&instance));
        }
    }
}
