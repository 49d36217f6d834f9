//! Knapsack data model.

/// A candidate item.
///
/// Fields are signed so that malformed data can be represented and then
/// rejected by [`InputValidator`](super::InputValidator).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Weight consumed when the whole item is taken. Must be positive.
    pub weight: i64,
    /// Value earned when the whole item is taken. Must be non-negative.
    pub value: f64,
    /// Remaining shelf life. Lower means more perishable.
    pub shelf_life: i64,
}

impl Item {
    pub fn new(weight: i64, value: f64, shelf_life: i64) -> Self {
        Self {
            weight,
            value,
            shelf_life,
        }
    }

    /// Value per unit of weight.
    pub fn ratio(&self) -> f64 {
        self.value / self.weight as f64
    }
}

/// Items plus the capacity they compete for.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackInstance {
    pub items: Vec<Item>,
    pub capacity: i64,
}

impl KnapsackInstance {
    pub fn new(items: Vec<Item>, capacity: i64) -> Self {
        Self { items, capacity }
    }

    /// Builds an instance from `(weight, value, shelf_life)` triples.
    pub fn from_triples(triples: &[(i64, f64, i64)], capacity: i64) -> Self {
        let items = triples
            .iter()
            .map(|&(weight, value, shelf_life)| Item::new(weight, value, shelf_life))
            .collect();
        Self::new(items, capacity)
    }

    /// Sum of all item weights, widened so it cannot overflow.
    pub fn total_weight(&self) -> i128 {
        self.items.iter().map(|it| i128::from(it.weight)).sum()
    }

    /// Sum of all item values.
    pub fn total_value(&self) -> f64 {
        self.items.iter().map(|it| it.value).sum()
    }
}

/// One item placed in the knapsack.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    /// Index into the instance's `items`.
    pub index: usize,
    /// Taken share of the item, in `(0, 1]`.
    pub fraction: f64,
}

/// Result of a greedy solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackSolution {
    /// Total value earned, including the fractional share of a split item.
    pub total_value: f64,
    /// Capacity consumed.
    pub used_weight: f64,
    /// Taken items, in the order they were taken.
    pub selections: Vec<Selection>,
    /// Priority order of all items (indices), as produced by the rule engine.
    pub order: Vec<usize>,
}

impl KnapsackSolution {
    /// Whether the last taken item was split.
    pub fn is_fractional(&self) -> bool {
        self.selections.last().is_some_and(|s| s.fraction < 1.0)
    }

    /// Indices of items taken whole.
    pub fn whole_items(&self) -> Vec<usize> {
        self.selections
            .iter()
            .filter(|s| s.fraction >= 1.0)
            .map(|s| s.index)
            .collect()
    }
}
