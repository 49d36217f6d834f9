//! Numeric invariant checks for knapsack instances.

use super::types::KnapsackInstance;

/// Outcome string reported for an instance that passes every check.
pub const VALID: &str = "Valid";

/// The first invariant an instance violates.
///
/// `Display` yields the exact reason string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("capacity cannot be negative")]
    NegativeCapacity,
    #[error("item weight cannot be zero or negative")]
    NonPositiveWeight,
    #[error("item value cannot be negative")]
    NegativeValue,
    #[error("item value must be finite")]
    NonFiniteValue,
    #[error("item shelf life cannot be negative")]
    NegativeShelfLife,
    #[error("all item values are zero")]
    AllValuesZero,
}

/// Checks a [`KnapsackInstance`] before it reaches a solver.
///
/// Rules are checked in a fixed order and the first failure wins:
///
/// 1. capacity ≥ 0
/// 2. every weight > 0
/// 3. every value ≥ 0
/// 4. every value finite
/// 5. every shelf life ≥ 0
/// 6. at least one value non-zero (an empty item list fails this rule)
pub struct InputValidator;

impl InputValidator {
    /// Validates the instance.
    pub fn validate(instance: &KnapsackInstance) -> Result<(), ValidationError> {
        let items = &instance.items;

        if instance.capacity < 0 {
            return Err(ValidationError::NegativeCapacity);
        }
        if items.iter().any(|it| it.weight <= 0) {
            return Err(ValidationError::NonPositiveWeight);
        }
        if items.iter().any(|it| it.value < 0.0) {
            return Err(ValidationError::NegativeValue);
        }
        if items.iter().any(|it| !it.value.is_finite()) {
            return Err(ValidationError::NonFiniteValue);
        }
        if items.iter().any(|it| it.shelf_life < 0) {
            return Err(ValidationError::NegativeShelfLife);
        }
        if items.iter().all(|it| it.value == 0.0) {
            return Err(ValidationError::AllValuesZero);
        }
        Ok(())
    }

    /// Returns [`VALID`] or the reason the instance was rejected.
    pub fn message(instance: &KnapsackInstance) -> String {
        match Self::validate(instance) {
            Ok(()) => VALID.to_string(),
            Err(e) => e.to_string(),
        }
    }
}
