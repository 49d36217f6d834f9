//! Side-by-side results of a brute-force oracle and an optimized algorithm.

/// Outputs of the reference and optimized variants for the same input.
///
/// Both variants are always run; a failure in one never prevents the
/// other from being attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison<T> {
    /// Result of the brute-force reference.
    pub brute_force: T,
    /// Result of the optimized algorithm.
    pub optimized: T,
}

impl<T: PartialEq> Comparison<T> {
    /// Creates a comparison from both results.
    pub fn new(brute_force: T, optimized: T) -> Self {
        Self {
            brute_force,
            optimized,
        }
    }

    /// Whether both variants produced the same result.
    pub fn agrees(&self) -> bool {
        self.brute_force == self.optimized
    }
}
