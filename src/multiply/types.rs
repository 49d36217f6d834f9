//! Multiplication errors.

/// Why a product could not be computed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MultiplyError {
    /// The exact product does not fit in `i64`.
    #[error("product of {x} and {y} overflows i64")]
    Overflow {
        /// Left operand.
        x: i64,
        /// Right operand.
        y: i64,
    },

    /// The Karatsuba configuration was rejected by [`validate`](super::KaratsubaConfig::validate).
    #[error("invalid karatsuba config: {0}")]
    InvalidConfig(String),
}
