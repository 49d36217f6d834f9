//! Karatsuba configuration.

/// Configuration for Karatsuba multiplication.
///
/// # Examples
///
/// ```
/// use u_divconq::multiply::KaratsubaConfig;
///
/// let config = KaratsubaConfig::default().with_base_threshold(1_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KaratsubaConfig {
    /// Operands whose magnitude is below this value are multiplied
    /// directly instead of being split.
    ///
    /// The default of 10 bottoms out on single decimal digits. Values
    /// below 10 are rejected: a single-digit operand cannot be split.
    pub base_threshold: u64,
}

impl Default for KaratsubaConfig {
    fn default() -> Self {
        Self { base_threshold: 10 }
    }
}

impl KaratsubaConfig {
    pub fn with_base_threshold(mut self, threshold: u64) -> Self {
        self.base_threshold = threshold;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_threshold < 10 {
            return Err(format!(
                "base_threshold must be at least 10, got {}",
                self.base_threshold
            ));
        }
        Ok(())
    }
}
