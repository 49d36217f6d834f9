//! Brute-force and Karatsuba multipliers.
//!
//! # Algorithm
//!
//! For magnitudes `x`, `y` both at or above the base threshold:
//!
//! 1. `n` = decimal length of the larger operand, `m = n / 2`
//! 2. Split `x = hi_x * 10^m + lo_x`, `y = hi_y * 10^m + lo_y`
//! 3. `z0 = lo_x * lo_y`, `z2 = hi_x * hi_y`,
//!    `z1 = (lo_x + hi_x) * (lo_y + hi_y)` (all three recursive)
//! 4. `x * y = z2 * 10^(2m) + (z1 - z2 - z0) * 10^m + z0`
//!
//! `z1 - z2 - z0 = lo_x * hi_y + hi_x * lo_y` is never negative, so the
//! whole recursion stays in unsigned arithmetic.

use super::config::KaratsubaConfig;
use super::types::MultiplyError;
use crate::comparison::Comparison;
use tracing::debug;

/// Multiplies signed 64-bit integers.
///
/// # Examples
///
/// ```
/// use u_divconq::multiply::Multiplier;
///
/// assert_eq!(Multiplier::multiply_karatsuba(-12, 34), Ok(-408));
/// assert_eq!(Multiplier::multiply_karatsuba(-789, -123), Ok(97_047));
/// assert!(Multiplier::multiply_karatsuba(i64::MAX, 2).is_err());
/// ```
pub struct Multiplier;

impl Multiplier {
    /// Multiplies directly, reporting overflow instead of wrapping.
    pub fn multiply_brute_force(x: i64, y: i64) -> Result<i64, MultiplyError> {
        x.checked_mul(y).ok_or(MultiplyError::Overflow { x, y })
    }

    /// Multiplies with Karatsuba's method and the default configuration.
    pub fn multiply_karatsuba(x: i64, y: i64) -> Result<i64, MultiplyError> {
        Self::multiply_karatsuba_with(x, y, &KaratsubaConfig::default())
    }

    /// Multiplies with Karatsuba's method.
    pub fn multiply_karatsuba_with(
        x: i64,
        y: i64,
        config: &KaratsubaConfig,
    ) -> Result<i64, MultiplyError> {
        config.validate().map_err(MultiplyError::InvalidConfig)?;

        let negative = (x < 0) != (y < 0);
        let magnitude = karatsuba_magnitude(
            u128::from(x.unsigned_abs()),
            u128::from(y.unsigned_abs()),
            u128::from(config.base_threshold),
        );

        let product = magnitude
            .and_then(|mag| i128::try_from(mag).ok())
            .map(|mag| if negative { -mag } else { mag })
            .and_then(|signed| i64::try_from(signed).ok());

        match product {
            Some(p) => Ok(p),
            None => {
                debug!(x, y, "karatsuba product does not fit i64");
                Err(MultiplyError::Overflow { x, y })
            }
        }
    }

    /// Runs both multipliers on the same pair.
    ///
    /// Each variant is attempted independently; one overflowing does not
    /// stop the other from running.
    pub fn compare(x: i64, y: i64) -> Comparison<Result<i64, MultiplyError>> {
        Comparison::new(
            Self::multiply_brute_force(x, y),
            Self::multiply_karatsuba(x, y),
        )
    }
}

/// Karatsuba product of two magnitudes. `None` on 128-bit overflow.
///
/// `threshold` must be at least 10 so that every split has `m >= 1`.
fn karatsuba_magnitude(x: u128, y: u128, threshold: u128) -> Option<u128> {
    if x < threshold || y < threshold {
        return x.checked_mul(y);
    }

    let m = decimal_len(x.max(y)) / 2;
    let base = 10u128.checked_pow(m)?;

    let (high_x, low_x) = (x / base, x % base);
    let (high_y, low_y) = (y / base, y % base);

    let z0 = karatsuba_magnitude(low_x, low_y, threshold)?;
    let z1 = karatsuba_magnitude(
        low_x.checked_add(high_x)?,
        low_y.checked_add(high_y)?,
        threshold,
    )?;
    let z2 = karatsuba_magnitude(high_x, high_y, threshold)?;

    let cross = z1.checked_sub(z2)?.checked_sub(z0)?;

    z2.checked_mul(base.checked_mul(base)?)?
        .checked_add(cross.checked_mul(base)?)?
        .checked_add(z0)
}

/// Number of decimal digits in `v` (1 for zero).
fn decimal_len(v: u128) -> u32 {
    v.checked_ilog10().map_or(1, |d| d + 1)
}
