//! Integer multiplication.
//!
//! Two equivalent ways to multiply signed 64-bit integers:
//!
//! - **Brute force**: the machine multiply, with overflow detection.
//! - **Karatsuba**: recursive decimal digit splitting that replaces one
//!   multiplication of two n-digit numbers by three multiplications of
//!   roughly n/2-digit numbers.
//!
//! The Karatsuba decomposition runs on magnitudes in 128-bit arithmetic
//! with every step checked; the sign is applied once at the end. Products
//! that do not fit `i64` are reported as [`MultiplyError::Overflow`],
//! never wrapped.
//!
//! # References
//!
//! Karatsuba & Ofman (1962), "Multiplication of Many-Digital Numbers by
//! Automatic Computers"

mod config;
mod karatsuba;
mod types;

pub use config::KaratsubaConfig;
pub use karatsuba::Multiplier;
pub use types::MultiplyError;
