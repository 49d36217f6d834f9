//! Divide-and-conquer and greedy algorithms, each paired with a brute-force
//! reference implementation for correctness comparison.
//!
//! - **Inversion counting**: O(n²) pairwise scan vs O(n log n) merge count.
//! - **Multiplication**: machine multiply vs Karatsuba digit splitting,
//!   with explicit overflow reporting.
//! - **Knapsack**: ratio greedy and shelf-life-first greedy vs an exact
//!   hybrid recursive search, guarded by an input validator, with an
//!   order-independent fractional bound.
//! - **Huffman coding**: greedy minimum-redundancy prefix codes.
//!
//! # Design
//!
//! Every engine is a set of pure, synchronous functions over borrowed
//! input: no state survives a call and caller data is never reordered or
//! mutated. Brute-force variants are oracles for small inputs, not
//! performance baselines. Each engine is independent of the others; the
//! [`Comparison`] type pairs a reference result with an optimized one.

pub mod comparison;
pub mod huffman;
pub mod inversion;
pub mod knapsack;
pub mod multiply;

pub use comparison::Comparison;
