//! Inversion counting.
//!
//! An inversion is a pair of positions `i < j` with `seq[i] > seq[j]`
//! (strict; equal elements never form an inversion). Two equivalent
//! counters are provided:
//!
//! - **Brute force**: pairwise scan, O(n²). Serves as the reference oracle.
//! - **Merge count**: merge sort that counts cross-half inversions while
//!   merging, O(n log n).
//!
//! # References
//!
//! Kleinberg & Tardos (2005), "Algorithm Design", §5.3

mod counter;

pub use counter::{merge_count, InversionCounter};
