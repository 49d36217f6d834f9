//! Brute-force and merge-based inversion counters.

use crate::comparison::Comparison;
use tracing::trace;

/// Counts inversions in a sequence.
///
/// # Examples
///
/// ```
/// use u_divconq::inversion::InversionCounter;
///
/// let codes = [2, 4, 1, 3, 5];
/// assert_eq!(InversionCounter::count_brute_force(&codes), 3);
/// assert_eq!(InversionCounter::count_optimized(&codes), 3);
/// ```
pub struct InversionCounter;

impl InversionCounter {
    /// Counts inversions with a double nested scan.
    pub fn count_brute_force<T: PartialOrd>(seq: &[T]) -> u64 {
        let mut inversions = 0u64;
        for (i, earlier) in seq.iter().enumerate() {
            for later in &seq[i + 1..] {
                if earlier > later {
                    inversions += 1;
                }
            }
        }
        inversions
    }

    /// Counts inversions with a recursive merge count.
    ///
    /// Works on an owned copy of `seq`; the caller's slice is untouched.
    pub fn count_optimized<T: Ord + Copy>(seq: &[T]) -> u64 {
        let mut data = seq.to_vec();
        let mut scratch = data.clone();
        let inversions = merge_count(&mut data, &mut scratch);
        trace!(n = seq.len(), inversions, "merge count finished");
        inversions
    }

    /// Runs both counters on the same sequence.
    pub fn compare<T: Ord + Copy>(seq: &[T]) -> Comparison<u64> {
        Comparison::new(Self::count_brute_force(seq), Self::count_optimized(seq))
    }
}

/// Sorts `data` in place and returns its inversion count.
///
/// The lower half holds `len / 2` elements. `scratch` must be the same
/// length as `data`; it is used as the merge buffer at every level of the
/// recursion, and its contents on return are unspecified.
///
/// # Panics
///
/// Panics if `scratch.len() != data.len()`.
pub fn merge_count<T: Ord + Copy>(data: &mut [T], scratch: &mut [T]) -> u64 {
    assert_eq!(
        data.len(),
        scratch.len(),
        "scratch buffer must match data length"
    );

    let n = data.len();
    if n <= 1 {
        return 0;
    }

    let mid = n / 2;
    let mut inversions = {
        let (left, right) = data.split_at_mut(mid);
        let (scratch_left, scratch_right) = scratch.split_at_mut(mid);
        merge_count(left, scratch_left) + merge_count(right, scratch_right)
    };

    inversions += merge_halves(data, mid, scratch);
    data.copy_from_slice(scratch);
    inversions
}

/// Merges the sorted runs `data[..mid]` and `data[mid..]` into `out`,
/// returning the number of cross-run inversions.
///
/// Every time a right-run element is placed while left-run elements remain,
/// each of those remaining elements forms one inversion with it.
fn merge_halves<T: Ord + Copy>(data: &[T], mid: usize, out: &mut [T]) -> u64 {
    let (left, right) = data.split_at(mid);
    let (mut i, mut j, mut k) = (0, 0, 0);
    let mut inversions = 0u64;

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            out[k] = left[i];
            i += 1;
        } else {
            out[k] = right[j];
            j += 1;
            inversions += (left.len() - i) as u64;
        }
        k += 1;
    }

    let left_rest = left.len() - i;
    out[k..k + left_rest].copy_from_slice(&left[i..]);
    k += left_rest;
    out[k..].copy_from_slice(&right[j..]);

    inversions
}
