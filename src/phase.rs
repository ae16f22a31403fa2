//! Measured phase bodies shared by the benchmark targets.
//!
//! Each function here is one timed region: bulk insertion, repeated
//! membership probes, or a sorted traversal folded into a running sum.
//! The probe and traversal phases return an accumulator so the call site can
//! route it through `black_box`, keeping the work observable to the
//! optimizer.

use std::iter::Sum;

use crate::set::BenchSet;

/// Inserts every value, in iterator order, into `set`.
pub fn fill<T, S>(set: &mut S, values: impl IntoIterator<Item = T>)
where
    S: BenchSet<T>,
{
    for value in values {
        set.insert(value);
    }
}

/// Performs `probes` membership tests against `set`, probing the key
/// `key_of(i % probes)` for `i` in `0..probes`, and returns the hit count.
///
/// The probe key wraps at `probes`, not at the populated size, so a set
/// holding `0..n` sees `n` hits and `probes - n` misses per cycle.
pub fn probe_hits<T, S, F>(set: &S, probes: u64, key_of: F) -> u64
where
    S: BenchSet<T>,
    F: Fn(u64) -> T,
{
    let mut hits = 0u64;
    for i in 0..probes {
        if set.contains(&key_of(i % probes)) {
            hits += 1;
        }
    }
    hits
}

/// Collects the contents of `set`, comparison-sorts them, and folds the
/// sorted sequence into a sum by repeated addition.
///
/// For contents `0..n` the result is the closed form `n * (n - 1) / 2`.
pub fn sorted_sum<'a, T, S>(set: &'a S) -> T
where
    S: BenchSet<T>,
    T: Ord + Sum<&'a T>,
{
    let mut items: Vec<&T> = set.iter().collect();
    items.sort_unstable();
    items.into_iter().sum()
}
