//! The set implementations under measurement.
//!
//! [`BenchSet`] gives the harness a single insert/lookup/iterate surface over
//! the three flavours being compared:
//!
//! - [`BTreeSet`]: comparison-ordered, logarithmic insert/lookup, sorted
//!   traversal.
//! - [`HashSet`]: hashed, near-constant insert/lookup, unspecified traversal
//!   order.
//! - [`IndexSet`]: hashed, near-constant insert/lookup, traversal in
//!   insertion order.
//!
//! The trait stays deliberately narrow: only the operations a timed region
//! performs. Construction is left to the call site (via
//! [`for_each_set!`](crate::for_each_set)) so each benchmark block remains
//! monomorphic.

use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;

use indexmap::IndexSet;

/// Common surface over the containers under test.
pub trait BenchSet<T> {
    /// Inserts `value`, returning whether it was newly added.
    fn insert(&mut self, value: T) -> bool;

    /// Membership test.
    fn contains(&self, value: &T) -> bool;

    /// Number of stored elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visits every element in the container's own traversal order.
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_>;
}

impl<T: Ord> BenchSet<T> for BTreeSet<T> {
    fn insert(&mut self, value: T) -> bool {
        BTreeSet::insert(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        BTreeSet::contains(self, value)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(BTreeSet::iter(self))
    }
}

impl<T: Eq + Hash> BenchSet<T> for HashSet<T> {
    fn insert(&mut self, value: T) -> bool {
        HashSet::insert(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(HashSet::iter(self))
    }
}

impl<T: Eq + Hash> BenchSet<T> for IndexSet<T> {
    fn insert(&mut self, value: T) -> bool {
        IndexSet::insert(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        IndexSet::contains(self, value)
    }

    fn len(&self) -> usize {
        IndexSet::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(IndexSet::iter(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(set: &mut dyn BenchSet<u32>) {
        assert!(set.is_empty());
        assert!(set.insert(3));
        assert!(set.insert(1));
        assert!(set.insert(2));
        assert!(!set.insert(2));
        assert_eq!(set.len(), 3);
        assert!(set.contains(&1));
        assert!(!set.contains(&4));
    }

    #[test]
    fn all_kinds_share_insert_and_lookup_semantics() {
        exercise(&mut BTreeSet::new());
        exercise(&mut HashSet::new());
        exercise(&mut IndexSet::new());
    }

    #[test]
    fn btree_traversal_is_sorted() {
        let mut set = BTreeSet::new();
        for v in [5u32, 1, 4, 2, 3] {
            BenchSet::insert(&mut set, v);
        }
        let seen: Vec<u32> = BenchSet::iter(&set).copied().collect();
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn indexed_traversal_follows_insertion_order() {
        let mut set = IndexSet::new();
        for v in [5u32, 1, 4, 2, 3] {
            BenchSet::insert(&mut set, v);
        }
        let seen: Vec<u32> = BenchSet::iter(&set).copied().collect();
        assert_eq!(seen, vec![5, 1, 4, 2, 3]);
    }

    #[test]
    fn hash_traversal_visits_every_element() {
        let mut set = HashSet::new();
        for v in 0..100u32 {
            BenchSet::insert(&mut set, v);
        }
        let mut seen: Vec<u32> = BenchSet::iter(&set).copied().collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..100).collect::<Vec<u32>>());
    }
}
