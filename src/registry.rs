//! Central registry of the set implementations under measurement.
//!
//! This is the single source of truth for the measured kinds. Benchmarks
//! iterate them through [`for_each_set!`](crate::for_each_set), which expands
//! to one monomorphic block per implementation so no dynamic dispatch lands
//! in a timed region. [`SET_CASES`] carries the matching identifiers for
//! anything that only needs names, such as report labels.
//!
//! To add a kind, extend the macro and the table together; a test checks the
//! two stay in step.

/// A measured set kind, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetCase {
    /// Short identifier used in benchmark ids (e.g. `btree`).
    pub id: &'static str,
    /// Human-readable type name (e.g. `BTreeSet`).
    pub display_name: &'static str,
}

/// Every kind [`for_each_set!`](crate::for_each_set) visits, in visit order.
pub const SET_CASES: &[SetCase] = &[
    SetCase {
        id: "btree",
        display_name: "BTreeSet",
    },
    SetCase {
        id: "hash",
        display_name: "HashSet",
    },
    SetCase {
        id: "indexed",
        display_name: "IndexSet",
    },
];

/// Executes monomorphic code for each set kind.
///
/// Expands `$body` once per kind with these bindings in scope:
///
/// - `$set_id`: `&str` — kind identifier, matching [`SET_CASES`]
/// - `$make_set`: closure building a fresh, empty container of the kind,
///   holding elements of type `$element`
///
/// # Usage
///
/// ```
/// use setbench::for_each_set;
///
/// let mut lens = Vec::new();
/// for_each_set!(u32, with |set_id, make_set| {
///     let mut set = make_set();
///     set.insert(1);
///     lens.push((set_id, set.len()));
/// });
/// assert_eq!(lens.len(), 3);
/// ```
#[macro_export]
macro_rules! for_each_set {
    ($element:ty, with |$set_id:ident, $make_set:ident| $body:block) => {{
        use ::indexmap::IndexSet;
        use ::std::collections::{BTreeSet, HashSet};

        {
            let $set_id = "btree";
            let $make_set = || BTreeSet::<$element>::new();
            $body
        }
        {
            let $set_id = "hash";
            let $make_set = || HashSet::<$element>::new();
            $body
        }
        {
            let $set_id = "indexed";
            let $make_set = || IndexSet::<$element>::new();
            $body
        }
    }};
}
