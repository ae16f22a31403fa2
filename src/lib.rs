//! setbench: micro-benchmarks for set implementations.
//!
//! Measures insert, membership-lookup, and sorted-traversal cost across the
//! three standard set flavours: comparison-ordered ([`std::collections::BTreeSet`]),
//! hashed ([`std::collections::HashSet`]), and hashed with insertion-order
//! traversal ([`indexmap::IndexSet`]).
//!
//! The timed code lives in the `benches/` targets; this library holds what
//! they share and what is unit-testable without a timer: pre-generated
//! inputs ([`input`]), the container abstraction ([`set`]), the measured
//! phase bodies ([`phase`]), the kind registry ([`registry`]), and the
//! warm-up/measurement schedules ([`profile`]).

pub mod error;
pub mod input;
pub mod phase;
pub mod profile;
pub mod registry;
pub mod set;
