//! Test support: structural invariant checks over the indexed store
//!
//! The maintenance protocol guarantees these invariants hold after any
//! sequence of add/delete operations:
//!
//! - **postings completeness**: every managed photo is reachable from each
//!   of its tags
//! - **postings minimality**: every posted photo carries the tag it is
//!   posted under and is still managed
//! - **no empty postings**: no tag survives with an empty posting list
//!
//! A violation is an internal-consistency failure; test suites assert
//! `check_all` returns `Ok` after every mutation they perform.

pub mod invariants;

pub use invariants::{
    check_all, check_no_empty_postings, check_postings_complete, check_postings_minimal,
};
