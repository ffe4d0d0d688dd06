//! Condition parsing and album evaluation
//!
//! Conditions are flat: a single tag, or exactly two tags joined by one
//! `AND` or `OR`. They are parsed once into a [`Condition`] when an
//! [`Album`] is built; [`Album::evaluate`] resolves the condition against
//! the bound store and reports the comparison work it charged.

pub mod condition;
pub mod evaluator;

pub use condition::Condition;
pub use evaluator::{Album, Evaluation};
