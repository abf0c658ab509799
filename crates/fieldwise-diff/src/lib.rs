//! Field-difference combinators for fieldwise.
//!
//! Given two instances of the same type, report which fields differ and what
//! each side held, rather than a single equal/not-equal answer.
//!
//! # Key Types
//!
//! - [`FieldDifference`] -- One differing field: `(owner, value)` for each side
//! - [`DiffError`] -- Field lists of unequal length

pub mod difference;
pub mod error;

pub use difference::{diff_by, diff_by_fields, try_diff_by_fields, FieldDifference};
pub use error::{DiffError, DiffResult};
