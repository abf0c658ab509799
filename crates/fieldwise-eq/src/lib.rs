//! Equality combinators for fieldwise.
//!
//! Each combinator takes a receiver, an optional type-erased `other`, and a
//! comparison rule. The receiver and `other` are equal only if `other` is
//! present and has the receiver's concrete type; only then is the rule run.
//!
//! - [`compare_by_fields`] — compare two lists of [`Field`](fieldwise_types::Field) values
//! - [`compare_using`] — run an arbitrary predicate over both objects
//! - [`compare_using_fields`] — chain field checks through a [`FieldsContext`]

pub mod compare;
pub mod context;

pub use compare::{compare_by_fields, compare_by_using, compare_using, compare_using_fields, same_type};
pub use context::{FieldCheck, FieldsContext};
