//! Field-level diff: compare two instances of one type.
//!
//! Neither combinator checks runtime types; both sides are statically `T`.
//! Diffing an object against itself (the same reference) is always empty and
//! never calls the caller's function.

use std::fmt;
use std::ptr;

use fieldwise_types::Field;
use tracing::{debug, trace};

use crate::error::{DiffError, DiffResult};

/// One field on which two objects differ.
///
/// "Receiver" is the object the diff was called on, "argument" the object it
/// was compared against. Equality is structural over both pairs.
#[derive(Debug, PartialEq)]
pub struct FieldDifference<'a, T> {
    receiver: (&'a T, Field<'a>),
    argument: (&'a T, Field<'a>),
}

impl<'a, T> FieldDifference<'a, T> {
    pub fn new(receiver: (&'a T, Field<'a>), argument: (&'a T, Field<'a>)) -> Self {
        Self { receiver, argument }
    }

    /// The receiver and its value of the differing field.
    pub fn receiver(&self) -> (&'a T, Field<'a>) {
        self.receiver
    }

    /// The argument and its value of the differing field.
    pub fn argument(&self) -> (&'a T, Field<'a>) {
        self.argument
    }

    pub fn receiver_value(&self) -> Field<'a> {
        self.receiver.1
    }

    pub fn argument_value(&self) -> Field<'a> {
        self.argument.1
    }
}

impl<T> Clone for FieldDifference<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldDifference<'_, T> {}

impl<T> fmt::Display for FieldDifference<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -> {:?}", self.receiver.1, self.argument.1)
    }
}

/// Differences between the field lists `get_fields` produces for `this` and
/// `other`, paired by position.
///
/// # Panics
///
/// Panics if the two lists have different lengths; see
/// [`try_diff_by_fields`] for the non-panicking form.
pub fn diff_by_fields<'a, T, F>(this: &'a T, other: &'a T, get_fields: F) -> Vec<FieldDifference<'a, T>>
where
    F: Fn(&'a T) -> Vec<Field<'a>>,
{
    match try_diff_by_fields(this, other, get_fields) {
        Ok(diffs) => diffs,
        Err(err) => panic!("diff_by_fields: {err}"),
    }
}

/// Like [`diff_by_fields`], but reports unequal list lengths as
/// [`DiffError::FieldCountMismatch`] instead of panicking.
pub fn try_diff_by_fields<'a, T, F>(
    this: &'a T,
    other: &'a T,
    get_fields: F,
) -> DiffResult<Vec<FieldDifference<'a, T>>>
where
    F: Fn(&'a T) -> Vec<Field<'a>>,
{
    if ptr::eq(this, other) {
        trace!("diff against self, skipping field extraction");
        return Ok(Vec::new());
    }

    let receiver = get_fields(this);
    let argument = get_fields(other);
    if receiver.len() != argument.len() {
        return Err(DiffError::FieldCountMismatch {
            receiver: receiver.len(),
            argument: argument.len(),
        });
    }

    let diffs: Vec<_> = receiver
        .into_iter()
        .zip(argument)
        .filter(|(mine, theirs)| mine != theirs)
        .map(|(mine, theirs)| FieldDifference::new((this, mine), (other, theirs)))
        .collect();

    debug!(differences = diffs.len(), "diffed field lists");
    Ok(diffs)
}

/// Wrap each `(value_from_this, value_from_other)` pair returned by
/// `get_diffs` in a [`FieldDifference`].
///
/// `get_diffs` decides what counts as a difference; its pairs are taken as-is.
pub fn diff_by<'a, T, F>(this: &'a T, other: &'a T, get_diffs: F) -> Vec<FieldDifference<'a, T>>
where
    F: FnOnce(&'a T, &'a T) -> Vec<(Field<'a>, Field<'a>)>,
{
    if ptr::eq(this, other) {
        trace!("diff against self, skipping diff function");
        return Vec::new();
    }

    get_diffs(this, other)
        .into_iter()
        .map(|(mine, theirs)| FieldDifference::new((this, mine), (other, theirs)))
        .collect()
}
