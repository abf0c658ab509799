//! Receiver-style access to every combinator.
//!
//! [`Fieldwise`] is implemented for every `T: Any`, so inside `PartialEq::eq`
//! or a diff method the receiver can call `self.compare_by_fields(..)`
//! directly. Each method delegates to the free function of the same name.

use std::any::Any;

use fieldwise_diff::{DiffResult, FieldDifference};
use fieldwise_eq::FieldsContext;
use fieldwise_types::Field;

pub trait Fieldwise: Any + Sized {
    /// See [`fieldwise_eq::compare_by_fields`].
    fn compare_by_fields<'a, F>(&'a self, other: Option<&'a dyn Any>, get_fields: F) -> bool
    where
        F: Fn(&'a Self) -> Vec<Field<'a>>,
    {
        fieldwise_eq::compare_by_fields(self, other, get_fields)
    }

    /// See [`fieldwise_eq::compare_using`].
    fn compare_using<'a, F>(&'a self, other: Option<&'a dyn Any>, compare: F) -> bool
    where
        F: FnOnce(&'a Self, &'a Self) -> bool,
    {
        fieldwise_eq::compare_using(self, other, compare)
    }

    /// See [`fieldwise_eq::compare_using_fields`].
    fn compare_using_fields<'a, F, B>(&'a self, other: Option<&'a dyn Any>, block: F) -> bool
    where
        F: FnOnce(&FieldsContext<'a, Self>) -> B,
        B: Into<bool>,
    {
        fieldwise_eq::compare_using_fields(self, other, block)
    }

    /// See [`fieldwise_diff::diff_by_fields`].
    fn diff_by_fields<'a, F>(&'a self, other: &'a Self, get_fields: F) -> Vec<FieldDifference<'a, Self>>
    where
        F: Fn(&'a Self) -> Vec<Field<'a>>,
    {
        fieldwise_diff::diff_by_fields(self, other, get_fields)
    }

    /// See [`fieldwise_diff::try_diff_by_fields`].
    fn try_diff_by_fields<'a, F>(
        &'a self,
        other: &'a Self,
        get_fields: F,
    ) -> DiffResult<Vec<FieldDifference<'a, Self>>>
    where
        F: Fn(&'a Self) -> Vec<Field<'a>>,
    {
        fieldwise_diff::try_diff_by_fields(self, other, get_fields)
    }

    /// See [`fieldwise_diff::diff_by`].
    fn diff_by<'a, F>(&'a self, other: &'a Self, get_diffs: F) -> Vec<FieldDifference<'a, Self>>
    where
        F: FnOnce(&'a Self, &'a Self) -> Vec<(Field<'a>, Field<'a>)>,
    {
        fieldwise_diff::diff_by(self, other, get_diffs)
    }
}

impl<T: Any> Fieldwise for T {}
