//! The equality combinators.
//!
//! All three share the same-type check in [`same_type`]: `other` must be
//! present and downcast to the receiver's type, otherwise the result is
//! `false` and the comparison rule never sees `other`.

use std::any::{type_name, Any};

use fieldwise_types::Field;
use tracing::trace;

use crate::context::FieldsContext;

/// Downcast `other` to `T`, or `None` if it is absent or of another type.
pub fn same_type<T: Any>(other: Option<&dyn Any>) -> Option<&T> {
    let other = other.and_then(|other| other.downcast_ref::<T>());
    if other.is_none() {
        trace!(expected = type_name::<T>(), "other is absent or of a different type");
    }
    other
}

/// Equal if `other` has the receiver's type and both produce the same field
/// list, compared element-wise.
///
/// More concise than [`compare_using`], at the cost of building two vectors.
///
/// ```
/// use fieldwise_eq::compare_by_fields;
/// use fieldwise_types::fields;
///
/// struct User { name: String, age: u32 }
///
/// let a = User { name: "ada".into(), age: 36 };
/// let b = User { name: "ada".into(), age: 36 };
/// assert!(compare_by_fields(&a, Some(&b), |u| fields![&u.name, &u.age]));
/// assert!(!compare_by_fields(&a, Some(&"ada"), |u| fields![&u.name]));
/// assert!(!compare_by_fields(&a, None, |u| fields![&u.name]));
/// ```
pub fn compare_by_fields<'a, T, F>(this: &'a T, other: Option<&'a dyn Any>, get_fields: F) -> bool
where
    T: Any,
    F: Fn(&'a T) -> Vec<Field<'a>>,
{
    match same_type::<T>(other) {
        Some(other) => get_fields(this) == get_fields(other),
        None => false,
    }
}

/// Equal if `other` has the receiver's type and `compare(this, other)` holds.
///
/// Suits comparisons that are not pairwise over a fixed field list, or that
/// should avoid allocating one.
pub fn compare_using<'a, T, F>(this: &'a T, other: Option<&'a dyn Any>, compare: F) -> bool
where
    T: Any,
    F: FnOnce(&'a T, &'a T) -> bool,
{
    same_type::<T>(other).is_some_and(|other| compare(this, other))
}

/// Alias of [`compare_using`].
pub fn compare_by_using<'a, T, F>(this: &'a T, other: Option<&'a dyn Any>, compare: F) -> bool
where
    T: Any,
    F: FnOnce(&'a T, &'a T) -> bool,
{
    compare_using(this, other, compare)
}

/// Equal if `other` has the receiver's type and `block`, given a
/// [`FieldsContext`] over both objects, evaluates to `true`.
///
/// ```
/// use fieldwise_eq::compare_using_fields;
///
/// struct User { name: String, age: u32 }
///
/// let a = User { name: "ada".into(), age: 36 };
/// let b = User { name: "ada".into(), age: 37 };
/// assert!(compare_using_fields(&a, Some(&b), |c| c.field(|u| &u.name)));
/// assert!(!compare_using_fields(&a, Some(&b), |c| c.field(|u| &u.name).and(|u| u.age)));
/// ```
pub fn compare_using_fields<'a, T, F, B>(this: &'a T, other: Option<&'a dyn Any>, block: F) -> bool
where
    T: Any,
    F: FnOnce(&FieldsContext<'a, T>) -> B,
    B: Into<bool>,
{
    same_type::<T>(other).is_some_and(|other| block(&FieldsContext::new(this, other)).into())
}
