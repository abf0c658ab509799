//! Foundation types for fieldwise.
//!
//! Every combinator in the workspace talks about *field values*: borrowed,
//! type-erased, possibly absent values pulled out of a caller's struct. This
//! crate defines them.
//!
//! # Key Types
//!
//! - [`Field`] — A borrowed field value, or null
//! - [`FieldValue`] — Object-safe equality and hashing capability behind a [`Field`]

pub mod field;

pub use field::{Field, FieldValue};

/// Build a `Vec<Field>` from a list of references or `Option<&T>` values.
///
/// ```
/// use fieldwise_types::{fields, Field};
///
/// let name = String::from("Hello");
/// let count: Option<i64> = None;
/// let list = fields![&name, count.as_ref()];
/// assert_eq!(list, vec![Field::of(&name), Field::null()]);
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        ::std::vec::Vec::<$crate::Field<'_>>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Field::from($value)),+]
    };
}
