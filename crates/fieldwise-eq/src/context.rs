//! Fluent field-by-field comparison.
//!
//! [`FieldsContext`] holds the two objects under comparison. Starting a chain
//! with [`FieldsContext::field`] and extending it with [`FieldCheck::and`]
//! reads like the equality it encodes:
//!
//! ```
//! use fieldwise_eq::FieldsContext;
//!
//! struct Point { x: i32, y: i32 }
//!
//! let (a, b) = (Point { x: 1, y: 2 }, Point { x: 1, y: 3 });
//! let ctx = FieldsContext::new(&a, &b);
//! assert!(ctx.field(|p| p.x).holds());
//! assert!(!ctx.field(|p| p.x).and(|p| p.y).holds());
//! ```

use std::fmt;

/// The receiver and the other object of one equality check.
pub struct FieldsContext<'a, T> {
    one: &'a T,
    two: &'a T,
}

impl<'a, T> FieldsContext<'a, T> {
    pub fn new(one: &'a T, two: &'a T) -> Self {
        Self { one, two }
    }

    /// The receiver.
    pub fn one(&self) -> &'a T {
        self.one
    }

    /// The object the receiver is compared against.
    pub fn two(&self) -> &'a T {
        self.two
    }

    /// Extract a field from both objects with `getter` and compare the results.
    pub fn field<R, G>(&self, getter: G) -> FieldCheck<'a, T>
    where
        R: PartialEq,
        G: Fn(&'a T) -> R,
    {
        FieldCheck {
            context: *self,
            holds: getter(self.one) == getter(self.two),
        }
    }
}

impl<T> Clone for FieldsContext<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldsContext<'_, T> {}

impl<T> fmt::Debug for FieldsContext<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldsContext")
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

/// The running outcome of a chain of field comparisons.
///
/// Converts into `bool`, so a chain can be returned directly from the block
/// given to [`compare_using_fields`](crate::compare_using_fields).
#[must_use]
pub struct FieldCheck<'a, T> {
    context: FieldsContext<'a, T>,
    holds: bool,
}

impl<'a, T> FieldCheck<'a, T> {
    /// AND the chain with one more field comparison.
    ///
    /// Short-circuits: once a comparison has failed, later getters are not
    /// called.
    pub fn and<R, G>(self, getter: G) -> Self
    where
        R: PartialEq,
        G: Fn(&'a T) -> R,
    {
        if !self.holds {
            return self;
        }
        self.context.field(getter)
    }

    /// Whether every comparison in the chain so far succeeded.
    pub fn holds(&self) -> bool {
        self.holds
    }
}

impl<T> From<FieldCheck<'_, T>> for bool {
    fn from(check: FieldCheck<'_, T>) -> Self {
        check.holds
    }
}

impl<T> fmt::Debug for FieldCheck<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldCheck")
            .field("holds", &self.holds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct Sample {
        name: Option<String>,
        count: i64,
    }

    fn sample(name: Option<&str>, count: i64) -> Sample {
        Sample {
            name: name.map(str::to_string),
            count,
        }
    }

    #[test]
    fn single_field_equal() {
        let (a, b) = (sample(Some("Hello"), 1), sample(Some("Hello"), 2));
        let ctx = FieldsContext::new(&a, &b);
        assert!(ctx.field(|s| &s.name).holds());
    }

    #[test]
    fn chain_fails_when_any_field_differs() {
        let (a, b) = (sample(Some("Hello"), 1), sample(Some("Hello"), 2));
        let ctx = FieldsContext::new(&a, &b);
        assert!(!ctx.field(|s| &s.name).and(|s| s.count).holds());
        assert!(!ctx.field(|s| s.count).and(|s| &s.name).holds());
    }

    #[test]
    fn chain_holds_when_all_fields_match() {
        let (a, b) = (sample(None, 5), sample(None, 5));
        let check = FieldsContext::new(&a, &b)
            .field(|s| &s.name)
            .and(|s| s.count);
        assert!(bool::from(check));
    }

    #[test]
    fn and_short_circuits_after_failure() {
        let (a, b) = (sample(Some("Hello"), 5), sample(Some("World"), 5));
        let calls = Cell::new(0);
        let check = FieldsContext::new(&a, &b)
            .field(|s| &s.name)
            .and(|s| {
                calls.set(calls.get() + 1);
                s.count
            });
        assert!(!check.holds());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn context_exposes_both_objects() {
        let (a, b) = (sample(Some("one"), 1), sample(Some("two"), 2));
        let ctx = FieldsContext::new(&a, &b);
        assert_eq!(ctx.one().count, 1);
        assert_eq!(ctx.two().count, 2);
    }
}
