use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Equality and hashing for a value whose concrete type has been erased.
///
/// Implemented for every `T: Any + PartialEq + Hash + Debug` by a blanket
/// impl, so callers never implement it by hand.
pub trait FieldValue: Any + fmt::Debug {
    /// The value as [`Any`], for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Structural equality against another erased value.
    ///
    /// Values of different concrete types are never equal.
    fn eq_field(&self, other: &dyn FieldValue) -> bool;

    /// Feed the value's [`Hash`] implementation into `state`.
    fn hash_field(&self, state: &mut dyn Hasher);
}

impl<T> FieldValue for T
where
    T: Any + PartialEq + Hash + fmt::Debug,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_field(&self, other: &dyn FieldValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn hash_field(&self, mut state: &mut dyn Hasher) {
        self.hash(&mut state);
    }
}

/// A single field value borrowed from a struct, or null.
///
/// Two fields are equal when both are null, or when both hold values of the
/// same concrete type that compare equal. A null field never equals a present
/// one, even if the present value is itself `None`.
#[derive(Clone, Copy)]
pub struct Field<'a>(Option<&'a dyn FieldValue>);

impl<'a> Field<'a> {
    /// The absent value.
    pub const fn null() -> Self {
        Self(None)
    }

    /// Wrap a present value.
    pub fn of<T: FieldValue>(value: &'a T) -> Self {
        Self(Some(value))
    }

    /// Returns `true` if this field holds no value.
    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }

    /// The erased value, if present.
    pub fn value(&self) -> Option<&'a dyn FieldValue> {
        self.0
    }

    /// The value as a concrete type, if present and of type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&'a T> {
        self.0.and_then(|value| value.as_any().downcast_ref::<T>())
    }
}

impl Default for Field<'_> {
    fn default() -> Self {
        Self::null()
    }
}

impl<'a, T: FieldValue> From<&'a T> for Field<'a> {
    fn from(value: &'a T) -> Self {
        Self::of(value)
    }
}

impl<'a, T: FieldValue> From<Option<&'a T>> for Field<'a> {
    fn from(value: Option<&'a T>) -> Self {
        match value {
            Some(value) => Self::of(value),
            None => Self::null(),
        }
    }
}

impl PartialEq for Field<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self.0, other.0) {
            (None, None) => true,
            (Some(a), Some(b)) => a.eq_field(b),
            _ => false,
        }
    }
}

impl Hash for Field<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.0 {
            None => state.write_u8(0),
            Some(value) => {
                state.write_u8(1);
                value.hash_field(state);
            }
        }
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Debug::fmt(value, f),
            None => f.write_str("null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use proptest::prelude::*;

    use super::*;

    fn std_hash(field: &Field<'_>) -> u64 {
        let mut hasher = DefaultHasher::new();
        field.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn null_equals_null() {
        assert_eq!(Field::null(), Field::null());
        assert!(Field::null().is_null());
        assert!(Field::default().is_null());
    }

    #[test]
    fn null_never_equals_a_value() {
        let absent: Option<String> = None;
        assert_ne!(Field::null(), Field::of(&absent));
        assert_ne!(Field::of(&5i32), Field::null());
    }

    #[test]
    fn equal_values_of_same_type() {
        let a = String::from("Hello");
        let b = String::from("Hello");
        assert_eq!(Field::of(&a), Field::of(&b));
    }

    #[test]
    fn different_types_are_never_equal() {
        let owned = String::from("Hello");
        let borrowed: &'static str = "Hello";
        assert_ne!(Field::of(&owned), Field::of(&borrowed));
        assert_ne!(Field::of(&5i32), Field::of(&5i64));
    }

    #[test]
    fn option_conversion_maps_none_to_null() {
        let present: Option<i64> = Some(5);
        let absent: Option<i64> = None;
        assert_eq!(Field::from(present.as_ref()), Field::of(&5i64));
        assert!(Field::from(absent.as_ref()).is_null());
    }

    #[test]
    fn downcast_recovers_value() {
        let value = String::from("World");
        let field = Field::of(&value);
        assert_eq!(field.downcast_ref::<String>(), Some(&value));
        assert_eq!(field.downcast_ref::<i32>(), None);
        assert_eq!(Field::null().downcast_ref::<String>(), None);
    }

    #[test]
    fn debug_renders_value_or_null() {
        let value = String::from("Hello");
        assert_eq!(format!("{:?}", Field::of(&value)), "\"Hello\"");
        assert_eq!(format!("{:?}", Field::null()), "null");
    }

    #[test]
    fn fields_macro_builds_list() {
        let name = String::from("Hello");
        let count: Option<i64> = None;
        let list = crate::fields![&name, count.as_ref()];
        assert_eq!(list.len(), 2);
        assert_eq!(list[0], Field::of(&name));
        assert!(list[1].is_null());
        assert!(crate::fields![].is_empty());
    }

    proptest! {
        #[test]
        fn equality_follows_value_equality(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(Field::of(&a) == Field::of(&b), a == b);
        }

        #[test]
        fn equal_fields_hash_equal(s in ".*") {
            let t = s.clone();
            prop_assert_eq!(std_hash(&Field::of(&s)), std_hash(&Field::of(&t)));
        }
    }
}
