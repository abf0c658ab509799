//! Hash combiner for fieldwise.
//!
//! Folds an ordered list of [`Field`] values into a single `i32` hash code,
//! so that a type's `Hash` stays consistent with the fields its equality
//! combinator compares.
//!
//! Per-value hashes go through [`FieldHasher`], a BLAKE3-backed
//! [`std::hash::Hasher`], and are combined with the multiply-and-add
//! [`HashScheme`] (seed `1`, prime `31` by default).
//!
//! ```
//! use fieldwise_hash::hash;
//!
//! let (a, b, c) = (1i32, 2i32, 3i32);
//! assert_eq!(hash!(&a, &b, &c), hash!(&a, &b, &c));
//! assert_ne!(hash!(&a, &b, &c), hash!(&c, &b, &a));
//! ```

pub mod hasher;
pub mod scheme;

pub use fieldwise_types::Field;
pub use hasher::FieldHasher;
pub use scheme::{hash, hash_code, HashScheme, NULL_HASH};

/// Variadic form of [`hash`]: each argument is converted with `Field::from`.
#[macro_export]
macro_rules! hash {
    ($($value:expr),+ $(,)?) => {
        $crate::hash(&[$($crate::Field::from($value)),+])
    };
}
