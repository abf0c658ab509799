use fieldwise_types::Field;
use serde::{Deserialize, Serialize};

use crate::hasher::FieldHasher;

/// Hash code contributed by a null field.
pub const NULL_HASH: i32 = 0;

/// Multiply-and-add scheme for combining field hash codes.
///
/// The accumulator starts at `seed`; for each field in order it becomes
/// `acc * prime + hash_code(field)`, with wrapping arithmetic. Field order
/// therefore affects the result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashScheme {
    /// Initial accumulator value.
    pub seed: i32,
    /// Multiplier applied before each field is added.
    pub prime: i32,
}

impl HashScheme {
    /// The 31-based scheme used by [`hash`].
    pub const STANDARD: Self = Self { seed: 1, prime: 31 };

    pub const fn new(seed: i32, prime: i32) -> Self {
        Self { seed, prime }
    }

    /// Fold `values` into a single hash code.
    pub fn combine(&self, values: &[Field<'_>]) -> i32 {
        values.iter().fold(self.seed, |acc, value| {
            acc.wrapping_mul(self.prime).wrapping_add(hash_code(value))
        })
    }
}

impl Default for HashScheme {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Hash code of a single field: [`NULL_HASH`] for null, otherwise the
/// value's own structural hash.
pub fn hash_code(field: &Field<'_>) -> i32 {
    field.value().map_or(NULL_HASH, FieldHasher::hash_code)
}

/// Combine `values` into one hash code using [`HashScheme::STANDARD`].
pub fn hash(values: &[Field<'_>]) -> i32 {
    HashScheme::STANDARD.combine(values)
}
