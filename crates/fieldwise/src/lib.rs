//! Structural equality, hash codes, and field diffs for value types.
//!
//! Instead of hand-writing `PartialEq`, `Hash`, and diff boilerplate, list the
//! fields that participate:
//!
//! ```
//! use std::hash::{Hash, Hasher};
//!
//! use fieldwise::{fields, hash, Fieldwise};
//!
//! #[derive(Debug)]
//! struct Account {
//!     owner: String,
//!     balance: Option<i64>,
//! }
//!
//! impl PartialEq for Account {
//!     fn eq(&self, other: &Self) -> bool {
//!         self.compare_by_fields(Some(other), |a| fields![&a.owner, a.balance.as_ref()])
//!     }
//! }
//!
//! impl Hash for Account {
//!     fn hash<H: Hasher>(&self, state: &mut H) {
//!         state.write_i32(hash!(&self.owner, self.balance.as_ref()));
//!     }
//! }
//!
//! let a = Account { owner: "ada".into(), balance: Some(10) };
//! let b = Account { owner: "ada".into(), balance: None };
//! assert_ne!(a, b);
//!
//! let diffs = a.diff_by_fields(&b, |a| fields![&a.owner, a.balance.as_ref()]);
//! assert_eq!(diffs.len(), 1);
//! assert_eq!(diffs[0].to_string(), "10 -> null");
//! ```
//!
//! The workspace crates are re-exported here; see [`Fieldwise`] for the
//! receiver-style methods.

pub mod ext;

pub use ext::Fieldwise;

// Re-export key types
pub use fieldwise_diff::{diff_by, diff_by_fields, try_diff_by_fields, DiffError, DiffResult, FieldDifference};
pub use fieldwise_eq::{
    compare_by_fields, compare_by_using, compare_using, compare_using_fields, FieldCheck, FieldsContext,
};
pub use fieldwise_hash::{hash, hash_code, FieldHasher, HashScheme, NULL_HASH};
pub use fieldwise_types::{fields, Field, FieldValue};
