//! Structural response diffing.
//!
//! Compares two response graphs of the same declared shape and produces a
//! flat, ordered list of [`ChangeRecord`]s, then separates material
//! differences from serialization noise.
//!
//! ## Entry point
//!
//! ```ignore
//! use crosscheck_core::diff::{DiffFilter, StructuralDiffer};
//!
//! let raw = StructuralDiffer::new("CourtListResponse").compare(left.as_ref(), right.as_ref());
//! let material = DiffFilter::default().apply(raw);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: the same pair of immutable responses always yields the
//!   same records in the same order (declared field order, then list index).
//! - **Absent vs blank**: a missing value and an empty string are distinct
//!   in every record; only the filter may decide they are equivalent.
//! - **No reflection**: each response type declares its fields through
//!   [`Comparable`], usually via [`impl_comparable!`](crate::impl_comparable).

pub mod comparable;
pub mod engine;
pub mod filter;
pub mod model;

pub use comparable::{Comparable, Field, FieldValue, ToScalar};
pub use engine::StructuralDiffer;
pub use filter::{DiffFilter, NullBlankRule};
pub use model::{ChangeKind, ChangeRecord};
