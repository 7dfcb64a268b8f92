//! Leaf types shared by every crosscheck crate
//!
//! - [`RunId`] / [`RunContext`]: correlation of one comparison run
//! - [`Sensitive`]: redaction wrapper for backend credentials
//! - [`schema`]: structured-log field keys and event names

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::{RunContext, RunId};
pub use sensitive::Sensitive;
