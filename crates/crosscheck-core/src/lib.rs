//! Crosscheck Core - dual-backend comparison engine
//!
//! This crate provides the pieces that turn "send the same request to two
//! services" into a stable, human-readable discrepancy report:
//! - ChangeRecord model and the `Comparable` schema-driven visitor
//! - Structural differ and the noise-suppression filter
//! - Fixed-width report renderer and the dual console/file sink
//! - Dual invoker over the `Backend` capability
//! - Scenario runner, per-category state and the run summary
//!
//! Transport, request marshaling and configuration live in the engine and
//! CLI crates; nothing here opens a socket.

pub mod diff;
pub mod errors;
pub mod invoke;
pub mod logging_facility;
pub mod report;
pub mod runner;
pub mod summary;

pub use crosscheck_core_types as types;

// Re-export commonly used types
pub use diff::{ChangeKind, ChangeRecord, Comparable, DiffFilter, NullBlankRule, StructuralDiffer};
pub use errors::{InvocationFailure, Result, XcError, XcErrorKind};
pub use invoke::{Backend, DualInvoker, DualResponse};
pub use report::{Justify, ReportRenderer, ReportSink};
pub use runner::{
    CategoryPlan, CategoryRun, CategoryState, ComparisonOutcome, Scenario, ScenarioRunner, Verdict,
};
pub use summary::{CategoryTally, RunSummary};
