//! Run correlation
//!
//! One batch invocation gets one [`RunId`]. Every structured event emitted
//! during the run carries it, so the console stream, the report files and
//! the JSON log of the same run can be joined afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Time-ordered (UUIDv7) identifier of one comparison run
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(String);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::now_v7().hyphenated().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Correlation data handed down from the suite to each category run.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    pub run_id: RunId,
    /// Category being executed; `None` at suite level
    pub category: Option<String>,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for a run whose id was minted elsewhere
    pub fn with_run_id(run_id: RunId) -> Self {
        Self {
            run_id,
            category: None,
        }
    }

    /// Same run, scoped to one category
    pub fn for_category(&self, category: impl Into<String>) -> Self {
        Self {
            run_id: self.run_id.clone(),
            category: Some(category.into()),
        }
    }
}
