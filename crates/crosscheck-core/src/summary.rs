//! Process-wide run totals.

use serde::Serialize;

use crate::errors::{Result, XcError, XcErrorKind};
use crate::report::banner_rule;
use crate::runner::{CategoryRun, CategoryState};
use crate::types::RunId;

/// Counters of one completed category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTally {
    pub name: String,
    pub scenarios: u64,
    pub diffs: u64,
    pub passes: u64,
    pub both_absent: u64,
}

/// Totals across every category of one run.
///
/// Updated only from the sequential runner after each category completes.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    run_id: RunId,
    categories: Vec<CategoryTally>,
    failed_categories: Vec<String>,
    total_diffs: u64,
    total_both_absent: u64,
}

impl RunSummary {
    pub fn new(run_id: RunId) -> Self {
        Self {
            run_id,
            categories: Vec::new(),
            failed_categories: Vec::new(),
            total_diffs: 0,
            total_both_absent: 0,
        }
    }

    /// Fold a completed category into the totals
    pub fn record(&mut self, run: &CategoryRun) -> Result<()> {
        if run.state() != CategoryState::Completed {
            return Err(XcError::new(XcErrorKind::InvalidState)
                .with_op("record_category")
                .with_category(run.name().to_string())
                .with_message(format!("category is {:?}, not Completed", run.state())));
        }
        self.total_diffs += run.diff_count();
        self.total_both_absent += run.both_absent();
        self.categories.push(CategoryTally {
            name: run.name().to_string(),
            scenarios: run.outcomes().len() as u64,
            diffs: run.diff_count(),
            passes: run.passes(),
            both_absent: run.both_absent(),
        });
        Ok(())
    }

    /// Note a category that could not run to completion
    pub fn record_failure(&mut self, category: impl Into<String>) {
        self.failed_categories.push(category.into());
    }

    pub fn run_id(&self) -> &RunId {
        &self.run_id
    }

    pub fn categories(&self) -> &[CategoryTally] {
        &self.categories
    }

    pub fn failed_categories(&self) -> &[String] {
        &self.failed_categories
    }

    pub fn total_diffs(&self) -> u64 {
        self.total_diffs
    }

    pub fn total_both_absent(&self) -> u64 {
        self.total_both_absent
    }

    /// Final bordered summary for the console
    pub fn banner(&self) -> Vec<String> {
        let rule = banner_rule();
        let mut lines = vec![rule.clone(), "INFO: Diff testing completed".to_string()];
        for tally in &self.categories {
            lines.push(format!("INFO: {}: {} diffs", tally.name, tally.diffs));
        }
        for name in &self.failed_categories {
            lines.push(format!("ERROR: {}: did not complete", name));
        }
        lines.push(format!(
            "WARN: {} scenarios with NULL responses",
            self.total_both_absent
        ));
        lines.push(format!("INFO: Total diffs: {}", self.total_diffs));
        lines.push(rule);
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::ComparisonOutcome;

    fn completed(name: &str, diffs: usize, passes: usize) -> CategoryRun {
        let mut run = CategoryRun::new(name);
        run.start().unwrap();
        for i in 0..diffs + passes {
            let changes = if i < diffs {
                vec![crate::diff::ChangeRecord::value_changed(
                    "root.name",
                    Some("a".into()),
                    Some("b".into()),
                )]
            } else {
                Vec::new()
            };
            run.record(ComparisonOutcome {
                scenario_description: format!("scenario {}", i),
                changes,
                failures: Vec::new(),
                both_absent: false,
            })
            .unwrap();
        }
        run.complete().unwrap();
        run
    }

    #[test]
    fn test_totals_accumulate() {
        let mut summary = RunSummary::new(RunId::new());
        summary.record(&completed("CodeValues", 0, 1)).unwrap();
        summary.record(&completed("CourtList by room code", 2, 3)).unwrap();

        assert_eq!(summary.total_diffs(), 2);
        assert_eq!(summary.categories().len(), 2);
        assert_eq!(summary.categories()[1].scenarios, 5);
    }

    #[test]
    fn test_incomplete_category_rejected() {
        let mut summary = RunSummary::new(RunId::new());
        let mut run = CategoryRun::new("ROP report");
        run.start().unwrap();

        let err = summary.record(&run).unwrap_err();
        assert_eq!(err.kind(), XcErrorKind::InvalidState);
        assert_eq!(summary.total_diffs(), 0);
    }

    #[test]
    fn test_banner_lists_categories_and_total() {
        let mut summary = RunSummary::new(RunId::new());
        summary.record(&completed("CodeValues", 1, 0)).unwrap();
        summary.record_failure("ROP report");

        let banner = summary.banner();
        assert_eq!(banner.first(), banner.last());
        assert!(banner.contains(&"INFO: CodeValues: 1 diffs".to_string()));
        assert!(banner.contains(&"ERROR: ROP report: did not complete".to_string()));
        assert!(banner.contains(&"INFO: Total diffs: 1".to_string()));
    }
}
