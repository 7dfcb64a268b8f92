//! The ordered run over every selected category.

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use crosscheck_core::errors::{io_error, Result};
use crosscheck_core::types::RunContext;
use crosscheck_core::{log_op_end, log_op_error, log_op_start};
use crosscheck_core::{ReportSink, RunSummary, ScenarioRunner};

use crate::catalog::Category;
use crate::scenarios::{self, ScenarioSet};

/// Builds a fresh console writer for each category sink and for the run
/// banners.
pub type ConsoleFactory<'a> = &'a dyn Fn() -> Box<dyn Write>;

/// Loaded scenarios for every selected category, in catalog order.
#[derive(Debug, Clone)]
pub struct Suite {
    entries: Vec<(Category, ScenarioSet)>,
}

impl Suite {
    /// Load every category's scenarios before anything is sent.
    ///
    /// The first unreadable file or malformed row aborts the load.
    pub fn load(categories: &[Category], scenario_dir: &Path, run_start: DateTime<Utc>) -> Result<Self> {
        let mut entries = Vec::with_capacity(categories.len());
        for category in Category::ALL.iter().filter(|c| categories.contains(c)) {
            let set = scenarios::load(*category, scenario_dir, run_start)
                .map_err(|e| e.with_category(category.name()))?;
            tracing::debug!(
                category = category.name(),
                scenario_count = set.len(),
                "scenarios loaded"
            );
            entries.push((*category, set));
        }
        Ok(Self { entries })
    }

    /// Assemble a suite from scenario sets already built
    pub fn from_sets(entries: Vec<(Category, ScenarioSet)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(Category, ScenarioSet)] {
        &self.entries
    }

    pub fn scenario_count(&self) -> usize {
        self.entries.iter().map(|(_, set)| set.len()).sum()
    }

    /// Run every category in order and return the totals.
    ///
    /// A category that cannot finish (its report file cannot be opened or
    /// written) is logged, listed as failed, and the run moves on. Only a
    /// failure to write the run banners themselves is returned.
    pub fn run(
        &self,
        runner: &ScenarioRunner,
        ctx: &RunContext,
        output_dir: &Path,
        console: ConsoleFactory<'_>,
    ) -> Result<RunSummary> {
        let start = Instant::now();
        log_op_start!(
            "run_suite",
            run_id = ctx.run_id.as_str(),
            category_count = self.entries.len(),
            scenario_count = self.scenario_count()
        );

        let mut out = console();
        writeln!(out, "INFO: Diff testing started").map_err(|e| io_error("run_suite", e))?;

        let mut summary = RunSummary::new(ctx.run_id.clone());
        for (category, set) in &self.entries {
            let category_ctx = ctx.for_category(category.name());
            let outcome = ReportSink::open_file_with_console(
                &output_dir.join(category.report_file()),
                console(),
            )
            .and_then(|sink| set.run(runner, sink, &category_ctx))
            .and_then(|run| summary.record(&run));

            if let Err(err) = outcome {
                log_op_error!(
                    "run_suite",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    category = category.name()
                );
                writeln!(out, "ERROR: {}: {}", category.name(), err)
                    .map_err(|e| io_error("run_suite", e))?;
                summary.record_failure(category.name());
            }
        }

        for line in summary.banner() {
            writeln!(out, "{}", line).map_err(|e| io_error("run_suite", e))?;
        }
        out.flush().map_err(|e| io_error("run_suite", e))?;

        log_op_end!(
            "run_suite",
            duration_ms = start.elapsed().as_millis() as u64,
            run_id = ctx.run_id.as_str(),
            diff_count = summary.total_diffs(),
            failed_categories = summary.failed_categories().len()
        );
        Ok(summary)
    }
}
