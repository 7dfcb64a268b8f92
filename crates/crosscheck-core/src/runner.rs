//! Scenario runner and per-category state.
//!
//! One [`CategoryRun`] moves `Idle → Running → Completed`. While running,
//! each scenario goes through invoke, diff, filter and render in
//! declaration order. Invocation failures never abort the category; they
//! become part of the scenario's [`ComparisonOutcome`].

use std::time::Instant;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::diff::{ChangeRecord, Comparable, DiffFilter, StructuralDiffer};
use crate::errors::{InvocationFailure, Result, XcError, XcErrorKind};
use crate::invoke::DualInvoker;
use crate::report::{banner_rule, ReportRenderer, ReportSink};
use crate::types::RunContext;
use crate::{log_op_end, log_op_error, log_op_start};

/// One test case: an immutable request plus the line that describes it.
#[derive(Debug, Clone)]
pub struct Scenario<Q> {
    pub description: String,
    pub request: Q,
}

impl<Q> Scenario<Q> {
    pub fn new(description: impl Into<String>, request: Q) -> Self {
        Self {
            description: description.into(),
            request,
        }
    }
}

/// A named category with its ordered scenarios.
#[derive(Debug, Clone)]
pub struct CategoryPlan<Q> {
    pub name: String,
    /// Operation name passed to each backend
    pub operation: String,
    pub scenarios: Vec<Scenario<Q>>,
}

impl<Q> CategoryPlan<Q> {
    pub fn new(
        name: impl Into<String>,
        operation: impl Into<String>,
        scenarios: Vec<Scenario<Q>>,
    ) -> Self {
        Self {
            name: name.into(),
            operation: operation.into(),
            scenarios,
        }
    }
}

/// Classification of one compared scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No material changes and no failures
    Pass,
    /// Material changes or a one-sided failure
    Different,
    /// Neither backend produced a usable response
    BothAbsent,
}

/// Result of comparing one scenario.
#[derive(Debug, Clone)]
pub struct ComparisonOutcome {
    pub scenario_description: String,
    /// Material changes only, in traversal order
    pub changes: Vec<ChangeRecord>,
    pub failures: Vec<InvocationFailure>,
    pub both_absent: bool,
}

impl ComparisonOutcome {
    pub fn verdict(&self) -> Verdict {
        if self.both_absent {
            Verdict::BothAbsent
        } else if !self.failures.is_empty() || !self.changes.is_empty() {
            Verdict::Different
        } else {
            Verdict::Pass
        }
    }

    pub fn is_material(&self) -> bool {
        self.verdict() == Verdict::Different
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryState {
    Idle,
    Running,
    Completed,
}

/// Per-category counters and outcomes.
#[derive(Debug, Clone)]
pub struct CategoryRun {
    name: String,
    state: CategoryState,
    diff_count: u64,
    passes: u64,
    both_absent: u64,
    outcomes: Vec<ComparisonOutcome>,
}

impl CategoryRun {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: CategoryState::Idle,
            diff_count: 0,
            passes: 0,
            both_absent: 0,
            outcomes: Vec::new(),
        }
    }

    /// `Idle → Running`; counters start from zero
    pub fn start(&mut self) -> Result<()> {
        self.expect_state(CategoryState::Idle, "start")?;
        self.diff_count = 0;
        self.passes = 0;
        self.both_absent = 0;
        self.outcomes.clear();
        self.state = CategoryState::Running;
        Ok(())
    }

    /// Fold one outcome into the counters
    pub fn record(&mut self, outcome: ComparisonOutcome) -> Result<Verdict> {
        self.expect_state(CategoryState::Running, "record")?;
        let verdict = outcome.verdict();
        match verdict {
            Verdict::Pass => self.passes += 1,
            Verdict::Different => self.diff_count += 1,
            Verdict::BothAbsent => self.both_absent += 1,
        }
        self.outcomes.push(outcome);
        Ok(verdict)
    }

    /// `Running → Completed`
    pub fn complete(&mut self) -> Result<()> {
        self.expect_state(CategoryState::Running, "complete")?;
        self.state = CategoryState::Completed;
        Ok(())
    }

    fn expect_state(&self, expected: CategoryState, transition: &str) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(XcError::new(XcErrorKind::InvalidState)
                .with_op(transition.to_string())
                .with_category(self.name.clone())
                .with_message(format!(
                    "expected state {:?}, found {:?}",
                    expected, self.state
                )))
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> CategoryState {
        self.state
    }

    pub fn diff_count(&self) -> u64 {
        self.diff_count
    }

    pub fn passes(&self) -> u64 {
        self.passes
    }

    pub fn both_absent(&self) -> u64 {
        self.both_absent
    }

    pub fn outcomes(&self) -> &[ComparisonOutcome] {
        &self.outcomes
    }
}

/// Runs categories through invoke, diff, filter and render.
pub struct ScenarioRunner {
    invoker: DualInvoker,
    filter: DiffFilter,
    renderer: ReportRenderer,
}

impl ScenarioRunner {
    /// Report headers are taken from the invoker's backend labels
    pub fn new(invoker: DualInvoker) -> Self {
        let renderer = ReportRenderer::new(invoker.left_label(), invoker.right_label());
        Self {
            invoker,
            filter: DiffFilter::default(),
            renderer,
        }
    }

    pub fn with_filter(mut self, filter: DiffFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_renderer(mut self, renderer: ReportRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn filter(&self) -> &DiffFilter {
        &self.filter
    }

    /// Invoke, diff and filter one scenario
    pub fn compare_scenario<Q, R>(&self, operation: &str, scenario: &Scenario<Q>) -> ComparisonOutcome
    where
        Q: Serialize,
        R: DeserializeOwned + Comparable,
    {
        let response = self.invoker.invoke::<Q, R>(operation, &scenario.request);
        let both_absent = response.both_absent();
        let raw = StructuralDiffer::new(short_type_name::<R>())
            .compare_responses(response.left.as_ref(), response.right.as_ref());
        let changes = self.filter.apply(raw);

        ComparisonOutcome {
            scenario_description: scenario.description.clone(),
            changes,
            failures: response.failures,
            both_absent,
        }
    }

    /// Run every scenario of `plan` in order and close `sink` at the end.
    ///
    /// Only sink write failures end the category early; the sink is still
    /// released in that case.
    pub fn run_category<Q, R>(
        &self,
        plan: &CategoryPlan<Q>,
        mut sink: ReportSink,
        ctx: &RunContext,
    ) -> Result<CategoryRun>
    where
        Q: Serialize,
        R: DeserializeOwned + Comparable,
    {
        let start = Instant::now();
        log_op_start!(
            "run_category",
            run_id = ctx.run_id.as_str(),
            category = plan.name.as_str(),
            operation = plan.operation.as_str(),
            scenario_count = plan.scenarios.len()
        );

        let mut run = CategoryRun::new(plan.name.clone());
        let result = run
            .start()
            .and_then(|_| self.run_scenarios::<Q, R>(plan, &mut run, &mut sink, ctx))
            .and_then(|_| run.complete())
            .and_then(|_| write_banner(&mut sink, &plan.name, run.diff_count()));
        let closed = sink.close();
        let result = result.and(closed).map_err(|e| e.with_category(plan.name.clone()));

        let elapsed = start.elapsed().as_millis() as u64;
        match result {
            Ok(()) => {
                log_op_end!(
                    "run_category",
                    duration_ms = elapsed,
                    run_id = ctx.run_id.as_str(),
                    category = plan.name.as_str(),
                    diff_count = run.diff_count(),
                    both_absent = run.both_absent()
                );
                Ok(run)
            }
            Err(err) => {
                log_op_error!(
                    "run_category",
                    err.clone(),
                    duration_ms = elapsed,
                    run_id = ctx.run_id.as_str(),
                    category = plan.name.as_str()
                );
                Err(err)
            }
        }
    }

    fn run_scenarios<Q, R>(
        &self,
        plan: &CategoryPlan<Q>,
        run: &mut CategoryRun,
        sink: &mut ReportSink,
        ctx: &RunContext,
    ) -> Result<()>
    where
        Q: Serialize,
        R: DeserializeOwned + Comparable,
    {
        for scenario in &plan.scenarios {
            tracing::info!(
                run_id = ctx.run_id.as_str(),
                category = plan.name.as_str(),
                scenario = scenario.description.as_str(),
                "comparing scenario"
            );
            sink.console("")?;
            sink.console(&format!("INFO: {}", scenario.description))?;

            let outcome = self.compare_scenario::<Q, R>(&plan.operation, scenario);
            self.report_outcome(&plan.name, &outcome, sink)?;
            run.record(outcome)?;
        }
        Ok(())
    }

    fn report_outcome(
        &self,
        category: &str,
        outcome: &ComparisonOutcome,
        sink: &mut ReportSink,
    ) -> Result<()> {
        let verdict = outcome.verdict();
        if verdict == Verdict::Different {
            sink.file("")?;
            sink.file(&format!("INFO: {}", outcome.scenario_description))?;
        }
        for failure in &outcome.failures {
            sink.both(&format!("ERROR: Failed to send request... {}", failure))?;
        }

        match verdict {
            Verdict::BothAbsent => {
                tracing::warn!(category = category, "both backends returned no response");
                sink.console(&format!("WARN: {}: NULL responses", category))
            }
            Verdict::Pass => sink.console(&format!("INFO: {}: No Diff Detected", category)),
            Verdict::Different => {
                tracing::debug!(
                    category = category,
                    change_count = outcome.changes.len(),
                    failure_count = outcome.failures.len(),
                    "material difference"
                );
                match self.renderer.render(&outcome.changes) {
                    Some(table) => {
                        for line in &table.lines {
                            sink.both(line)?;
                        }
                        Ok(())
                    }
                    None => Ok(()),
                }
            }
        }
    }
}

fn write_banner(sink: &mut ReportSink, category: &str, diff_count: u64) -> Result<()> {
    let rule = banner_rule();
    sink.both(&rule)?;
    sink.both(&format!(
        "INFO: {} Completed there are {} diffs",
        category, diff_count
    ))?;
    sink.both(&rule)
}

/// Last path segment of a type name, used as the diff root label
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
