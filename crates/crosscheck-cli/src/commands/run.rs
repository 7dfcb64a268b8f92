//! Run command
//!
//! Usage: crosscheck run [--config <FILE>] [--only <CATEGORY>]... [--fail-on-diff]

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use chrono::Utc;
use clap::Args;
use crosscheck_core::logging_facility::{self, Profile};
use crosscheck_core::types::RunContext;
use crosscheck_core::{DualInvoker, ReportRenderer, ScenarioRunner};
use crosscheck_engine::config::DEFAULT_CONFIG_FILE;
use crosscheck_engine::{Category, Credentials, CrosscheckConfig, HttpBackend, Suite};

/// Exit status when `--fail-on-diff` is set and differences were found
pub const EXIT_DIFFS_FOUND: i32 = 2;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Configuration file (default: ./crosscheck.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base URL of the left backend
    #[arg(long)]
    pub left_url: Option<String>,

    /// Base URL of the right backend
    #[arg(long)]
    pub right_url: Option<String>,

    /// Directory holding the scenario files
    #[arg(long)]
    pub scenario_dir: Option<PathBuf>,

    /// Directory the report files are written to
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Pause after each pair of backend calls, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Run only this category (name or file stem); repeatable
    #[arg(long = "only", value_name = "CATEGORY")]
    pub only: Vec<String>,

    /// Exit with status 2 when any difference is found
    #[arg(long)]
    pub fail_on_diff: bool,

    /// Diagnostic log format: development, production or test
    #[arg(long, default_value = "development")]
    pub log_profile: Profile,
}

/// Execute run command, returning the process exit status
pub fn execute(args: RunArgs) -> anyhow::Result<i32> {
    load_dotenv()?;

    let mut config = load_config(args.config.as_deref())?;
    apply_overrides(&mut config, &args);
    config.validate()?;
    let categories = select_categories(&args.only)?;

    logging_facility::init(args.log_profile);

    let suite = Suite::load(&categories, &config.run.scenario_dir, Utc::now())?;
    let runner = build_runner(&config, Credentials::from_env())?;
    let ctx = RunContext::new();
    tracing::info!(
        run_id = ctx.run_id.as_str(),
        left = %config.backends.left.base_url,
        right = %config.backends.right.base_url,
        scenario_count = suite.scenario_count(),
        "starting comparison run"
    );

    let console = || -> Box<dyn Write> { Box::new(std::io::stdout()) };
    let summary = suite.run(&runner, &ctx, &config.run.output_dir, &console)?;

    if args.fail_on_diff && summary.total_diffs() > 0 {
        Ok(EXIT_DIFFS_FOUND)
    } else {
        Ok(0)
    }
}

fn load_dotenv() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e).context("cannot read .env"),
    }
}

/// An explicit path must exist; the default file is optional
fn load_config(path: Option<&Path>) -> anyhow::Result<CrosscheckConfig> {
    match path {
        Some(path) => Ok(CrosscheckConfig::load(path)?),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                Ok(CrosscheckConfig::load(default)?)
            } else {
                Ok(CrosscheckConfig::default())
            }
        }
    }
}

fn apply_overrides(config: &mut CrosscheckConfig, args: &RunArgs) {
    if let Some(url) = &args.left_url {
        config.backends.left.base_url = url.clone();
    }
    if let Some(url) = &args.right_url {
        config.backends.right.base_url = url.clone();
    }
    if let Some(dir) = &args.scenario_dir {
        config.run.scenario_dir = dir.clone();
    }
    if let Some(dir) = &args.output_dir {
        config.run.output_dir = dir.clone();
    }
    if let Some(delay) = args.delay_ms {
        config.run.delay_ms = delay;
    }
}

/// Every category when `only` is empty, otherwise the named ones
fn select_categories(only: &[String]) -> anyhow::Result<Vec<Category>> {
    if only.is_empty() {
        return Ok(Category::ALL.to_vec());
    }
    let mut selected = Vec::with_capacity(only.len());
    for key in only {
        match Category::find(key) {
            Some(category) if !selected.contains(&category) => selected.push(category),
            Some(_) => {}
            None => bail!("unknown category '{}' (see `crosscheck list`)", key),
        }
    }
    Ok(selected)
}

fn build_runner(
    config: &CrosscheckConfig,
    credentials: Option<Credentials>,
) -> anyhow::Result<ScenarioRunner> {
    let left = HttpBackend::new(
        config.backends.left.clone(),
        &config.transport,
        credentials.clone(),
    )?;
    let right = HttpBackend::new(config.backends.right.clone(), &config.transport, credentials)?;

    let invoker = DualInvoker::new(Box::new(left), Box::new(right)).with_delay(config.run.delay());
    let renderer = ReportRenderer::new(&config.backends.left.label, &config.backends.right.label)
        .with_justify(config.report.justify);

    Ok(ScenarioRunner::new(invoker)
        .with_filter(config.filter)
        .with_renderer(renderer))
}
