//! Runs the syndicate optimizer over a JSON input file.
//!
//! ```text
//! syndicate-optimize --input quotations.json [--config settings.toml] [--json-logs]
//! ```
//!
//! The input holds the request and the quotations:
//!
//! ```text
//! {
//!   "request": { "target_amount": "100", "min_lenders": 1, "max_lenders": 2 },
//!   "quotations": [ { "id": "...", "lender_id": "a", ... } ]
//! }
//! ```
//!
//! The optimization report is printed to stdout as JSON.

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;
use syndicate_optimizer::application::services::SyndicateOptimizer;
use syndicate_optimizer::config::AppConfig;
use syndicate_optimizer::domain::entities::QuotationRecord;
use syndicate_optimizer::domain::value_objects::AllocationRequest;
use syndicate_optimizer::telemetry;

#[derive(Debug, Parser)]
#[command(name = "syndicate-optimize", version, about = "Select lenders for a syndicated loan")]
struct Cli {
    /// JSON file with `request` and `quotations`.
    #[arg(short, long)]
    input: PathBuf,

    /// Settings file (TOML, JSON or YAML).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Deserialize)]
struct OptimizationInput {
    request: AllocationRequest,
    #[serde(default)]
    quotations: Vec<QuotationRecord>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if cli.json_logs {
        config.telemetry.json = true;
    }
    telemetry::init_tracing(&config.telemetry).context("initializing tracing")?;

    let raw = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let input: OptimizationInput =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", cli.input.display()))?;

    let optimizer = SyndicateOptimizer::new(config.optimizer.evaluator());
    let report = optimizer
        .optimize_with_report(&input.quotations, &input.request)
        .context("optimizing allocation")?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
