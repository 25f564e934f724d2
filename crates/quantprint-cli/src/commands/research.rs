//! Research pipeline commands: daily, weekly and monthly.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use quantprint_core::percent;
use quantprint_research::{
    Cadence, GitHubIssueClient, PipelineOutcome, ResearchPipeline, DEFAULT_TOKEN_ENV,
};

use crate::cli::OutputFormat;
use crate::commands::CommonArgs;
use crate::output::{print_header, print_json_document, print_output, print_success, print_warning};

/// Arguments for the weekly and monthly pipelines.
#[derive(Args, Debug)]
pub struct PipelineArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the daily pipeline.
#[derive(Args, Debug)]
pub struct DailyArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// GitHub repository for data-quality issues ("owner/name")
    #[arg(long)]
    pub github_repo: Option<String>,

    /// Environment variable holding the GitHub token
    #[arg(long, default_value = DEFAULT_TOKEN_ENV)]
    pub token_env: String,
}

#[derive(Debug, Serialize, Tabled)]
struct CoverageRow {
    #[tabled(rename = "Asset Class")]
    asset_class: String,
    #[tabled(rename = "Expected")]
    expected: usize,
    #[tabled(rename = "Actual")]
    actual: usize,
    #[tabled(rename = "Coverage")]
    coverage: String,
}

/// Execute the daily pipeline.
pub fn execute_daily(args: DailyArgs, format: OutputFormat) -> Result<()> {
    let as_of = args.common.as_of()?;
    let tracker = GitHubIssueClient::from_env(
        args.github_repo.unwrap_or_default(),
        &args.token_env,
    )?;
    let pipeline = ResearchPipeline::from_layout(args.common.layout())?.with_issue_tracker(tracker);
    let outcome = pipeline.run(Cadence::Daily, as_of)?;
    report(&outcome, pipeline.min_coverage(), format)
}

/// Execute the weekly or monthly pipeline.
pub fn execute(cadence: Cadence, args: PipelineArgs, format: OutputFormat) -> Result<()> {
    let as_of = args.common.as_of()?;
    let pipeline = ResearchPipeline::from_layout(args.common.layout())?;
    let outcome = pipeline.run(cadence, as_of)?;
    report(&outcome, pipeline.min_coverage(), format)
}

fn report(outcome: &PipelineOutcome, min_coverage: f64, format: OutputFormat) -> Result<()> {
    let rows: Vec<CoverageRow> = outcome
        .diagnostics
        .iter()
        .map(|(asset_class, stats)| CoverageRow {
            asset_class: asset_class.to_string(),
            expected: stats.expected,
            actual: stats.actual,
            coverage: percent(stats.coverage, 1),
        })
        .collect();

    match format {
        OutputFormat::Table => {
            print_header(&format!("{} – {}", outcome.cadence.summary_title(), outcome.as_of));
            print_output(&rows, format)?;
            for (asset_class, stats) in outcome.diagnostics.iter() {
                if stats.is_below(min_coverage) {
                    print_warning(&format!(
                        "{} coverage {} is below {}",
                        asset_class,
                        percent(stats.coverage, 1).red(),
                        percent(min_coverage, 0)
                    ));
                }
            }
            for issue in &outcome.issues {
                if let Some(number) = issue.number {
                    print_success(&format!("Filed issue #{} for {}", number, issue.asset_class));
                }
            }
            for feed in &outcome.feeds {
                println!("  feed: {}", feed.display());
            }
            println!();
            print_success(&format!("Summary written to {}", outcome.summary_path.display()));
        }
        OutputFormat::Json => print_json_document(outcome)?,
        OutputFormat::Csv => print_output(&rows, format)?,
        OutputFormat::Minimal => println!("{}", outcome.summary_path.display()),
    }

    Ok(())
}
