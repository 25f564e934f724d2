//! Consumer command implementation.
//!
//! Builds the consumer portfolio blueprint from
//! `config/consumer/blueprint.yaml`.

use anyhow::{Context, Result};
use clap::Args;

use quantprint_config::{ConfigDocument, ConsumerBlueprint};
use quantprint_core::{currency, percent};
use quantprint_portfolio::{
    analyze, worst_case, ConsumerInputs, ConsumerReport, DEFAULT_PROJECTION_MONTHS,
};

use crate::cli::OutputFormat;
use crate::commands::CommonArgs;
use crate::error::CliError;
use crate::output::{print_header, print_json_document, print_output, print_success, KeyValue};

/// Arguments for the consumer command.
#[derive(Args, Debug)]
pub struct ConsumerArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Projection horizon in months
    #[arg(long, default_value_t = DEFAULT_PROJECTION_MONTHS)]
    pub months: u32,
}

/// Execute the consumer command.
pub fn execute(args: ConsumerArgs, format: OutputFormat) -> Result<()> {
    if args.months == 0 {
        return Err(CliError::InvalidMonths(args.months).into());
    }
    let as_of = args.common.as_of()?;
    let layout = args.common.layout();

    let blueprint_path = layout.consumer_blueprint();
    let blueprint = ConsumerBlueprint::load(&blueprint_path)
        .with_context(|| format!("Loading {}", blueprint_path.display()))?;

    let inputs = ConsumerInputs::from_blueprint(&blueprint);
    let analysis = analyze(&inputs, args.months)?;
    let report = ConsumerReport::assemble(as_of, &analysis);
    let path = report.write_markdown(&layout.reports_dir("consumer"))?;

    match format {
        OutputFormat::Table => {
            print_header("Consumer Quant Blueprint");
            print_output(&summary_rows(&report), format)?;
            if !report.actions.is_empty() {
                print_header("Action Plan");
                for action in &report.actions {
                    println!("  - {}", action);
                }
            }
            println!();
            print_success(&format!("Blueprint written to {}", path.display()));
        }
        OutputFormat::Json => print_json_document(&report)?,
        OutputFormat::Csv => print_output(&summary_rows(&report), format)?,
        OutputFormat::Minimal => println!("{}", path.display()),
    }

    Ok(())
}

fn summary_rows(report: &ConsumerReport) -> Vec<KeyValue> {
    let mut rows = vec![
        KeyValue::new("As Of", report.as_of.to_string()),
        KeyValue::new("Total Value", currency(report.portfolio.total_value)),
        KeyValue::new(
            "Herfindahl Index",
            format!("{:.3}", report.analytics.herfindahl_index),
        ),
    ];
    for (asset_class, weight) in &report.portfolio.weights {
        rows.push(KeyValue::new(format!("Weight: {}", asset_class), percent(*weight, 1)));
    }
    for outcome in &report.analytics.stress_tests {
        rows.push(KeyValue::new(
            format!("Stress: {}", outcome.name),
            format!("{} ({})", currency(outcome.pnl), percent(outcome.pnl_pct, 1)),
        ));
    }
    if let Some(worst) = worst_case(&report.analytics.stress_tests).filter(|o| o.is_loss()) {
        rows.push(KeyValue::new("Worst Scenario", worst.name.clone()));
    }
    if let Some(last) = report.analytics.projection.last() {
        rows.push(KeyValue::new(
            format!("Projected Value (month {})", last.month),
            currency(last.projected_value),
        ));
    }
    rows.push(KeyValue::new("Actions", report.actions.len().to_string()));
    rows
}
