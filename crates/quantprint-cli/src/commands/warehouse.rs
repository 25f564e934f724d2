//! Warehouse command implementation.
//!
//! Documents the benchmark warehouse from `config/snowflake/schema.yaml`.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use quantprint_config::{ConfigDocument, WarehouseSchema};
use quantprint_warehouse::{SchemaCatalog, WarehouseBlueprint};

use crate::cli::OutputFormat;
use crate::commands::CommonArgs;
use crate::output::{print_header, print_json_document, print_output, print_success};

/// Arguments for the warehouse command.
#[derive(Args, Debug)]
pub struct WarehouseArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Serialize, Tabled)]
struct TableRow {
    #[tabled(rename = "Table")]
    table: String,
    #[tabled(rename = "Qualified Name")]
    qualified_name: String,
    #[tabled(rename = "Columns")]
    columns: usize,
}

/// Execute the warehouse command.
pub fn execute(args: WarehouseArgs, format: OutputFormat) -> Result<()> {
    let as_of = args.common.as_of()?;
    let layout = args.common.layout();

    let schema_path = layout.warehouse_schema();
    let schema = WarehouseSchema::load(&schema_path)
        .with_context(|| format!("Loading {}", schema_path.display()))?;
    let catalog = SchemaCatalog::new(schema);

    let blueprint = WarehouseBlueprint::build(&catalog, as_of);
    let path = blueprint.write_markdown(&layout.reports_dir("snowflake"))?;

    let rows: Vec<TableRow> = blueprint
        .tables
        .iter()
        .map(|t| TableRow {
            table: t.slug.clone(),
            qualified_name: catalog.fully_qualified_name(&t.slug),
            columns: t.columns.len(),
        })
        .collect();

    match format {
        OutputFormat::Table => {
            print_header("Warehouse Tables");
            print_output(&rows, format)?;
            print_header("Query Library");
            for query in &blueprint.queries {
                println!("  - {}", query.name);
            }
            println!();
            print_success(&format!("Blueprint written to {}", path.display()));
        }
        OutputFormat::Json => print_json_document(&blueprint)?,
        OutputFormat::Csv => print_output(&rows, format)?,
        OutputFormat::Minimal => println!("{}", path.display()),
    }

    Ok(())
}
