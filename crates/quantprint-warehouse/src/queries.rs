//! SQL query library and dashboard starters.
//!
//! Every query references tables through [`SchemaCatalog::fully_qualified_name`],
//! so the generated SQL follows the connection's database and schema.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::schema::SchemaCatalog;

/// A named, documented query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySpec {
    /// Display name.
    pub name: String,
    /// What the query is for.
    pub purpose: String,
    /// Snowflake-dialect SQL.
    pub sql: String,
    /// Table slugs the query reads.
    pub tables: Vec<String>,
}

impl QuerySpec {
    fn new(name: &str, purpose: &str, tables: &[&str], sql: String) -> Self {
        Self {
            name: name.to_string(),
            purpose: purpose.to_string(),
            sql,
            tables: tables.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Dashboard ideas listed at the end of the blueprint.
pub const DASHBOARD_IDEAS: [&str; 5] = [
    "Benchmark overview: 1M/3M/6M/1Y returns, drawdown sparkline, latest price vs. SMA.",
    "Composition: top 10 constituents, sector and country treemaps, weight drift vs. target.",
    "Quality & valuation: weighted P/E, P/B, dividend yield, revenue growth trends.",
    "Attribution: return contribution by sector, country, and factor proxies.",
    "Data health: feed freshness by benchmark, null/zero weight checks, extreme return monitors.",
];

/// Builds the seven-query library against `catalog`.
///
/// Tables the schema does not document still resolve (by slug) but are
/// reported with a warning.
#[must_use]
pub fn build_queries(catalog: &SchemaCatalog) -> Vec<QuerySpec> {
    let returns = catalog.fully_qualified_name("benchmark_returns");
    let returns_fx = catalog.fully_qualified_name("benchmark_returns_fx");
    let master = catalog.fully_qualified_name("benchmark_master");
    let constituents = catalog.fully_qualified_name("benchmark_constituents");
    let fundamentals = catalog.fully_qualified_name("constituent_fundamentals");

    let queries = vec![
        QuerySpec::new(
            "Benchmark coverage and freshness",
            "Check latest date per benchmark and ensure feed completeness.",
            &["benchmark_returns"],
            format!(
                r#"
SELECT
  benchmark_id,
  MAX(trade_date) AS latest_date,
  COUNT(*) AS rows_loaded
FROM {returns}
GROUP BY 1
ORDER BY latest_date DESC;
"#
            ),
        ),
        QuerySpec::new(
            "Daily performance with FX normalization",
            "Pull daily total return with currency conversion into a uniform base.",
            &["benchmark_returns", "benchmark_master"],
            format!(
                r#"
SELECT
  r.trade_date,
  r.benchmark_id,
  m.benchmark_name,
  r.total_return_local,
  r.fx_rate_to_usd,
  (r.total_return_local * COALESCE(r.fx_rate_to_usd, 1)) AS total_return_usd
FROM {returns} r
JOIN {master} m USING (benchmark_id)
WHERE r.trade_date BETWEEN DATEADD(month, -12, CURRENT_DATE()) AND CURRENT_DATE()
ORDER BY r.trade_date, r.benchmark_id;
"#
            ),
        ),
        QuerySpec::new(
            "Monthly performance and drawdowns",
            "Resample to month-end, compute rolling return, and drawdown path for dashboards.",
            &["benchmark_returns_fx"],
            format!(
                r#"
WITH monthlies AS (
  SELECT
    DATE_TRUNC('month', trade_date) AS month,
    benchmark_id,
    EXP(SUM(LN(1 + total_return_usd))) - 1 AS monthly_return
  FROM {returns_fx}
  GROUP BY 1, 2
),
nav_path AS (
  SELECT
    month,
    benchmark_id,
    SUM(monthly_return) OVER (PARTITION BY benchmark_id ORDER BY month) AS cum_return
  FROM monthlies
)
SELECT
  *,
  cum_return - MAX(cum_return) OVER (PARTITION BY benchmark_id ORDER BY month ROWS BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW) AS drawdown
FROM nav_path
ORDER BY month, benchmark_id;
"#
            ),
        ),
        QuerySpec::new(
            "Constituent weights with sector and country tilt",
            "Surface benchmark composition for attribution tiles.",
            &["benchmark_constituents", "benchmark_master"],
            format!(
                r#"
SELECT
  c.as_of_date,
  c.benchmark_id,
  m.benchmark_name,
  c.ticker,
  c.weight,
  c.sector,
  c.country
FROM {constituents} c
JOIN {master} m USING (benchmark_id)
WHERE c.as_of_date = (SELECT MAX(as_of_date) FROM {constituents})
ORDER BY c.benchmark_id, c.weight DESC;
"#
            ),
        ),
        QuerySpec::new(
            "Fundamental snapshot by benchmark",
            "Aggregate valuation and quality ratios using the latest constituent fundamentals.",
            &["constituent_fundamentals", "benchmark_constituents", "benchmark_master"],
            format!(
                r#"
WITH latest_fundamentals AS (
  SELECT
    f.ticker,
    f.period_end_date,
    f.pe_ratio,
    f.pb_ratio,
    f.dividend_yield,
    f.revenue_growth,
    ROW_NUMBER() OVER (PARTITION BY f.ticker ORDER BY f.period_end_date DESC) AS rn
  FROM {fundamentals} f
)
SELECT
  c.benchmark_id,
  m.benchmark_name,
  SUM(c.weight * lf.pe_ratio) AS weighted_pe,
  SUM(c.weight * lf.pb_ratio) AS weighted_pb,
  SUM(c.weight * lf.dividend_yield) AS weighted_dividend_yield,
  SUM(c.weight * lf.revenue_growth) AS weighted_revenue_growth
FROM {constituents} c
JOIN latest_fundamentals lf ON c.ticker = lf.ticker AND lf.rn = 1
JOIN {master} m USING (benchmark_id)
WHERE c.as_of_date = (SELECT MAX(as_of_date) FROM {constituents})
GROUP BY 1, 2
ORDER BY benchmark_id;
"#
            ),
        ),
        QuerySpec::new(
            "Attribution-ready joined fact table",
            "Produce a wide fact table combining returns, weights, and fundamentals for BI tools.",
            &[
                "benchmark_returns_fx",
                "benchmark_constituents",
                "constituent_fundamentals",
                "benchmark_master",
            ],
            format!(
                r#"
SELECT
  r.trade_date,
  r.benchmark_id,
  m.benchmark_name,
  c.ticker,
  c.weight,
  r.total_return_usd,
  f.pe_ratio,
  f.revenue_growth,
  f.sector,
  f.country
FROM {returns_fx} r
JOIN {constituents} c
  ON r.benchmark_id = c.benchmark_id
  AND r.trade_date BETWEEN c.as_of_date AND COALESCE(c.next_rebalance_date, r.trade_date)
LEFT JOIN {fundamentals} f ON c.ticker = f.ticker AND f.period_end_date = (
  SELECT MAX(period_end_date) FROM {fundamentals} f2 WHERE f2.ticker = f.ticker
)
JOIN {master} m USING (benchmark_id)
WHERE r.trade_date >= DATEADD(month, -6, CURRENT_DATE());
"#
            ),
        ),
        QuerySpec::new(
            "Data quality checks",
            "Detect gaps, nulls, or outlier returns before publishing dashboards.",
            &["benchmark_constituents", "benchmark_returns_fx", "constituent_fundamentals"],
            format!(
                r#"
SELECT
  'missing_constituent_weights' AS check_name,
  COUNT(*) AS issue_count
FROM {constituents}
WHERE weight IS NULL OR weight <= 0
UNION ALL
SELECT 'extreme_returns', COUNT(*)
FROM {returns_fx}
WHERE ABS(total_return_usd) > 0.3
UNION ALL
SELECT 'stale_fundamentals', COUNT(*)
FROM {fundamentals}
WHERE period_end_date < DATEADD(month, -18, CURRENT_DATE());
"#
            ),
        ),
    ];

    let undocumented = undocumented_tables(catalog, &queries);
    if !undocumented.is_empty() {
        warn!(tables = ?undocumented, "Query library references tables missing from the schema");
    }

    info!(queries = queries.len(), "Prepared warehouse queries for the blueprint");
    queries
}

/// Table slugs referenced by `queries` that the schema does not define,
/// in first-reference order.
#[must_use]
pub fn undocumented_tables(catalog: &SchemaCatalog, queries: &[QuerySpec]) -> Vec<String> {
    let mut missing: Vec<String> = Vec::new();
    for slug in queries.iter().flat_map(|q| q.tables.iter()) {
        if !catalog.has_table(slug) && !missing.contains(slug) {
            missing.push(slug.clone());
        }
    }
    missing
}

/// Dashboard starter ideas.
#[must_use]
pub fn dashboard_ideas() -> Vec<String> {
    let ideas: Vec<String> = DASHBOARD_IDEAS.iter().map(|i| i.to_string()).collect();
    info!(ideas = ideas.len(), "Enumerated dashboard ideas");
    ideas
}

#[cfg(test)]
mod tests {
    use super::*;
    use quantprint_config::{ConfigDocument, WarehouseSchema};

    fn catalog() -> SchemaCatalog {
        let yaml = r#"
connection: {database: markets, schema: bench}
tables:
  benchmark_returns: {name: BENCHMARK_RETURNS}
  benchmark_master: {name: BENCHMARK_MASTER}
  benchmark_constituents: {name: BENCHMARK_CONSTITUENTS}
"#;
        SchemaCatalog::new(WarehouseSchema::from_yaml(yaml).unwrap())
    }

    #[test]
    fn test_query_library_names() {
        let queries = build_queries(&catalog());
        let names: Vec<&str> = queries.iter().map(|q| q.name.as_str()).collect();

        assert_eq!(
            names,
            vec![
                "Benchmark coverage and freshness",
                "Daily performance with FX normalization",
                "Monthly performance and drawdowns",
                "Constituent weights with sector and country tilt",
                "Fundamental snapshot by benchmark",
                "Attribution-ready joined fact table",
                "Data quality checks",
            ]
        );
        assert!(queries.iter().all(|q| !q.purpose.is_empty()));
    }

    #[test]
    fn test_queries_use_qualified_names() {
        let queries = build_queries(&catalog());

        assert!(queries[0].sql.contains("FROM MARKETS.BENCH.BENCHMARK_RETURNS\n"));
        assert!(queries[1].sql.contains("JOIN MARKETS.BENCH.BENCHMARK_MASTER m USING (benchmark_id)"));
        assert!(queries[2].sql.contains("FROM MARKETS.BENCH.benchmark_returns_fx"));
        assert!(queries[3]
            .sql
            .contains("(SELECT MAX(as_of_date) FROM MARKETS.BENCH.BENCHMARK_CONSTITUENTS)"));
    }

    #[test]
    fn test_undocumented_tables() {
        let catalog = catalog();
        let queries = build_queries(&catalog);
        assert_eq!(
            undocumented_tables(&catalog, &queries),
            vec!["benchmark_returns_fx", "constituent_fundamentals"]
        );
    }

    #[test]
    fn test_dashboard_ideas() {
        let ideas = dashboard_ideas();
        assert_eq!(ideas.len(), 5);
        assert!(ideas[0].starts_with("Benchmark overview"));
        assert!(ideas[4].starts_with("Data health"));
    }
}
