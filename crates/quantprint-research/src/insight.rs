//! Markdown pipeline summaries.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use quantprint_config::OrderedMap;
use quantprint_core::{capitalize, percent, MarkdownDoc};
use tracing::info;

use crate::cadence::Cadence;
use crate::diagnostics::CoverageStats;
use crate::{ResearchError, ResearchResult};

const FACTOR_TIMING_HIGHLIGHTS: &str = "Summary of factor-timing model outputs for key asset classes and factors. This section can be expanded with tables and specific signals.";
const FACTOR_TIMING_DISABLED: &str =
    "Factor timing models are disabled in the current configuration.";
const PRELIMINARY_NOTE: &str = "All metrics are preliminary and subject to data vendor revisions.";

/// Renders the summary document. The text ends with a newline.
#[must_use]
pub fn render_summary(
    cadence: Cadence,
    as_of: NaiveDate,
    diagnostics: &OrderedMap<CoverageStats>,
    factor_timing_enabled: bool,
) -> String {
    let mut doc = MarkdownDoc::new();
    doc.title(format!("{} – {}", cadence.summary_title(), as_of))
        .blank()
        .heading(2, "Data Coverage")
        .blank();

    for (asset_class, stats) in diagnostics.iter() {
        doc.bullet(format!(
            "**{}**: coverage {} ({} of {} benchmarks)",
            capitalize(asset_class),
            percent(stats.coverage, 1),
            stats.actual,
            stats.expected
        ));
    }
    doc.blank();

    if factor_timing_enabled {
        doc.heading(2, "Factor Timing Highlights")
            .blank()
            .line(FACTOR_TIMING_HIGHLIGHTS);
    } else {
        doc.heading(2, "Factor Timing")
            .blank()
            .line(FACTOR_TIMING_DISABLED);
    }

    doc.blank().heading(2, "Notes").blank().bullet(PRELIMINARY_NOTE);

    let mut text = doc.render();
    text.push('\n');
    text
}

/// Summary file name for a date.
#[must_use]
pub fn summary_file_name(as_of: NaiveDate) -> String {
    format!("summary_{}.md", as_of)
}

/// Writes the summary into `output_dir`, creating it if needed.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn write_summary(
    output_dir: &Path,
    cadence: Cadence,
    as_of: NaiveDate,
    diagnostics: &OrderedMap<CoverageStats>,
    factor_timing_enabled: bool,
) -> ResearchResult<PathBuf> {
    info!(%cadence, %as_of, "Creating summary");
    std::fs::create_dir_all(output_dir).map_err(|e| ResearchError::output_write(output_dir, e))?;

    let path = output_dir.join(summary_file_name(as_of));
    let text = render_summary(cadence, as_of, diagnostics, factor_timing_enabled);
    std::fs::write(&path, text).map_err(|e| ResearchError::output_write(&path, e))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 28).unwrap()
    }

    fn diagnostics() -> OrderedMap<CoverageStats> {
        [
            ("equity", CoverageStats::new(3, 2)),
            ("RATES", CoverageStats::new(0, 0)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_daily_summary_disabled_models() {
        let text = render_summary(Cadence::Daily, as_of(), &diagnostics(), false);
        assert_eq!(
            text,
            "# Daily Cross-Asset Summary – 2024-06-28\n\n\
             ## Data Coverage\n\n\
             - **Equity**: coverage 66.7% (2 of 3 benchmarks)\n\
             - **Rates**: coverage 100.0% (0 of 0 benchmarks)\n\n\
             ## Factor Timing\n\n\
             Factor timing models are disabled in the current configuration.\n\n\
             ## Notes\n\n\
             - All metrics are preliminary and subject to data vendor revisions.\n"
        );
    }

    #[test]
    fn test_highlights_when_enabled() {
        let text = render_summary(Cadence::Monthly, as_of(), &OrderedMap::new(), true);
        assert!(text.starts_with("# Monthly SAA Review – 2024-06-28\n\n## Data Coverage\n\n\n## Factor Timing Highlights\n\n"));
        assert!(text.contains(FACTOR_TIMING_HIGHLIGHTS));
    }

    #[test]
    fn test_write_summary() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("reports").join("weekly");

        let path = write_summary(&out, Cadence::Weekly, as_of(), &diagnostics(), false).unwrap();

        assert_eq!(path, out.join("summary_2024-06-28.md"));
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.starts_with("# Weekly Factor Deep-Dive – 2024-06-28"));
    }
}
