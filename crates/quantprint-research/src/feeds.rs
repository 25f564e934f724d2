//! Dashboard JSON feeds.

use std::path::PathBuf;

use quantprint_config::{DashboardSpec, OrderedMap, RepoLayout};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::diagnostics::CoverageStats;
use crate::models::ModelResults;
use crate::{ResearchError, ResearchResult};

/// `meta` block of a feed.
#[derive(Debug, Clone, Serialize)]
pub struct FeedMeta<'a> {
    /// Output description from configuration.
    pub description: &'a str,
}

/// `data` block of a feed. Disabled models serialize as `{}`.
#[derive(Debug, Clone, Serialize)]
pub struct FeedData<'a> {
    /// Coverage per asset class.
    pub diagnostics: &'a OrderedMap<CoverageStats>,
    /// Factor-timing output.
    pub factor_timing: Value,
    /// SAA output.
    pub saa: Value,
}

/// A dashboard feed document.
#[derive(Debug, Clone, Serialize)]
pub struct FeedPayload<'a> {
    /// Metadata.
    pub meta: FeedMeta<'a>,
    /// Payload.
    pub data: FeedData<'a>,
}

fn section<T: Serialize>(value: Option<&T>) -> ResearchResult<Value> {
    match value {
        Some(v) => serde_json::to_value(v)
            .map_err(|e| ResearchError::output_write("dashboard feed", e)),
        None => Ok(json!({})),
    }
}

/// Writes every output of a dashboard section.
///
/// Output paths are resolved against `layout`; parent directories are
/// created as needed. Returns the written paths in configuration order.
///
/// # Errors
///
/// Returns an error if a feed cannot be serialized or written.
pub fn write_dashboard_feeds(
    spec: &DashboardSpec,
    layout: &RepoLayout,
    diagnostics: &OrderedMap<CoverageStats>,
    models: &ModelResults,
) -> ResearchResult<Vec<PathBuf>> {
    let factor_timing = section(models.factor_timing.as_ref())?;
    let saa = section(models.saa.as_ref())?;

    let mut written = Vec::with_capacity(spec.outputs.len());
    for output in &spec.outputs {
        let path = layout.resolve(&output.file);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ResearchError::output_write(parent, e))?;
        }

        info!(path = %path.display(), "Writing dashboard feed");
        let payload = FeedPayload {
            meta: FeedMeta {
                description: &output.description,
            },
            data: FeedData {
                diagnostics,
                factor_timing: factor_timing.clone(),
                saa: saa.clone(),
            },
        };
        let body = serde_json::to_string(&payload)
            .map_err(|e| ResearchError::output_write(&path, e))?;
        std::fs::write(&path, body).map_err(|e| ResearchError::output_write(&path, e))?;
        written.push(path);
    }
    Ok(written)
}
