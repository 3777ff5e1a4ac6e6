// File: crates/demo/src/manifest.rs
// Summary: JSON manifest of rendered charts (paths, file URIs, monthly totals) for downstream report tooling.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use statement_chart_core::{MonthCharts, MonthKey, MonthlySummary};
use url::Url;

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Manifest {
    pub backend: String,
    pub months: BTreeMap<MonthKey, ManifestEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ManifestEntry {
    pub proportion: PathBuf,
    pub proportion_uri: String,
    pub daily: PathBuf,
    pub daily_uri: String,
    pub summary: MonthlySummary,
}

impl Manifest {
    /// Charts must already exist on disk; their paths are canonicalized for the URIs.
    pub fn build(backend: &str, charts: &BTreeMap<MonthKey, MonthCharts>) -> Result<Self> {
        let mut months = BTreeMap::new();
        for (month, c) in charts {
            months.insert(
                *month,
                ManifestEntry {
                    proportion: c.proportion.clone(),
                    proportion_uri: file_uri(&c.proportion)?,
                    daily: c.daily.clone(),
                    daily_uri: file_uri(&c.daily)?,
                    summary: c.summary,
                },
            );
        }
        Ok(Self { backend: backend.to_string(), months })
    }

    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(MANIFEST_FILE);
        let json = serde_json::to_vec_pretty(self)?;
        std::fs::write(&path, json).with_context(|| format!("failed to write '{}'", path.display()))?;
        Ok(path)
    }
}

pub fn file_uri(path: &Path) -> Result<String> {
    let abs = std::fs::canonicalize(path).with_context(|| format!("chart missing: '{}'", path.display()))?;
    Url::from_file_path(&abs)
        .map(String::from)
        .map_err(|()| anyhow!("cannot express '{}' as a file URI", abs.display()))
}
