pub mod chart;
pub mod dashboard;
pub mod summary;

use std::collections::BTreeSet;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::config::PrimaryLanguagePolicy;
use crate::error::{Error, Result};
use crate::models::{primary_language, ProfileScan, RepositoryAnalysis, TagSet};

pub use chart::{count_frequencies, render_bar_chart, ChartItem};
pub use dashboard::Dashboard;
pub use summary::render_summary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Dashboard,
    Summary,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dashboard" | "markdown" => Ok(OutputFormat::Dashboard),
            "summary" => Ok(OutputFormat::Summary),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Config(format!("unknown output format: {}", other))),
        }
    }
}

pub fn render(
    scan: &ProfileScan,
    format: OutputFormat,
    policy: PrimaryLanguagePolicy,
) -> Result<String> {
    match format {
        OutputFormat::Dashboard => Ok(Dashboard::new(scan).with_language_policy(policy).render()),
        OutputFormat::Summary => Ok(render_summary(scan, policy)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(scan)?),
    }
}

/// Primary language per repository, in listing order. Repositories with no
/// known language are skipped.
pub fn language_distribution(
    scan: &ProfileScan,
    policy: PrimaryLanguagePolicy,
) -> Vec<ChartItem> {
    count_frequencies(scan.repositories.iter().filter_map(|repo| {
        primary_language(repo, scan.languages.get(&repo.name), policy)
    }))
}

pub fn framework_distribution(scan: &ProfileScan) -> Vec<ChartItem> {
    count_frequencies(analyses_in_order(scan).flat_map(|a| a.frameworks.iter()))
}

pub fn tool_distribution(scan: &ProfileScan) -> Vec<ChartItem> {
    count_frequencies(analyses_in_order(scan).flat_map(|a| a.tools.iter()))
}

/// Every distinct tag across all analyses, sorted.
pub fn all_tags(scan: &ProfileScan) -> BTreeSet<&str> {
    scan.analyses.values().flat_map(|a| a.tags()).collect()
}

pub fn creation_range(scan: &ProfileScan) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let oldest = scan.repositories.iter().map(|r| r.created_at).min()?;
    let newest = scan.repositories.iter().map(|r| r.created_at).max()?;
    Some((oldest, newest))
}

/// Comma-joined tags in the order they were found, or `-` when there are none.
pub(crate) fn join_tags(tags: &TagSet) -> String {
    if tags.is_empty() {
        return "-".to_string();
    }
    tags.iter().collect::<Vec<_>>().join(", ")
}

pub(crate) fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn analyses_in_order(scan: &ProfileScan) -> impl Iterator<Item = &RepositoryAnalysis> {
    scan.repositories
        .iter()
        .filter_map(|repo| scan.analyses.get(&repo.name))
}
