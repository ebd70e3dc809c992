use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::analysis::RepositoryAnalysis;
use super::repository::{LanguageBreakdown, Repository};

/// Everything collected for one account in a single run, keyed by repository name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileScan {
    pub username: String,
    pub repositories: Vec<Repository>,
    pub languages: HashMap<String, LanguageBreakdown>,
    pub analyses: HashMap<String, RepositoryAnalysis>,
    pub scanned_at: DateTime<Utc>,
}

impl ProfileScan {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            repositories: Vec::new(),
            languages: HashMap::new(),
            analyses: HashMap::new(),
            scanned_at: Utc::now(),
        }
    }

    pub fn total_stars(&self) -> u64 {
        self.repositories
            .iter()
            .map(|r| r.stargazers_count as u64)
            .sum()
    }
}
