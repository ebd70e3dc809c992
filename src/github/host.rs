use async_trait::async_trait;

use crate::error::Result;
use crate::github::content::FileContent;
use crate::models::{LanguageBreakdown, Repository};

/// Read-only view of a source-control host.
///
/// Listing and language lookups are strict and surface errors. Presence and
/// content checks fail soft: any failure reads as "absent".
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    async fn list_repositories(&self, owner: &str) -> Result<Vec<Repository>>;

    async fn get_languages(&self, owner: &str, repo: &str) -> Result<LanguageBreakdown>;

    async fn file_exists(&self, owner: &str, repo: &str, path: &str) -> bool;

    /// True only when `path` lists as a directory with at least one entry.
    async fn directory_has_entries(&self, owner: &str, repo: &str, path: &str) -> bool;

    async fn fetch_file(&self, owner: &str, repo: &str, path: &str) -> FileContent;
}
