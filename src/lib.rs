pub mod config;
pub mod error;
pub mod models;
pub mod github;
pub mod taxonomy;
pub mod analysis;
pub mod report;

pub use config::{Config, PipelineConfig, PrimaryLanguagePolicy};
pub use error::{Error, Result};
pub use github::{FileContent, GitHubClient, RepositoryHost};
pub use taxonomy::TaggingEngine;
pub use analysis::{RepoAnalyzer, ScanPipeline};
pub use report::{Dashboard, OutputFormat};
