use std::sync::Arc;

use chrono::Utc;
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;

use crate::analysis::analyzer::RepoAnalyzer;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::github::RepositoryHost;
use crate::models::{LanguageBreakdown, ProfileScan, Repository, RepositoryAnalysis};
use crate::taxonomy::TaggingEngine;

pub struct ScanPipeline {
    host: Arc<dyn RepositoryHost>,
    analyzer: RepoAnalyzer,
    config: PipelineConfig,
}

impl ScanPipeline {
    pub fn new(
        host: impl RepositoryHost + 'static,
        tagger: TaggingEngine,
        config: PipelineConfig,
    ) -> Self {
        let host: Arc<dyn RepositoryHost> = Arc::new(host);
        Self {
            analyzer: RepoAnalyzer::new(host.clone(), Arc::new(tagger)),
            host,
            config,
        }
    }

    /// Lists the account's repositories and collects languages and tags for
    /// each. A failed listing aborts the scan; anything that goes wrong for a
    /// single repository only thins out that repository's facts.
    pub async fn scan(&self, username: &str) -> Result<ProfileScan> {
        tracing::info!("Fetching repositories for {}", username);
        let repos = self.host.list_repositories(username).await?;

        let repos: Vec<_> = repos
            .into_iter()
            .filter(|r| self.config.include_forks || !r.fork)
            .collect();

        tracing::info!("Found {} repositories to analyze", repos.len());

        let results = self.collect_all(&repos).await;

        let mut scan = ProfileScan::new(username);
        for (repo, languages, analysis) in results {
            if let Some(languages) = languages {
                scan.languages.insert(repo.clone(), languages);
            }
            scan.analyses.insert(repo, analysis);
        }
        scan.repositories = repos;
        scan.scanned_at = Utc::now();

        tracing::info!("Analysis complete for {} repositories", scan.analyses.len());
        Ok(scan)
    }

    async fn collect_all(
        &self,
        repos: &[Repository],
    ) -> Vec<(String, Option<LanguageBreakdown>, RepositoryAnalysis)> {
        let semaphore = Arc::new(Semaphore::new(self.config.concurrency_limit.max(1)));
        let pb = self.progress_bar(repos.len() as u64);

        let futures = repos.iter().map(|repo| {
            let sem = semaphore.clone();
            let host = self.host.clone();
            let analyzer = self.analyzer.clone();
            let owner = repo.owner.login.clone();
            let name = repo.name.clone();
            let pb = pb.clone();

            async move {
                let _permit = sem.acquire().await.ok();

                let (languages, analysis) = tokio::join!(
                    host.get_languages(&owner, &name),
                    analyzer.analyze(&owner, &name),
                );

                let languages = match languages {
                    Ok(languages) => Some(languages),
                    Err(e) => {
                        tracing::warn!("Failed to fetch languages for {}/{}: {}", owner, name, e);
                        None
                    }
                };

                pb.inc(1);
                (name, languages, analysis)
            }
        });

        let results = join_all(futures).await;
        pb.finish_and_clear();
        results
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} repos")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }
}
