use std::collections::HashMap;
use std::sync::Arc;

use crate::github::RepositoryHost;
use crate::models::analysis::{PackageManifest, RepositoryAnalysis};
use crate::models::tag::ClassificationContext;
use crate::taxonomy::TaggingEngine;

pub const PACKAGE_MANIFEST: &str = "package.json";
pub const DOCKERFILE: &str = "Dockerfile";
pub const PYTHON_REQUIREMENTS: &str = "requirements.txt";
pub const CI_WORKFLOWS_DIR: &str = ".github/workflows";

/// Gathers the facts for one repository and hands them to the tagging engine.
///
/// Never fails: any lookup that errors leaves its fact absent.
#[derive(Clone)]
pub struct RepoAnalyzer {
    host: Arc<dyn RepositoryHost>,
    tagger: Arc<TaggingEngine>,
}

impl RepoAnalyzer {
    pub fn new(host: Arc<dyn RepositoryHost>, tagger: Arc<TaggingEngine>) -> Self {
        Self { host, tagger }
    }

    pub async fn analyze(&self, owner: &str, repo: &str) -> RepositoryAnalysis {
        let host = self.host.as_ref();
        let (has_package_json, has_dockerfile, has_python_requirements, has_ci) = tokio::join!(
            host.file_exists(owner, repo, PACKAGE_MANIFEST),
            host.file_exists(owner, repo, DOCKERFILE),
            host.file_exists(owner, repo, PYTHON_REQUIREMENTS),
            host.directory_has_entries(owner, repo, CI_WORKFLOWS_DIR),
        );

        let (dependencies, python_requirements) = tokio::join!(
            async {
                if has_package_json {
                    self.load_dependencies(owner, repo).await
                } else {
                    None
                }
            },
            async {
                if has_python_requirements {
                    host.fetch_file(owner, repo, PYTHON_REQUIREMENTS)
                        .await
                        .into_text()
                } else {
                    None
                }
            },
        );

        let context = ClassificationContext {
            dependencies,
            python_requirements,
            has_dockerfile,
            has_ci,
        };
        let tags = self.tagger.classify(&context);

        tracing::debug!(
            "Analyzed {}/{}: {} frameworks, {} tools",
            owner,
            repo,
            tags.frameworks.len(),
            tags.tools.len()
        );

        RepositoryAnalysis {
            has_package_json,
            has_dockerfile,
            has_ci,
            has_python_requirements,
            frameworks: tags.frameworks,
            tools: tags.tools,
            dependencies: context.dependencies,
        }
    }

    async fn load_dependencies(&self, owner: &str, repo: &str) -> Option<HashMap<String, String>> {
        let content = self
            .host
            .fetch_file(owner, repo, PACKAGE_MANIFEST)
            .await
            .into_text()?;

        match PackageManifest::parse(&content) {
            Ok(manifest) => Some(manifest.all_dependencies()),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse {} for {}/{}: {}",
                    PACKAGE_MANIFEST,
                    owner,
                    repo,
                    e
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::host::testing::StaticHost;
    use crate::github::FileContent;
    use crate::models::TagSet;

    fn tags(set: &TagSet) -> Vec<&str> {
        set.iter().collect()
    }

    fn analyzer(host: StaticHost) -> RepoAnalyzer {
        RepoAnalyzer::new(Arc::new(host), Arc::new(TaggingEngine::new()))
    }

    #[tokio::test]
    async fn test_node_repo_with_dockerfile() {
        let host = StaticHost::default()
            .with_file(
                "web",
                PACKAGE_MANIFEST,
                FileContent::Found(
                    r#"{"dependencies": {"react": "^18.0"}, "devDependencies": {"typescript": "^5.0"}}"#
                        .to_string(),
                ),
            )
            .with_file("web", DOCKERFILE, FileContent::Found("FROM node:20".to_string()));

        let analysis = analyzer(host).analyze("octo", "web").await;

        assert!(analysis.has_package_json);
        assert!(analysis.has_dockerfile);
        assert!(!analysis.has_ci);
        assert!(!analysis.has_python_requirements);
        assert_eq!(tags(&analysis.frameworks), vec!["react"]);
        assert_eq!(tags(&analysis.tools), vec!["typescript", "docker"]);
        assert_eq!(analysis.dependencies.map(|d| d.len()), Some(2));
    }

    #[tokio::test]
    async fn test_python_repo_with_ci() {
        let host = StaticHost::default()
            .with_file(
                "api",
                PYTHON_REQUIREMENTS,
                FileContent::Found("Django==4.2\nrequests".to_string()),
            )
            .with_directory("api", CI_WORKFLOWS_DIR);

        let analysis = analyzer(host).analyze("octo", "api").await;

        assert!(!analysis.has_package_json);
        assert!(analysis.has_python_requirements);
        assert!(analysis.has_ci);
        assert_eq!(tags(&analysis.frameworks), vec!["django"]);
        assert_eq!(tags(&analysis.tools), vec!["github-actions"]);
        assert!(analysis.dependencies.is_none());
    }

    #[tokio::test]
    async fn test_malformed_manifest_leaves_dependencies_absent() {
        let host = StaticHost::default()
            .with_file("broken", PACKAGE_MANIFEST, FileContent::Found("{ nope".to_string()))
            .with_directory("broken", CI_WORKFLOWS_DIR);

        let analysis = analyzer(host).analyze("octo", "broken").await;

        assert!(analysis.has_package_json);
        assert!(analysis.dependencies.is_none());
        assert!(analysis.frameworks.is_empty());
        assert_eq!(tags(&analysis.tools), vec!["github-actions"]);
    }

    #[tokio::test]
    async fn test_failed_manifest_fetch_degrades_to_absent() {
        let host = StaticHost::default()
            .with_file("flaky", PACKAGE_MANIFEST, FileContent::FetchFailed)
            .with_file("flaky", PYTHON_REQUIREMENTS, FileContent::FetchFailed);

        let analysis = analyzer(host).analyze("octo", "flaky").await;

        assert!(analysis.has_package_json);
        assert!(analysis.has_python_requirements);
        assert!(analysis.dependencies.is_none());
        assert!(analysis.frameworks.is_empty());
        assert!(analysis.tools.is_empty());
    }

    #[tokio::test]
    async fn test_bare_repository() {
        let analysis = analyzer(StaticHost::default()).analyze("octo", "empty").await;
        assert_eq!(analysis, RepositoryAnalysis::default());
    }
}
