use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode};

use crate::config::DEFAULT_API_URL;
use crate::error::{Error, Result};
use crate::github::content::{ContentEntry, FileContent};
use crate::github::host::RepositoryHost;
use crate::models::{LanguageBreakdown, Repository};

pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", token))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("repolens/0.1"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: DEFAULT_API_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn contents_url(&self, owner: &str, repo: &str, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.base_url,
            owner,
            repo,
            path.trim_start_matches('/')
        )
    }

    async fn get_contents(&self, owner: &str, repo: &str, path: &str) -> Result<Response> {
        let url = self.contents_url(owner, repo, path);
        tracing::debug!("Fetching: {}", url);
        Ok(self.client.get(&url).send().await?)
    }

    async fn error_from(response: Response, what: &str) -> Error {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if status == StatusCode::NOT_FOUND {
            return Error::NotFound(what.to_string());
        }
        Error::GitHubApi(format!("Failed to fetch {}: {} - {}", what, status, body))
    }
}

#[async_trait]
impl RepositoryHost for GitHubClient {
    /// Only the first page the API returns is captured.
    async fn list_repositories(&self, owner: &str) -> Result<Vec<Repository>> {
        let url = format!("{}/users/{}/repos", self.base_url, owner);
        tracing::info!("Fetching repositories for: {}", owner);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response, &format!("repositories for {}", owner)).await);
        }

        Ok(response.json().await?)
    }

    async fn get_languages(&self, owner: &str, repo: &str) -> Result<LanguageBreakdown> {
        let url = format!("{}/repos/{}/{}/languages", self.base_url, owner, repo);
        tracing::debug!("Fetching: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            let what = format!("languages for {}/{}", owner, repo);
            return Err(Self::error_from(response, &what).await);
        }

        Ok(response.json().await?)
    }

    async fn file_exists(&self, owner: &str, repo: &str, path: &str) -> bool {
        match self.get_contents(owner, repo, path).await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!("Existence check for {}/{}:{} failed: {}", owner, repo, path, e);
                false
            }
        }
    }

    async fn directory_has_entries(&self, owner: &str, repo: &str, path: &str) -> bool {
        let response = match self.get_contents(owner, repo, path).await {
            Ok(r) if r.status().is_success() => r,
            Ok(_) => return false,
            Err(e) => {
                tracing::debug!("Directory check for {}/{}:{} failed: {}", owner, repo, path, e);
                return false;
            }
        };

        match response.json::<serde_json::Value>().await {
            Ok(serde_json::Value::Array(entries)) => !entries.is_empty(),
            Ok(_) => false,
            Err(e) => {
                tracing::debug!(
                    "Directory listing for {}/{}:{} unreadable: {}",
                    owner,
                    repo,
                    path,
                    e
                );
                false
            }
        }
    }

    async fn fetch_file(&self, owner: &str, repo: &str, path: &str) -> FileContent {
        let response = match self.get_contents(owner, repo, path).await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Fetching {}/{}:{} failed: {}", owner, repo, path, e);
                return FileContent::FetchFailed;
            }
        };

        if response.status() == StatusCode::NOT_FOUND {
            return FileContent::NotFound;
        }
        if !response.status().is_success() {
            tracing::warn!(
                "Fetching {}/{}:{} returned {}",
                owner,
                repo,
                path,
                response.status()
            );
            return FileContent::FetchFailed;
        }

        let entry: ContentEntry = match response.json().await {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Contents of {}/{}:{} unreadable: {}", owner, repo, path, e);
                return FileContent::FetchFailed;
            }
        };

        match entry.decode() {
            Ok(Some(text)) => FileContent::Found(text),
            Ok(None) => FileContent::NotFound,
            Err(e) => {
                tracing::warn!("Contents of {}/{}:{} undecodable: {}", owner, repo, path, e);
                FileContent::FetchFailed
            }
        }
    }
}
