use crate::error::{Error, Result};
use std::env;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// How the dominant language of a repository is picked from its breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimaryLanguagePolicy {
    /// First key in the order the API listed it.
    #[default]
    FirstListed,
    /// Largest byte count; the first listed language wins ties.
    MostBytes,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: String,
    pub api_url: String,
    pub concurrency_limit: usize,
    pub include_forks: bool,
    pub primary_language: PrimaryLanguagePolicy,
}

impl Config {
    /// Reads the configuration from the environment. An explicitly supplied
    /// token takes precedence over `GITHUB_TOKEN`.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let github_token = token
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                Error::Config(
                    "GitHub token is required. Provide it via --token or the GITHUB_TOKEN environment variable"
                        .to_string(),
                )
            })?;

        let api_url = env::var("GITHUB_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let concurrency_limit = env::var("CONCURRENCY_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|n: &usize| *n > 0)
            .unwrap_or(5);

        let include_forks = env::var("EXCLUDE_FORKS")
            .ok()
            .map(|v| v.to_lowercase() != "true")
            .unwrap_or(true);

        let primary_language = env::var("PRIMARY_LANGUAGE_BY_BYTES")
            .ok()
            .map(|v| v.to_lowercase() == "true")
            .map(|by_bytes| {
                if by_bytes {
                    PrimaryLanguagePolicy::MostBytes
                } else {
                    PrimaryLanguagePolicy::FirstListed
                }
            })
            .unwrap_or_default();

        Ok(Self {
            github_token,
            api_url,
            concurrency_limit,
            include_forks,
            primary_language,
        })
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub concurrency_limit: usize,
    pub include_forks: bool,
    pub show_progress: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            concurrency_limit: 5,
            include_forks: true,
            show_progress: false,
        }
    }
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            concurrency_limit: config.concurrency_limit,
            include_forks: config.include_forks,
            show_progress: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_token_wins() {
        let config = Config::from_env(Some("from-flag".to_string())).unwrap();
        assert_eq!(config.github_token, "from-flag");
        assert!(config.concurrency_limit > 0);
    }

    #[test]
    fn test_blank_token_is_rejected() {
        let result = Config::from_env(Some("   ".to_string()));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
