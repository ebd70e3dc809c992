use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::TagSet;

/// Per-repository result of the analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryAnalysis {
    pub has_package_json: bool,
    pub has_dockerfile: bool,
    pub has_ci: bool,
    pub has_python_requirements: bool,
    pub frameworks: TagSet,
    pub tools: TagSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<HashMap<String, String>>,
}

impl RepositoryAnalysis {
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.frameworks.iter().chain(self.tools.iter())
    }
}

/// The subset of `package.json` the analyzer reads. Sections may be missing or
/// `null`, and versions are not always strings (workspace and git specifiers).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default)]
    pub dependencies: Option<HashMap<String, Value>>,
    #[serde(default)]
    pub dev_dependencies: Option<HashMap<String, Value>>,
}

impl PackageManifest {
    pub fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Runtime and dev dependencies in one map; dev entries win on collision.
    /// `null` versions are dropped and other non-string versions keep their
    /// JSON text.
    pub fn all_dependencies(self) -> HashMap<String, String> {
        self.dependencies
            .into_iter()
            .chain(self.dev_dependencies)
            .flatten()
            .filter_map(|(name, version)| match version {
                Value::Null => None,
                Value::String(version) => Some((name, version)),
                other => Some((name, other.to_string())),
            })
            .collect()
    }
}
