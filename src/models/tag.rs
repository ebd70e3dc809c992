use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TagCategory {
    Framework,
    Tool,
}

impl std::fmt::Display for TagCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagCategory::Framework => write!(f, "framework"),
            TagCategory::Tool => write!(f, "tool"),
        }
    }
}

/// One catalog entry: a tag and the dependency names that imply it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagRule {
    pub tag: String,
    pub category: TagCategory,
    pub patterns: Vec<String>,
}

impl TagRule {
    pub fn new(tag: &str, category: TagCategory, patterns: &[&str]) -> Self {
        Self {
            tag: tag.to_string(),
            category,
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn framework(tag: &str, patterns: &[&str]) -> Self {
        Self::new(tag, TagCategory::Framework, patterns)
    }

    pub fn tool(tag: &str, patterns: &[&str]) -> Self {
        Self::new(tag, TagCategory::Tool, patterns)
    }
}

/// Facts known about a single repository at tagging time.
#[derive(Debug, Clone, Default)]
pub struct ClassificationContext {
    pub dependencies: Option<HashMap<String, String>>,
    pub python_requirements: Option<String>,
    pub has_dockerfile: bool,
    pub has_ci: bool,
}

impl ClassificationContext {
    pub fn with_dependencies<I, K, V>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.dependencies = Some(
            deps.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    pub fn with_python_requirements(mut self, text: impl Into<String>) -> Self {
        self.python_requirements = Some(text.into());
        self
    }

    pub fn with_dockerfile(mut self, present: bool) -> Self {
        self.has_dockerfile = present;
        self
    }

    pub fn with_ci(mut self, present: bool) -> Self {
        self.has_ci = present;
        self
    }
}

/// Tags in the order they were first added. Duplicates are dropped on insert,
/// so the first emission decides a tag's position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: &str) -> bool {
        if self.contains(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for TagSet {
    fn from(tags: Vec<String>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<TagSet> for Vec<String> {
    fn from(set: TagSet) -> Self {
        set.tags
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(tag.as_ref());
        }
        set
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagResult {
    pub frameworks: TagSet,
    pub tools: TagSet,
}

impl TagResult {
    pub fn is_empty(&self) -> bool {
        self.frameworks.is_empty() && self.tools.is_empty()
    }

    pub fn insert(&mut self, category: TagCategory, tag: &str) -> bool {
        match category {
            TagCategory::Framework => self.frameworks.insert(tag),
            TagCategory::Tool => self.tools.insert(tag),
        }
    }
}
