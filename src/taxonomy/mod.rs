pub mod catalog;

use crate::models::tag::{ClassificationContext, TagCategory, TagResult, TagRule};

pub use catalog::{default_rules, DOCKER_TAG, GITHUB_ACTIONS_TAG, PYTHON_TEXT_FRAMEWORKS};

/// Rule-based classifier mapping repository facts onto framework and tool tags.
///
/// Rules are evaluated in catalog order. Within one rule the first matching
/// pattern wins and the remaining patterns are skipped, but every rule is
/// evaluated, so a single dependency map can yield any number of tags.
#[derive(Debug, Clone)]
pub struct TaggingEngine {
    rules: Vec<TagRule>,
}

impl TaggingEngine {
    pub fn new() -> Self {
        Self::with_rules(default_rules())
    }

    pub fn with_rules(rules: Vec<TagRule>) -> Self {
        Self { rules }
    }

    pub fn classify(&self, context: &ClassificationContext) -> TagResult {
        let mut result = TagResult::default();

        if let Some(ref deps) = context.dependencies {
            for rule in &self.rules {
                if rule.patterns.iter().any(|p| deps.contains_key(p)) {
                    result.insert(rule.category, &rule.tag);
                }
            }
        }

        if context.has_dockerfile {
            result.insert(TagCategory::Tool, DOCKER_TAG);
        }

        if context.has_ci {
            result.insert(TagCategory::Tool, GITHUB_ACTIONS_TAG);
        }

        if let Some(ref text) = context.python_requirements {
            let content = text.to_lowercase();
            if !content.trim().is_empty() {
                for rule in self.python_text_rules() {
                    if rule
                        .patterns
                        .iter()
                        .any(|p| content.contains(&p.to_lowercase()))
                    {
                        result.insert(rule.category, &rule.tag);
                    }
                }
            }
        }

        tracing::trace!(
            frameworks = result.frameworks.len(),
            tools = result.tools.len(),
            "Classified repository"
        );

        result
    }

    fn python_text_rules(&self) -> impl Iterator<Item = &TagRule> {
        self.rules.iter().filter(|r| {
            r.category == TagCategory::Framework && PYTHON_TEXT_FRAMEWORKS.contains(&r.tag.as_str())
        })
    }

    /// Appends a rule; it is evaluated after every existing rule.
    pub fn add_rule(&mut self, rule: TagRule) {
        tracing::debug!("Adding tag rule: {} ({})", rule.tag, rule.category);
        self.rules.push(rule);
    }

    /// Removes every rule carrying `tag`. Returns whether anything was removed.
    pub fn remove_rule(&mut self, tag: &str) -> bool {
        let before = self.rules.len();
        self.rules.retain(|r| r.tag != tag);
        let removed = self.rules.len() < before;
        if removed {
            tracing::debug!("Removed tag rule: {}", tag);
        }
        removed
    }

    pub fn rules(&self) -> &[TagRule] {
        &self.rules
    }

    pub fn get_rule(&self, tag: &str) -> Option<&TagRule> {
        self.rules.iter().find(|r| r.tag == tag)
    }
}

impl Default for TaggingEngine {
    fn default() -> Self {
        Self::new()
    }
}
