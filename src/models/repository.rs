use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::PrimaryLanguagePolicy;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub owner: RepositoryOwner,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub watchers_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryOwner {
    pub login: String,
}

/// Bytes of code per language, in the order the API listed them.
///
/// The languages endpoint returns a JSON object; decoding it into a hash map
/// would lose the key order that [`PrimaryLanguagePolicy::FirstListed`]
/// depends on, so entries are kept as an ordered list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageBreakdown {
    entries: Vec<(String, u64)>,
}

impl LanguageBreakdown {
    pub fn new(entries: Vec<(String, u64)>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(lang, bytes)| (lang.as_str(), *bytes))
    }

    pub fn first_listed(&self) -> Option<&str> {
        self.entries.first().map(|(lang, _)| lang.as_str())
    }

    pub fn most_bytes(&self) -> Option<&str> {
        let mut best: Option<&(String, u64)> = None;
        for entry in &self.entries {
            if best.map_or(true, |b| entry.1 > b.1) {
                best = Some(entry);
            }
        }
        best.map(|(lang, _)| lang.as_str())
    }

    pub fn primary(&self, policy: PrimaryLanguagePolicy) -> Option<&str> {
        match policy {
            PrimaryLanguagePolicy::FirstListed => self.first_listed(),
            PrimaryLanguagePolicy::MostBytes => self.most_bytes(),
        }
    }
}

impl Serialize for LanguageBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (lang, bytes) in &self.entries {
            map.serialize_entry(lang, bytes)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LanguageBreakdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BreakdownVisitor;

        impl<'de> Visitor<'de> for BreakdownVisitor {
            type Value = LanguageBreakdown;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of language names to byte counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((lang, bytes)) = access.next_entry::<String, u64>()? {
                    entries.push((lang, bytes));
                }
                Ok(LanguageBreakdown { entries })
            }
        }

        deserializer.deserialize_map(BreakdownVisitor)
    }
}

/// Resolves the language shown for a repository: its breakdown when one was
/// fetched and is non-empty, otherwise the single language the listing reported.
pub fn primary_language<'a>(
    repo: &'a Repository,
    breakdown: Option<&'a LanguageBreakdown>,
    policy: PrimaryLanguagePolicy,
) -> Option<&'a str> {
    breakdown
        .and_then(|b| b.primary(policy))
        .or(repo.language.as_deref())
}
