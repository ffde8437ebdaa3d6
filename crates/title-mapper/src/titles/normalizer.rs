use super::aliases::AliasMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rule used when more than one alias occurs in the same title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// The earliest alias in map order wins.
    #[default]
    FirstListed,
    /// The longest matching alias wins; equal lengths fall back to map order.
    LongestAlias,
}

impl MatchPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchPolicy::FirstListed => "first_listed",
            MatchPolicy::LongestAlias => "longest_alias",
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown match policy '{0}' (expected first_listed or longest_alias)")]
pub struct ParsePolicyError(String);

impl FromStr for MatchPolicy {
    type Err = ParsePolicyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "first" | "first_listed" => Ok(Self::FirstListed),
            "longest" | "longest_alias" => Ok(Self::LongestAlias),
            _ => Err(ParsePolicyError(value.to_string())),
        }
    }
}

/// Maps company title variants onto canonical names.
///
/// An alias matches when its upper-cased text occurs anywhere in the
/// upper-cased title. Titles matching no alias are returned unchanged, so
/// normalization never fails.
#[derive(Debug, Clone)]
pub struct NameNormalizer {
    aliases: AliasMap,
    folded: Vec<String>,
    policy: MatchPolicy,
}

impl NameNormalizer {
    pub fn new(aliases: AliasMap) -> Self {
        let folded = aliases.iter().map(|entry| fold(&entry.alias)).collect();
        Self {
            aliases,
            folded,
            policy: MatchPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn aliases(&self) -> &AliasMap {
        &self.aliases
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Canonical name for `title`, or `None` when no alias occurs in it.
    pub fn resolve(&self, title: &str) -> Option<&str> {
        if self.folded.is_empty() {
            return None;
        }

        let haystack = fold(title);
        let mut candidates = self
            .folded
            .iter()
            .enumerate()
            .filter(|(_, alias)| haystack.contains(alias.as_str()));

        let index = match self.policy {
            MatchPolicy::FirstListed => candidates.next().map(|(index, _)| index),
            MatchPolicy::LongestAlias => candidates
                .fold(None, |best: Option<(usize, usize)>, (index, alias)| {
                    let length = alias.chars().count();
                    match best {
                        Some((_, best_length)) if best_length >= length => best,
                        _ => Some((index, length)),
                    }
                })
                .map(|(index, _)| index),
        }?;

        self.aliases
            .entries()
            .get(index)
            .map(|entry| entry.canonical.as_str())
    }

    pub fn normalize(&self, title: &str) -> String {
        match self.resolve(title) {
            Some(canonical) => canonical.to_string(),
            None => title.to_string(),
        }
    }

    pub fn normalize_list<S: AsRef<str>>(&self, titles: &[S]) -> Vec<String> {
        titles
            .iter()
            .map(|title| self.normalize(title.as_ref()))
            .collect()
    }
}

impl Default for NameNormalizer {
    fn default() -> Self {
        Self::new(AliasMap::default_companies())
    }
}

fn fold(value: &str) -> String {
    value.to_uppercase()
}
