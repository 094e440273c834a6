//! Type pair discovery by naming convention.

use crate::error::{MapError, MapResult};
use litemapper_types::{TypeDescriptor, TypeKey, TypeUniverse};
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

/// How a destination name is compared with `source name + suffix`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    #[default]
    /// The destination name must equal `source name + suffix`.
    Exact,
    /// `source name + suffix` is a regular expression; any destination name
    /// containing a match is accepted.
    Regex,
}

/// Naming convention used to pair types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingPattern {
    #[serde(default = "default_suffix")]
    pub suffix: String,
    #[serde(default)]
    pub mode: MatchMode,
}

fn default_suffix() -> String {
    "Dto".to_string()
}

impl Default for NamingPattern {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
            mode: MatchMode::Exact,
        }
    }
}

impl NamingPattern {
    /// Exact-suffix pattern.
    pub fn suffix(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            mode: MatchMode::Exact,
        }
    }

    /// Regular-expression pattern, matched anywhere in the destination name.
    pub fn regex(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            mode: MatchMode::Regex,
        }
    }

    fn matcher(&self, source_name: &str) -> MapResult<Matcher> {
        let target = format!("{source_name}{}", self.suffix);
        match self.mode {
            MatchMode::Exact => Ok(Matcher::Exact(target)),
            MatchMode::Regex => Regex::new(&target)
                .map(Matcher::Regex)
                .map_err(|e| MapError::InvalidPattern(format!("'{target}': {e}"))),
        }
    }
}

enum Matcher {
    Exact(String),
    Regex(Regex),
}

impl Matcher {
    fn matches(&self, candidate: &str) -> bool {
        match self {
            Self::Exact(target) => candidate == target,
            Self::Regex(re) => re.is_match(candidate),
        }
    }
}

/// Symmetric type pairing: if A maps to B, B maps to A.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypePairTable {
    pairs: HashMap<TypeKey, TypeDescriptor>,
    recorded: usize,
}

impl TypePairTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs every type of `source` with the first type of `destination`
    /// whose name matches the pattern. Unmatched types are left out.
    pub fn resolve(
        source: &TypeUniverse,
        destination: &TypeUniverse,
        pattern: &NamingPattern,
    ) -> MapResult<Self> {
        let mut table = Self::new();

        for candidate in source.iter() {
            let matcher = pattern.matcher(candidate.name())?;
            if let Some(counterpart) = destination.iter().find(|d| matcher.matches(d.name())) {
                debug!(
                    source = candidate.name(),
                    destination = counterpart.name(),
                    "Type pair discovered"
                );
                table.insert(*candidate, *counterpart);
            }
        }

        info!(
            source = source.name(),
            destination = destination.name(),
            pairs = table.pair_count(),
            entries = table.len(),
            "Type pairs resolved"
        );
        Ok(table)
    }

    /// Records `a` ↔ `b`, replacing earlier entries for either key.
    pub fn insert(&mut self, a: TypeDescriptor, b: TypeDescriptor) {
        self.pairs.insert(a.key(), b);
        self.pairs.insert(b.key(), a);
        self.recorded += 1;
    }

    /// Number of pairs recorded, counting each [`insert`](Self::insert) once
    /// even when it pairs a type with itself or overwrites earlier entries.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.recorded
    }

    #[must_use]
    pub fn paired(&self, key: TypeKey) -> Option<&TypeDescriptor> {
        self.pairs.get(&key)
    }

    #[must_use]
    pub fn contains(&self, key: TypeKey) -> bool {
        self.pairs.contains_key(&key)
    }

    /// Number of keys; a pair of distinct types contributes two.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (TypeKey, TypeKey)> + '_ {
        self.pairs.iter().map(|(&from, to)| (from, to.key()))
    }
}
