use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// One alias and the canonical name it resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    pub alias: String,
    pub canonical: String,
}

impl AliasEntry {
    pub fn new(alias: impl Into<String>, canonical: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            canonical: canonical.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AliasLoadError {
    #[error("failed to read alias file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid alias CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid alias JSON data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("alias entry {position} has an empty alias")]
    EmptyAlias { position: usize },
}

/// Ordered alias to canonical-name mapping.
///
/// Iteration follows insertion order, which decides the winner when several
/// aliases occur in the same title. Re-inserting an alias replaces its
/// canonical name in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMap {
    entries: Vec<AliasEntry>,
}

impl AliasMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in company mapping used when no aliases are configured.
    pub fn default_companies() -> Self {
        const DEFAULT_COMPANIES: &[(&str, &str)] = &[
            ("Saama Technologies", "Saama Technologies"),
            ("SaamaTech, Inc.", "Saama Technologies"),
            ("Takeda Pharmaceutical", "Takeda Pharmaceutical"),
            ("AstraZeneca", "AstraZeneca"),
        ];

        DEFAULT_COMPANIES.iter().copied().collect()
    }

    /// Stores `alias -> canonical`. Empty aliases are skipped and `false` is returned.
    pub fn insert(&mut self, alias: impl Into<String>, canonical: impl Into<String>) -> bool {
        let alias = alias.into();
        if alias.is_empty() {
            tracing::warn!("skipping empty alias");
            return false;
        }

        let canonical = canonical.into();
        match self.entries.iter_mut().find(|entry| entry.alias == alias) {
            Some(existing) => existing.canonical = canonical,
            None => self.entries.push(AliasEntry { alias, canonical }),
        }
        true
    }

    pub fn get(&self, alias: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.alias == alias)
            .map(|entry| entry.canonical.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AliasEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }

    /// Loads an alias file, picking JSON for `.json` paths and CSV otherwise.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, AliasLoadError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let map = if is_json {
            Self::from_json_reader(file)?
        } else {
            Self::from_csv_reader(file)?
        };

        tracing::info!(path = %path.display(), aliases = map.len(), "loaded alias map");
        Ok(map)
    }

    /// Reads a headered `alias,canonical` CSV.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, AliasLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = Vec::new();
        for record in csv_reader.deserialize::<AliasEntry>() {
            entries.push(record?);
        }

        Self::from_entries(entries)
    }

    /// Reads a JSON array of `{"alias": .., "canonical": ..}` objects.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, AliasLoadError> {
        let entries: Vec<AliasEntry> = serde_json::from_reader(reader)?;
        Self::from_entries(entries)
    }

    /// Builds a map from entries, rejecting empty or whitespace-only aliases.
    pub fn from_entries<I>(entries: I) -> Result<Self, AliasLoadError>
    where
        I: IntoIterator<Item = AliasEntry>,
    {
        let mut map = Self::new();
        for (index, entry) in entries.into_iter().enumerate() {
            if entry.alias.trim().is_empty() {
                return Err(AliasLoadError::EmptyAlias {
                    position: index + 1,
                });
            }
            map.insert(entry.alias, entry.canonical);
        }
        Ok(map)
    }
}

impl<A, C> FromIterator<(A, C)> for AliasMap
where
    A: Into<String>,
    C: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (A, C)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (alias, canonical) in iter {
            map.insert(alias, canonical);
        }
        map
    }
}

impl<'a> IntoIterator for &'a AliasMap {
    type Item = &'a AliasEntry;
    type IntoIter = std::slice::Iter<'a, AliasEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
