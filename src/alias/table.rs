//! Alias Table
//!
//! Maps user-typed enchantment names to canonical enchantment ids.
//! Built once at startup from a `{ "a|b|c": "namespace:id" }` document and
//! never mutated afterwards, so `&AliasTable` can be shared freely between
//! callers.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};

use crate::config::ConfigError;
use crate::domain::EnchantmentId;

/// Separator between synonyms in a group key
pub const GROUP_DELIMITER: char = '|';

/// One configured group of synonyms sharing a canonical id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasGroup {
    synonyms: Vec<String>,
    id: EnchantmentId,
}

impl AliasGroup {
    /// Synonyms in configured order, as written
    pub fn synonyms(&self) -> &[String] {
        &self.synonyms
    }

    pub fn id(&self) -> &EnchantmentId {
        &self.id
    }
}

/// Immutable alias lookup table
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    groups: Vec<AliasGroup>,
    /// Lowercased synonym -> index into `groups`
    index: HashMap<String, usize>,
}

impl AliasTable {
    // =========================================================================
    // AliasTable::build()
    // =========================================================================

    /// Build a table from `group key -> canonical id` pairs.
    ///
    /// Group keys are split on `|`. A single trailing delimiter is
    /// tolerated; any other empty synonym is rejected. A synonym may appear
    /// in several groups only if they all map to the same id.
    ///
    /// # Errors
    /// - `ConfigError::EmptyAliasTable` if `source` has no entries
    /// - `ConfigError::EmptySynonym` for blank synonyms
    /// - `ConfigError::ConflictingAlias` for a synonym claimed by two ids
    pub fn build<I, K>(source: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, EnchantmentId)>,
        K: AsRef<str>,
    {
        let mut table = AliasTable::default();

        for (key, id) in source {
            let key = key.as_ref();
            let synonyms = split_group(key)?;

            let group_index = table.groups.len();
            for synonym in &synonyms {
                let folded = fold(synonym);
                if let Some(&existing) = table.index.get(&folded) {
                    // repeated inside the group being built
                    if existing == group_index {
                        continue;
                    }
                    let first = &table.groups[existing].id;
                    if *first != id {
                        return Err(ConfigError::ConflictingAlias {
                            alias: synonym.clone(),
                            first: first.to_string(),
                            second: id.to_string(),
                        });
                    }
                    continue;
                }
                table.index.insert(folded, group_index);
            }

            table.groups.push(AliasGroup { synonyms, id });
        }

        if table.groups.is_empty() {
            return Err(ConfigError::EmptyAliasTable);
        }

        tracing::info!(
            groups = table.groups.len(),
            aliases = table.index.len(),
            "Alias table built"
        );

        Ok(table)
    }

    /// Build a table from a JSON document.
    ///
    /// Groups are processed in document order.
    ///
    /// # Errors
    /// - `ConfigError::MalformedAliasTable` if the document is not a
    ///   `string -> enchantment id` object, or repeats a group key
    /// - everything `build` can return
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let AliasDocument(source) = serde_json::from_str(document)?;
        Self::build(source)
    }

    /// Read and build a table from a JSON file.
    ///
    /// # Errors
    /// - `ConfigError::Io` if the file cannot be read
    /// - everything `from_json` can return
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let document = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Loading alias table");
        Self::from_json(&document)
    }

    /// An empty table; resolves nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    // =========================================================================
    // AliasTable::resolve()
    // =========================================================================

    /// Resolve a user token to its canonical id.
    ///
    /// The token must equal one synonym, ignoring case and surrounding
    /// whitespace. Partial matches never resolve.
    pub fn resolve(&self, token: &str) -> Option<&EnchantmentId> {
        let folded = fold(token.trim());
        if folded.is_empty() {
            return None;
        }
        self.index.get(&folded).map(|&i| &self.groups[i].id)
    }

    /// Groups in build order
    pub fn groups(&self) -> &[AliasGroup] {
        &self.groups
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

fn fold(synonym: &str) -> String {
    synonym.to_lowercase()
}

fn split_group(key: &str) -> Result<Vec<String>, ConfigError> {
    let body = key.strip_suffix(GROUP_DELIMITER).unwrap_or(key);

    body.split(GROUP_DELIMITER)
        .map(|synonym| {
            let synonym = synonym.trim();
            if synonym.is_empty() {
                Err(ConfigError::EmptySynonym {
                    group: key.to_string(),
                })
            } else {
                Ok(synonym.to_string())
            }
        })
        .collect()
}

/// `group key -> canonical id` pairs in document order. A repeated group
/// key is an error rather than last-one-wins.
struct AliasDocument(Vec<(String, EnchantmentId)>);

impl<'de> Deserialize<'de> for AliasDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = AliasDocument;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object mapping alias groups to enchantment ids")
            }

            fn visit_map<M>(self, mut map: M) -> Result<AliasDocument, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut seen = HashSet::new();
                let mut entries = Vec::new();
                while let Some(key) = map.next_key::<String>()? {
                    if !seen.insert(key.clone()) {
                        return Err(de::Error::custom(format!("duplicate alias group {:?}", key)));
                    }
                    entries.push((key, map.next_value()?));
                }
                Ok(AliasDocument(entries))
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}
