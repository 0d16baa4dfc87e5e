// the immutable in-memory collection of stories + its key index
use std::collections::HashMap;
use std::convert::Infallible;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::key::CanonicalKey;
use crate::core::record::CompatibilityRecord;

/// What to do when two records describe the same unordered pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Exact lookup resolves to the first record in collection order. Later ones stay
    /// in the collection and still show up in partial lookups.
    #[default]
    KeepFirst,
    /// Refuse to build the table.
    Reject,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    pub duplicates: DuplicatePolicy,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode story table: {0}")]
    Decode(String),

    #[error("duplicate stories for {key}: records {first} and {second}")]
    DuplicatePair {
        key: CanonicalKey,
        first: usize,
        second: usize,
    },
}

/// Read-only table of compatibility records.
///
/// Records keep their authored order. `index` maps every canonical key to the position of
/// the first record carrying it, so an indexed exact lookup returns the same record a
/// front-to-back scan would.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityTable {
    pub(crate) records: Vec<CompatibilityRecord>,
    pub(crate) index: HashMap<CanonicalKey, usize>,
}

//first position per key wins; every later position goes to `on_duplicate(key, first, pos)`
fn index_records<E>(
    records: &[CompatibilityRecord],
    mut on_duplicate: impl FnMut(CanonicalKey, usize, usize) -> Result<(), E>,
) -> Result<HashMap<CanonicalKey, usize>, E> {
    let mut index: HashMap<CanonicalKey, usize> = HashMap::with_capacity(records.len());

    for (pos, r) in records.iter().enumerate() {
        let key = r.key();
        match index.get(&key).copied() {
            None => {
                index.insert(key, pos);
            }
            Some(first) => on_duplicate(key, first, pos)?,
        }
    }

    debug!(records = records.len(), keys = index.len(), "built compatibility table");
    Ok(index)
}

fn keep_first(key: CanonicalKey, first: usize, pos: usize) {
    warn!(%key, first, duplicate = pos, "duplicate story pair, keeping first");
}

impl CompatibilityTable {
    /// Build with `DuplicatePolicy::KeepFirst`.
    pub fn new(records: Vec<CompatibilityRecord>) -> Self {
        let Ok(index) = index_records::<Infallible>(&records, |key, first, pos| {
            keep_first(key, first, pos);
            Ok(())
        });
        CompatibilityTable { records, index }
    }

    pub fn with_config(
        records: Vec<CompatibilityRecord>,
        config: &LoadConfig,
    ) -> Result<Self, LoadError> {
        let index = index_records(&records, |key, first, pos| match config.duplicates {
            DuplicatePolicy::KeepFirst => {
                keep_first(key, first, pos);
                Ok(())
            }
            DuplicatePolicy::Reject => Err(LoadError::DuplicatePair {
                key,
                first,
                second: pos,
            }),
        })?;
        Ok(CompatibilityTable { records, index })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompatibilityRecord> + '_ {
        self.records.iter()
    }

    //distinct keys, sorted, for reports
    pub fn keys(&self) -> Vec<CanonicalKey> {
        let mut keys: Vec<CanonicalKey> = self.index.keys().copied().collect();
        keys.sort();
        keys
    }
}
