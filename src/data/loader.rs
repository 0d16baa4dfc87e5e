/*
Inputs:

    a TOON document with one table, `stories`, one row per authored story
    (type_a, subtype_a, type_b, subtype_b, title, subtitle, story, strengths, challenges, growth)

Outputs:

    CompatibilityTable (records in authored order + canonical key index)

The built-in table is decoded from the embedded stories.toon on first use and lives for
the rest of the process.
*/
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use serde::Deserialize;
use tracing::debug;

use crate::core::record::CompatibilityRecord;
use crate::core::table::{CompatibilityTable, LoadConfig, LoadError};

const BUILTIN_STORIES: &str = include_str!("stories.toon");

static BUILTIN: LazyLock<Result<CompatibilityTable, LoadError>> =
    LazyLock::new(|| CompatibilityTable::from_toon(BUILTIN_STORIES, &LoadConfig::default()));

#[derive(Debug, Deserialize)]
struct StoryDocument {
    stories: Vec<CompatibilityRecord>,
}

/// The story table shipped with the crate.
pub fn builtin() -> Result<&'static CompatibilityTable, &'static LoadError> {
    BUILTIN.as_ref()
}

impl CompatibilityTable {
    pub fn from_toon(input: &str, config: &LoadConfig) -> Result<Self, LoadError> {
        let doc: StoryDocument =
            toon_format::decode_default(input).map_err(|e| LoadError::Decode(e.to_string()))?;
        debug!(records = doc.stories.len(), "decoded story document");

        CompatibilityTable::with_config(doc.stories, config)
    }

    pub fn from_path(path: impl AsRef<Path>, config: &LoadConfig) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading story table");

        CompatibilityTable::from_toon(&input, config)
    }
}
