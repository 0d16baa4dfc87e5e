// exact match lookup by canonical key
use tracing::trace;

use crate::core::key::CanonicalKey;
use crate::core::record::CompatibilityRecord;
use crate::core::table::CompatibilityTable;
use crate::core::types::Pairing;

impl CompatibilityTable {
    /// Find the story for an unordered pair. Argument order does not matter.
    ///
    /// `None` is the normal answer for most pairs: only some combinations have an authored story.
    pub fn find(&self, a: Pairing, b: Pairing) -> Option<&CompatibilityRecord> {
        self.find_by_key(&CanonicalKey::new(a, b))
    }

    pub fn find_by_key(&self, key: &CanonicalKey) -> Option<&CompatibilityRecord> {
        let hit = self.index.get(key).and_then(|&pos| self.records.get(pos));
        if hit.is_none() {
            trace!(%key, "no story for pair");
        }
        hit
    }

    //unindexed first-match scan, same contract as find_by_key
    pub fn scan_by_key(&self, key: &CanonicalKey) -> Option<&CompatibilityRecord> {
        self.records.iter().find(|r| r.key() == *key)
    }
}
