// one authored compatibility story
use serde::{Deserialize, Serialize};

use crate::core::key::CanonicalKey;
use crate::core::types::{Pairing, PersonalityType, Subtype};

/// A story about the dynamic between two (type, subtype) combinations.
///
/// Only the four identifying fields carry meaning for lookups; the text fields are payload.
/// Field layout is flat so the dataset can be written as a single TOON table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityRecord {
    pub type_a: PersonalityType,
    pub subtype_a: Subtype,
    pub type_b: PersonalityType,
    pub subtype_b: Subtype,

    pub title: String,
    pub subtitle: String,
    pub story: String,
    pub strengths: String,
    pub challenges: String,
    pub growth: String,
}

impl CompatibilityRecord {
    pub fn side_a(&self) -> Pairing {
        Pairing {
            ptype: self.type_a,
            subtype: self.subtype_a,
        }
    }

    pub fn side_b(&self) -> Pairing {
        Pairing {
            ptype: self.type_b,
            subtype: self.subtype_b,
        }
    }

    //derived from the stored fields every time, never stored
    pub fn key(&self) -> CanonicalKey {
        CanonicalKey::new(self.side_a(), self.side_b())
    }

    /// Direct membership on either stored side. Not canonicalized.
    pub fn involves(&self, p: Pairing) -> bool {
        self.side_a() == p || self.side_b() == p
    }
}

#[cfg(test)]
pub(crate) fn mk_record(a: &str, b: &str, title: &str) -> CompatibilityRecord {
    let a: Pairing = a.parse().unwrap();
    let b: Pairing = b.parse().unwrap();
    CompatibilityRecord {
        type_a: a.ptype,
        subtype_a: a.subtype,
        type_b: b.ptype,
        subtype_b: b.subtype,
        title: title.to_string(),
        subtitle: String::new(),
        story: String::new(),
        strengths: String::new(),
        challenges: String::new(),
        growth: String::new(),
    }
}
