// canonical (order independent) key for an unordered pair of pairings
use std::fmt;

use serde::Serialize;

use crate::core::types::Pairing;

/// Composite key for an unordered pair of pairings.
///
/// `first <= second` under the `Pairing` ordering (type numerically, then subtype
/// token lexically), so both orderings of the same pair build the same key.
/// `Display` gives the legacy string form, e.g. `1sp-2sp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CanonicalKey {
    first: Pairing,
    second: Pairing,
}

impl CanonicalKey {
    pub fn new(a: Pairing, b: Pairing) -> Self {
        if b < a {
            CanonicalKey { first: b, second: a }
        } else {
            CanonicalKey { first: a, second: b }
        }
    }

    pub fn first(&self) -> Pairing {
        self.first
    }

    pub fn second(&self) -> Pairing {
        self.second
    }
}

/// Normalize two pairings into their canonical key. Pure and total.
pub fn normalize(a: Pairing, b: Pairing) -> CanonicalKey {
    CanonicalKey::new(a, b)
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}
