// type / subtype identifiers and the (type, subtype) pairing
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Personality type identifier. The domain is 1..=9 but nothing here checks it,
/// the calling layer owns that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonalityType(pub u8);

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Instinctual variant. Decoding goes through `FromStr`, so `SP` in a dataset reads as `sp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Subtype {
    /// self-preservation
    Sp,
    /// sexual / one-to-one
    Sx,
    /// social
    So,
}

impl Subtype {
    pub const ALL: [Subtype; 3] = [Subtype::Sp, Subtype::Sx, Subtype::So];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subtype::Sp => "sp",
            Subtype::Sx => "sx",
            Subtype::So => "so",
        }
    }
}

// ordering is lexical on the token ("so" < "sp" < "sx"), not declaration order
impl Ord for Subtype {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Subtype {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Subtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown subtype `{0}` (expected sp, so or sx)")]
    UnknownSubtype(String),

    #[error("invalid pairing `{0}` (expected a type digit followed by a subtype, e.g. 1sp)")]
    InvalidPairing(String),
}

impl FromStr for Subtype {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sp" => Ok(Subtype::Sp),
            "sx" => Ok(Subtype::Sx),
            "so" => Ok(Subtype::So),
            _ => Err(ParseError::UnknownSubtype(s.to_string())),
        }
    }
}

impl TryFrom<String> for Subtype {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One side of a relationship: a personality type together with its subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pairing {
    pub ptype: PersonalityType,
    pub subtype: Subtype,
}

impl Pairing {
    pub fn new(ptype: u8, subtype: Subtype) -> Self {
        Pairing {
            ptype: PersonalityType(ptype),
            subtype,
        }
    }
}

// two-level comparator used by key normalization: type first, then subtype token
impl Ord for Pairing {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ptype
            .cmp(&other.ptype)
            .then_with(|| self.subtype.cmp(&other.subtype))
    }
}

impl PartialOrd for Pairing {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.ptype, self.subtype)
    }
}

impl FromStr for Pairing {
    type Err = ParseError;

    //"1sp", "9 sx", "2SO"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| ParseError::InvalidPairing(s.to_string()))?;
        let (digits, rest) = trimmed.split_at(split);

        let ptype: u8 = digits
            .parse()
            .map_err(|_| ParseError::InvalidPairing(s.to_string()))?;
        let subtype = rest.parse::<Subtype>()?;

        Ok(Pairing::new(ptype, subtype))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtype_order_is_lexical_not_declaration_order() {
        assert!(Subtype::So < Subtype::Sp);
        assert!(Subtype::Sp < Subtype::Sx);

        let mut all = Subtype::ALL.to_vec();
        all.sort();
        assert_eq!(all, vec![Subtype::So, Subtype::Sp, Subtype::Sx]);
    }

    #[test]
    fn pairing_orders_by_type_then_subtype() {
        let one_sx = Pairing::new(1, Subtype::Sx);
        let two_so = Pairing::new(2, Subtype::So);
        let one_so = Pairing::new(1, Subtype::So);

        assert!(one_sx < two_so, "type dominates subtype");
        assert!(one_so < one_sx);
    }

    #[test]
    fn parse_pairings_and_subtypes() {
        assert_eq!("1sp".parse::<Pairing>().unwrap(), Pairing::new(1, Subtype::Sp));
        assert_eq!(" 9SX ".parse::<Pairing>().unwrap(), Pairing::new(9, Subtype::Sx));
        assert_eq!("So".parse::<Subtype>().unwrap(), Subtype::So);

        assert_eq!(
            "sp".parse::<Pairing>().unwrap_err(),
            ParseError::InvalidPairing("sp".to_string())
        );
        assert_eq!(
            "12".parse::<Pairing>().unwrap_err(),
            ParseError::InvalidPairing("12".to_string())
        );
        assert!(matches!(
            "3xx".parse::<Pairing>().unwrap_err(),
            ParseError::UnknownSubtype(_)
        ));
    }

    #[test]
    fn pairing_display_matches_parse_input() {
        let p = Pairing::new(4, Subtype::So);
        assert_eq!(p.to_string(), "4so");
        assert_eq!(p.to_string().parse::<Pairing>().unwrap(), p);
    }
}
