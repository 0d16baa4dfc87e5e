//! Compatibility stories keyed by unordered pairs of (personality type, instinctual subtype).
//!
//! ```no_run
//! use pairing_stories::{builtin, Pairing};
//!
//! let table = builtin().expect("embedded stories decode");
//! let a: Pairing = "1sp".parse().unwrap();
//! let b: Pairing = "2sp".parse().unwrap();
//!
//! // order independent
//! assert_eq!(table.find(a, b).map(|r| &r.title), table.find(b, a).map(|r| &r.title));
//! for story in table.stories_for(a) {
//!     println!("{} x {}: {}", story.side_a(), story.side_b(), story.title);
//! }
//! ```
pub mod core;
pub mod data;

pub use crate::core::key::{normalize, CanonicalKey};
pub use crate::core::record::CompatibilityRecord;
pub use crate::core::table::{CompatibilityTable, DuplicatePolicy, LoadConfig, LoadError};
pub use crate::core::types::{Pairing, ParseError, PersonalityType, Subtype};
pub use crate::data::loader::builtin;
