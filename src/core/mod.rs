pub mod filter;
pub mod key;
pub mod lookup;
pub mod record;
pub mod table;
pub mod types;
