//! Rule listing formatters (human and JSONL)

pub mod listing;

pub use listing::{ListingHumanFormatter, ListingJsonlFormatter, RuleListing};
