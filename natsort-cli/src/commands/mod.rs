//! CLI command implementations

pub mod list;
pub mod sort;

pub use sort::{sort_entries, Entry, OutputFormat, SortArgs};
