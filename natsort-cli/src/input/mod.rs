//! Input handling module
//!
//! Entries come from the command line, from files, or from stdin, one per
//! line.

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::{Context, Result};
use std::io::BufRead;

/// Where entries are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySource {
    /// Entries given directly as arguments
    Args(Vec<String>),
    /// Files or glob patterns, one entry per line
    Files(Vec<String>),
    /// Standard input, one entry per line
    Stdin,
}

impl EntrySource {
    /// Pick the source: arguments first, then input files, then stdin
    pub fn select(args: Vec<String>, patterns: Vec<String>) -> Self {
        if !args.is_empty() {
            EntrySource::Args(args)
        } else if !patterns.is_empty() {
            EntrySource::Files(patterns)
        } else {
            EntrySource::Stdin
        }
    }

    /// Read all entries from this source
    pub fn read(self) -> Result<Vec<String>> {
        match self {
            EntrySource::Args(args) => Ok(args),
            EntrySource::Files(patterns) => {
                let mut entries = Vec::new();
                for path in resolve_patterns(&patterns)? {
                    log::debug!("Reading entries from {}", path.display());
                    entries.extend(FileReader::read_lines(&path)?);
                }
                Ok(entries)
            }
            EntrySource::Stdin => read_lines(std::io::stdin().lock()),
        }
    }
}

/// Read non-empty lines, trimming trailing line endings
pub fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read input line")?;
        let line = line.trim_end_matches('\r');
        if !line.is_empty() {
            entries.push(line.to_string());
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_select_prefers_args() {
        let source = EntrySource::select(vec!["a".into()], vec!["*.txt".into()]);
        assert_eq!(source, EntrySource::Args(vec!["a".into()]));
        assert_eq!(
            EntrySource::select(vec![], vec!["*.txt".into()]),
            EntrySource::Files(vec!["*.txt".into()])
        );
        assert_eq!(EntrySource::select(vec![], vec![]), EntrySource::Stdin);
    }

    #[test]
    fn test_read_lines_skips_blank_lines() {
        let input = Cursor::new("a10\r\n\na2\n  \n");
        assert_eq!(read_lines(input).unwrap(), ["a10", "a2", "  "]);
    }
}
