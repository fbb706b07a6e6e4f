//! Load-time failures.
//!
//! Everything after loading degrades per record instead of failing, so this is
//! the only typed error the library surfaces. Write failures go through
//! `anyhow` like the rest of the output code.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read input {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected {expected} fields to match the header, found {found}")]
    Shape {
        line: u64,
        expected: u64,
        found: u64,
    },

    #[error("malformed CSV input: {0}")]
    Csv(#[from] csv::Error),
}
