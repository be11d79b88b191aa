// src/store/mod.rs
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::CredentialRecord;

pub mod csv;
pub mod text;

pub use self::csv::CsvStore;
pub use self::text::TextStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Store format error at line {0}: {1}")]
    FormatError(usize, String),

    #[error("Password is already stored")]
    DuplicatePassword,

    #[error("The {0} cannot be stored: {1}")]
    InvalidField(&'static str, String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StoreFormat {
    /// `DD/MM/YY HH:MM | website | email | password` lines
    Text,
    /// Indexed table with a header row; rejects repeated passwords
    Csv,
}

impl StoreFormat {
    pub fn default_path(self) -> PathBuf {
        match self {
            StoreFormat::Text => PathBuf::from("./passwords_saved.dat"),
            StoreFormat::Csv => PathBuf::from("./passwords_saved.csv"),
        }
    }
}

impl std::str::FromStr for StoreFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" | "dat" => Ok(StoreFormat::Text),
            "csv" => Ok(StoreFormat::Csv),
            other => Err(format!("unknown store format '{}'", other)),
        }
    }
}

/// Append-only persistence for credential records.
///
/// Each call opens, writes and closes the file; nothing is held between calls.
pub trait RecordStore {
    fn path(&self) -> &Path;

    fn append(&self, record: &CredentialRecord) -> Result<()>;

    /// Missing file loads as empty.
    fn load(&self) -> Result<Vec<CredentialRecord>>;
}

pub fn open_store(format: StoreFormat, path: PathBuf) -> Box<dyn RecordStore> {
    log::debug!("Using {:?} store at {}", format, path.display());
    match format {
        StoreFormat::Text => Box::new(TextStore::new(path)),
        StoreFormat::Csv => Box::new(CsvStore::new(path)),
    }
}

pub(crate) fn check_timestamp(line: usize, timestamp: &str) -> Result<()> {
    if crate::utils::parse_timestamp(timestamp).is_none() {
        return Err(StoreError::FormatError(
            line,
            format!("invalid timestamp '{}'", timestamp),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_parse() {
        assert_eq!("text".parse::<StoreFormat>(), Ok(StoreFormat::Text));
        assert_eq!(" CSV ".parse::<StoreFormat>(), Ok(StoreFormat::Csv));
        assert!("xlsx".parse::<StoreFormat>().is_err());
    }

    #[test]
    fn open_store_picks_backend_by_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.csv");
        let store = open_store(StoreFormat::Csv, path.clone());
        assert_eq!(store.path(), path.as_path());
        assert!(store.load().unwrap().is_empty());
    }
}
