// src/store/text.rs
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::{check_timestamp, RecordStore, Result, StoreError};
use crate::models::CredentialRecord;

const SEPARATOR: &str = " | ";

/// Flat text log, one `DD/MM/YY HH:MM | website | email | password ` line per record.
pub struct TextStore {
    path: PathBuf,
}

impl TextStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    // Rejects values that would read back as different fields.
    fn check_record(record: &CredentialRecord) -> Result<()> {
        let fields = [
            ("website", &record.website),
            ("email", &record.email),
            ("password", &record.password),
        ];
        for (name, value) in fields {
            if value.contains(|c: char| c == '\n' || c == '\r') {
                return Err(StoreError::InvalidField(name, "line breaks are not allowed".to_string()));
            }
            // Padded so a leading "| " or trailing " |" is caught too
            if name != "password" && format!(" {} ", value).contains(SEPARATOR) {
                return Err(StoreError::InvalidField(
                    name,
                    format!("'{}' is the field separator", SEPARATOR.trim()),
                ));
            }
        }
        Ok(())
    }

    fn format_line(record: &CredentialRecord) -> String {
        format!(
            "{}{sep}{}{sep}{}{sep}{} \n",
            record.timestamp,
            record.website,
            record.email,
            record.password,
            sep = SEPARATOR
        )
    }

    // The password is last so it may itself contain the separator
    fn parse_line(line_num: usize, line: &str) -> Result<CredentialRecord> {
        let body = line.strip_suffix(' ').ok_or_else(|| {
            StoreError::FormatError(line_num, "missing trailing space".to_string())
        })?;

        let parts: Vec<&str> = body.splitn(4, SEPARATOR).collect();
        if parts.len() < 4 {
            return Err(StoreError::FormatError(
                line_num,
                "expected date, website, email and password".to_string(),
            ));
        }

        check_timestamp(line_num, parts[0])?;

        Ok(CredentialRecord {
            timestamp: parts[0].to_string(),
            website: parts[1].to_string(),
            email: parts[2].to_string(),
            password: parts[3].to_string(),
        })
    }
}

impl RecordStore for TextStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, record: &CredentialRecord) -> Result<()> {
        Self::check_record(record)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.write_all(Self::format_line(record).as_bytes())?;
        log::info!("Saved credentials for {} to {}", record.website, self.path.display());

        Ok(())
    }

    fn load(&self) -> Result<Vec<CredentialRecord>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(idx, line)| Self::parse_line(idx + 1, line))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(website: &str, password: &str) -> CredentialRecord {
        CredentialRecord {
            timestamp: "05/01/25 14:30".to_string(),
            website: website.to_string(),
            email: "e@x.com".to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn line_layout_matches_log_format() {
        let dir = tempfile::tempdir().unwrap();
        let store = TextStore::new(dir.path().join("passwords_saved.dat"));

        store.append(&record("example.com", "s3cr3t!")).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, "05/01/25 14:30 | example.com | e@x.com | s3cr3t! \n");
    }

    #[test]
    fn appends_accumulate_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = TextStore::new(dir.path().join("passwords_saved.dat"));

        store.append(&record("a.com", "one")).unwrap();
        store.append(&record("b.com", "two | with bar")).unwrap();

        let records = store.load().unwrap();
        assert_eq!(records, vec![record("a.com", "one"), record("b.com", "two | with bar")]);
    }

    #[test]
    fn text_store_keeps_repeated_passwords() {
        let dir = tempfile::tempdir().unwrap();
        let store = TextStore::new(dir.path().join("passwords_saved.dat"));

        store.append(&record("a.com", "same")).unwrap();
        store.append(&record("b.com", "same")).unwrap();

        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn separator_in_website_or_email_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let store = TextStore::new(dir.path().join("passwords_saved.dat"));

        assert!(matches!(
            store.append(&record("a | b", "pw")),
            Err(StoreError::InvalidField("website", _))
        ));
        let mut with_bar = record("a.com", "pw");
        with_bar.email = "e | f@x.com".to_string();
        assert!(matches!(
            store.append(&with_bar),
            Err(StoreError::InvalidField("email", _))
        ));
        assert!(matches!(
            store.append(&record("a |", "pw")),
            Err(StoreError::InvalidField("website", _))
        ));
        assert!(!store.path().exists());
    }

    #[test]
    fn line_breaks_are_refused_in_any_field() {
        let dir = tempfile::tempdir().unwrap();
        let store = TextStore::new(dir.path().join("passwords_saved.dat"));

        store.append(&record("a.com", "first")).unwrap();
        assert!(matches!(
            store.append(&record("b.com", "pw\nx")),
            Err(StoreError::InvalidField("password", _))
        ));
        assert!(matches!(
            store.append(&record("c\r.com", "pw")),
            Err(StoreError::InvalidField("website", _))
        ));

        assert_eq!(store.load().unwrap(), vec![record("a.com", "first")]);
    }

    #[test]
    fn malformed_line_reports_its_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("passwords_saved.dat");
        fs::write(&path, "05/01/25 14:30 | a.com | e@x.com | pw \ngarbage \n").unwrap();

        match TextStore::new(path).load() {
            Err(StoreError::FormatError(line, _)) => assert_eq!(line, 2),
            other => panic!("expected format error, got {:?}", other),
        }
    }

    #[test]
    fn append_into_missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = TextStore::new(dir.path().join("missing").join("passwords_saved.dat"));

        assert!(matches!(
            store.append(&record("a.com", "pw")),
            Err(StoreError::IoError(_))
        ));
    }
}
