// src/store/csv.rs
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::{check_timestamp, RecordStore, Result, StoreError};
use crate::models::CredentialRecord;

const DELIMITER: char = ',';
const HEADER: [&str; 5] = ["", "Date", "Website", "Email", "Password"];

/// Indexed table of records. The first column is the row index and the
/// header cell above it is empty. A password may appear at most once.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_content(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    // None when the file holds nothing but whitespace
    fn read_rows(content: &str) -> Result<Option<Vec<(usize, Vec<String>)>>> {
        if content.trim().is_empty() {
            return Ok(None);
        }

        let mut rows = parse_rows(content)?.into_iter();
        match rows.next() {
            Some((_, header)) if header == HEADER => {}
            Some((line, _)) => {
                return Err(StoreError::FormatError(line, "unexpected header row".to_string()))
            }
            None => return Ok(None),
        }
        Ok(Some(rows.collect()))
    }

    fn row_to_record(line: usize, row: Vec<String>) -> Result<CredentialRecord> {
        let [_index, timestamp, website, email, password]: [String; 5] =
            row.try_into().map_err(|row: Vec<String>| {
                StoreError::FormatError(line, format!("expected 5 columns, found {}", row.len()))
            })?;

        check_timestamp(line, &timestamp)?;

        Ok(CredentialRecord {
            timestamp,
            website,
            email,
            password,
        })
    }
}

impl RecordStore for CsvStore {
    fn path(&self) -> &Path {
        &self.path
    }

    // Duplicate check reads every stored row.
    fn append(&self, record: &CredentialRecord) -> Result<()> {
        let content = self.read_content()?;
        let rows = match &content {
            Some(content) => Self::read_rows(content)?,
            None => None,
        };

        let mut out = String::new();
        let index = match &rows {
            Some(rows) => {
                if rows.iter().any(|(_, row)| row.get(4) == Some(&record.password)) {
                    log::warn!(
                        "Password for {} already exists in {}, not saving",
                        record.website,
                        self.path.display()
                    );
                    return Err(StoreError::DuplicatePassword);
                }
                if content.as_deref().map_or(false, |c| !c.ends_with('\n')) {
                    out.push('\n');
                }
                rows.len()
            }
            None => {
                log::info!("Creating {} with header row", self.path.display());
                out.push_str(&format_row(&HEADER));
                0
            }
        };

        let index = index.to_string();
        out.push_str(&format_row(&[
            index.as_str(),
            record.timestamp.as_str(),
            record.website.as_str(),
            record.email.as_str(),
            record.password.as_str(),
        ]));

        if rows.is_none() {
            // Blank or missing file: start over with the header
            fs::write(&self.path, out.as_bytes())?;
        } else {
            let mut file = OpenOptions::new().append(true).open(&self.path)?;
            file.write_all(out.as_bytes())?;
        }
        log::info!("Saved credentials for {} to {}", record.website, self.path.display());

        Ok(())
    }

    fn load(&self) -> Result<Vec<CredentialRecord>> {
        let rows = match self.read_content()? {
            Some(content) => Self::read_rows(&content)?,
            None => None,
        };
        match rows {
            Some(rows) => rows
                .into_iter()
                .map(|(line, row)| Self::row_to_record(line, row))
                .collect(),
            None => Ok(Vec::new()),
        }
    }
}

fn escape(cell: &str) -> String {
    if cell.contains(|c: char| c == DELIMITER || c == '"' || c == '\n' || c == '\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn format_row(cells: &[&str]) -> String {
    let mut line = cells
        .iter()
        .map(|c| escape(c))
        .collect::<Vec<_>>()
        .join(&DELIMITER.to_string());
    line.push('\n');
    line
}

// Rows are paired with the line number they start on.
fn parse_rows(content: &str) -> Result<Vec<(usize, Vec<String>)>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut row_start = 1;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    cell.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    cell.push(c);
                }
                _ => cell.push(c),
            }
            continue;
        }

        match c {
            '"' if cell.is_empty() => in_quotes = true,
            c if c == DELIMITER => row.push(std::mem::take(&mut cell)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                row.push(std::mem::take(&mut cell));
                rows.push((row_start, std::mem::take(&mut row)));
                line += 1;
                row_start = line;
            }
            _ => cell.push(c),
        }
    }

    if in_quotes {
        return Err(StoreError::FormatError(row_start, "unterminated quoted cell".to_string()));
    }
    if !cell.is_empty() || !row.is_empty() {
        row.push(cell);
        rows.push((row_start, row));
    }

    Ok(rows)
}
