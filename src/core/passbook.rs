// src/core/passbook.rs
use chrono::Local;
use std::path::Path;
use thiserror::Error;

use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::CredentialRecord;
use crate::store::{self, RecordStore, StoreError};
use crate::system::{Clipboard, NoClipboard, SystemClipboard};
use crate::validation::{self, ValidationError};

#[derive(Debug, Error)]
pub enum SaveError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Save cancelled")]
    UserCancelled,

    #[error("Password is already stored, skipping save")]
    DuplicatePassword,

    #[error("Store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for SaveError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicatePassword => SaveError::DuplicatePassword,
            other => SaveError::Store(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, SaveError>;

/// Application state shared by every front end: generator, store and clipboard.
pub struct Passbook {
    generator: PasswordGenerator,
    store: Box<dyn RecordStore>,
    clipboard: Box<dyn Clipboard>,
    default_email: Option<String>,
}

impl Passbook {
    pub fn new(
        generator: PasswordGenerator,
        store: Box<dyn RecordStore>,
        clipboard: Box<dyn Clipboard>,
        default_email: Option<String>,
    ) -> Self {
        Self {
            generator,
            store,
            clipboard,
            default_email,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let clipboard: Box<dyn Clipboard> = if config.clipboard_enabled {
            Box::new(SystemClipboard::new())
        } else {
            Box::new(NoClipboard)
        };

        Self::new(
            PasswordGenerator::new(config.generation_options()),
            store::open_store(config.store_format, config.get_store_path()),
            clipboard,
            config.default_email.clone(),
        )
    }

    pub fn default_email(&self) -> Option<&str> {
        self.default_email.as_deref()
    }

    pub fn store_path(&self) -> &Path {
        self.store.path()
    }

    /// Generates a password and copies it to the clipboard.
    /// A clipboard failure is logged; the password is still returned.
    pub fn generate_password(&self) -> String {
        let password = self.generator.generate();
        if let Err(e) = self.clipboard.copy(&password) {
            log::warn!("Could not copy password to clipboard: {}", e);
        }
        password
    }

    pub fn save(&self, website: &str, email: &str, password: &str) -> Result<CredentialRecord> {
        self.save_confirmed(website, email, password, |_| true)
    }

    /// `confirm` sees the record before it is written; returning false aborts
    /// with `UserCancelled` and nothing is stored.
    pub fn save_confirmed<F>(
        &self,
        website: &str,
        email: &str,
        password: &str,
        confirm: F,
    ) -> Result<CredentialRecord>
    where
        F: FnOnce(&CredentialRecord) -> bool,
    {
        if let Err(e) = validation::require_fields(website, email, password) {
            log::info!("Rejected save: {}", e);
            return Err(e.into());
        }

        let record = CredentialRecord::new(website, email, password, Local::now());

        if !confirm(&record) {
            log::info!("Save for {} declined", website);
            return Err(SaveError::UserCancelled);
        }

        self.store.append(&record)?;
        Ok(record)
    }

    pub fn records(&self) -> std::result::Result<Vec<CredentialRecord>, StoreError> {
        self.store.load()
    }
}
