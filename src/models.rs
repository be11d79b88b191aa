// src/models.rs
use chrono::{DateTime, Local};
use serde::{Serialize, Deserialize};

use crate::utils::format_timestamp;

// A single saved credential, as written to the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub timestamp: String,
    pub website: String,
    pub email: String,
    pub password: String,
}

impl CredentialRecord {
    pub fn new(website: &str, email: &str, password: &str, at: DateTime<Local>) -> Self {
        Self {
            timestamp: format_timestamp(at),
            website: website.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

/// Inclusive range for how many characters of one class go into a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRange {
    pub min: usize,
    pub max: usize,
}

impl ClassRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordGenerationOptions {
    pub lowercase: ClassRange,
    pub uppercase: ClassRange,
    pub punctuation: ClassRange,
    pub digits: ClassRange,
    pub shuffle: bool,
}

impl PasswordGenerationOptions {
    pub fn max_length(&self) -> usize {
        self.lowercase.max + self.uppercase.max + self.punctuation.max + self.digits.max
    }
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            lowercase: ClassRange::new(4, 6),
            uppercase: ClassRange::new(2, 4),
            punctuation: ClassRange::new(2, 4),
            digits: ClassRange::new(2, 4),
            shuffle: true,
        }
    }
}
