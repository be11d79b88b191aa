// src/validation.rs
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

// Accepts some invalid addresses; the form has always gated on exactly this.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$";

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(EMAIL_PATTERN).expect("email pattern compiles");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Website,
    Email,
    Password,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Website => write!(f, "website"),
            Field::Email => write!(f, "email"),
            Field::Password => write!(f, "password"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All boxes must be filled out: {0} is empty")]
    MissingField(Field),

    #[error("Not a valid email address: {0}")]
    InvalidEmail(String),
}

pub type Result<T> = std::result::Result<T, ValidationError>;

/// Fails on the first empty field, in form order.
pub fn require_fields(website: &str, email: &str, password: &str) -> Result<()> {
    for (field, value) in [
        (Field::Website, website),
        (Field::Email, email),
        (Field::Password, password),
    ] {
        if value.is_empty() {
            return Err(ValidationError::MissingField(field));
        }
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_email(email: &str) -> Result<()> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_reported_in_order() {
        assert_eq!(
            require_fields("", "", ""),
            Err(ValidationError::MissingField(Field::Website))
        );
        assert_eq!(
            require_fields("site", "", "pw"),
            Err(ValidationError::MissingField(Field::Email))
        );
        assert_eq!(
            require_fields("site", "e@x.com", ""),
            Err(ValidationError::MissingField(Field::Password))
        );
        assert!(require_fields("site", "e@x.com", "pw").is_ok());
    }

    #[test]
    fn whitespace_counts_as_content() {
        assert!(require_fields(" ", "e@x.com", "pw").is_ok());
    }

    #[test]
    fn email_pattern_accepts_common_addresses() {
        for email in ["e@x.com", "first.last+tag@mail-host.co.uk", "a_b@c.d"] {
            assert!(is_valid_email(email), "{email} should pass");
        }
    }

    #[test]
    fn email_pattern_rejects_malformed_addresses() {
        for email in ["e@x", "@x.com", "e x@y.com", "e@@x.com", "e@x.com ", ""] {
            assert!(!is_valid_email(email), "{email:?} should fail");
        }
        assert_eq!(
            validate_email("nope"),
            Err(ValidationError::InvalidEmail("nope".to_string()))
        );
    }
}
