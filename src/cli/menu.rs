// src/cli/menu.rs
use console::style;
use inquire::validator::Validation;
use inquire::{Confirm, InquireError, Password, PasswordDisplayMode, Text};

use crate::cli::handlers::confirm_details;
use crate::core::{Passbook, SaveError};
use crate::models::CredentialRecord;
use crate::store::StoreError;
use crate::validation;

/// Field values carried between rounds of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub website: String,
    pub email: String,
    pub password: String,
}

/// What the form tells the user after a save attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum Feedback {
    Saved(String),
    Cancelled,
    Invalid(String),
    Duplicate,
}

impl FormState {
    pub fn new(default_email: Option<&str>) -> Self {
        Self {
            email: default_email.unwrap_or_default().to_string(),
            ..Self::default()
        }
    }

    /// Fields are cleared only after a successful save; otherwise they are kept
    /// for correction. Store failures are returned to the caller.
    pub fn apply(
        &mut self,
        result: Result<CredentialRecord, SaveError>,
        default_email: Option<&str>,
    ) -> Result<Feedback, StoreError> {
        match result {
            Ok(record) => {
                *self = FormState::new(default_email);
                Ok(Feedback::Saved(record.website))
            }
            Err(SaveError::UserCancelled) => Ok(Feedback::Cancelled),
            Err(SaveError::Validation(e)) => Ok(Feedback::Invalid(e.to_string())),
            Err(SaveError::DuplicatePassword) => {
                self.password.clear();
                Ok(Feedback::Duplicate)
            }
            Err(SaveError::Store(e @ StoreError::InvalidField(..))) => {
                Ok(Feedback::Invalid(e.to_string()))
            }
            Err(SaveError::Store(e)) => Err(e),
        }
    }
}

fn email_validator(
    input: &str,
) -> Result<Validation, Box<dyn std::error::Error + Send + Sync>> {
    if validation::is_valid_email(input) {
        Ok(Validation::Valid)
    } else {
        Ok(Validation::Invalid("Enter an email address like name@example.com".into()))
    }
}

// Escape or Ctrl+C on any prompt closes the form
fn closed(e: &InquireError) -> bool {
    matches!(
        e,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

pub fn run_form(book: &Passbook) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║          🔐 PASSWORD BOOK            ║");
    println!("╚══════════════════════════════════════╝");
    println!("Saving to {}", book.store_path().display());

    let mut state = FormState::new(book.default_email());

    loop {
        match fill_form(book, &mut state) {
            Ok(()) => {}
            Err(e) if closed(&e) => break,
            Err(e) => return Err(e.into()),
        }

        let result = book.save_confirmed(&state.website, &state.email, &state.password, |record| {
            confirm_details(record)
        });

        match state.apply(result, book.default_email())? {
            Feedback::Saved(website) => {
                println!("{} Saved details for {}", style("✅").green(), website)
            }
            Feedback::Cancelled => log::info!("Details not confirmed, keeping the form"),
            Feedback::Invalid(message) => println!("{} {}", style("❌").red(), message),
            Feedback::Duplicate => eprintln!("That password is already stored, skipping save."),
        }

        match Confirm::new("Add another?").with_default(true).prompt() {
            Ok(true) => continue,
            Ok(false) => break,
            Err(e) if closed(&e) => break,
            Err(e) => return Err(e.into()),
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn fill_form(book: &Passbook, state: &mut FormState) -> Result<(), InquireError> {
    state.website = Text::new("Website:")
        .with_initial_value(&state.website)
        .prompt()?;

    state.email = Text::new("Email/Username:")
        .with_initial_value(&state.email)
        .with_validator(email_validator)
        .prompt()?;

    let generate = Confirm::new("Generate a password?")
        .with_default(state.password.is_empty())
        .prompt()?;

    if generate {
        state.password = book.generate_password();
        println!("Generated password: {} (copied to clipboard)", style(&state.password).bold());
    } else {
        state.password = Password::new("Password:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .with_display_toggle_enabled()
            .with_help_message("Ctrl+R shows the password")
            .without_confirmation()
            .prompt()?;
    }

    Ok(())
}
