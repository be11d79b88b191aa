// src/cli/handlers.rs
use console::style;
use inquire::{Confirm, Password, PasswordDisplayMode};

use crate::cli::CliCommand;
use crate::core::{Passbook, SaveError};
use crate::models::CredentialRecord;
use crate::store::StoreError;
use crate::utils::{mask, truncate_string};
use crate::validation;

// Handlers for one-shot commands
pub fn run_command(book: &Passbook, command: CliCommand) -> anyhow::Result<()> {
    match command {
        CliCommand::Generate { count } => {
            for password in handle_generate(book, count) {
                println!("{}", password);
            }
        }
        CliCommand::Add {
            website,
            email,
            password,
            generate,
            yes,
        } => {
            let email = email
                .or_else(|| book.default_email().map(String::from))
                .unwrap_or_default();

            let password = match password {
                Some(password) => password,
                None if generate => {
                    let password = book.generate_password();
                    println!("Generated password: {}", password);
                    password
                }
                None => Password::new("Password:")
                    .with_display_mode(PasswordDisplayMode::Masked)
                    .with_display_toggle_enabled()
                    .without_confirmation()
                    .prompt()?,
            };

            let result = handle_add(book, &website, &email, &password, yes);

            match result {
                Ok(record) => println!(
                    "{} Saved {} to {}",
                    style("✅").green(),
                    record.website,
                    book.store_path().display()
                ),
                Err(SaveError::UserCancelled) => println!("Nothing saved."),
                Err(SaveError::DuplicatePassword) => {
                    eprintln!("That password is already stored, skipping save.")
                }
                Err(e) => return Err(anyhow::Error::new(e).context("Could not save record")),
            }
        }
        CliCommand::List {
            json,
            show_passwords,
        } => {
            let records = handle_list(book)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else if records.is_empty() {
                println!("❗ No passwords stored yet.");
            } else {
                print!("{}", render_records(&records, show_passwords));
            }
        }
    }

    Ok(())
}

pub fn handle_generate(book: &Passbook, count: usize) -> Vec<String> {
    (0..count.max(1)).map(|_| book.generate_password()).collect()
}

/// Same as the form: the email has to look like an address before anything
/// is saved. `skip_confirm` saves without showing the summary prompt.
pub fn handle_add(
    book: &Passbook,
    website: &str,
    email: &str,
    password: &str,
    skip_confirm: bool,
) -> Result<CredentialRecord, SaveError> {
    if !email.is_empty() {
        validation::validate_email(email)?;
    }
    if skip_confirm {
        book.save(website, email, password)
    } else {
        book.save_confirmed(website, email, password, confirm_details)
    }
}

pub fn handle_list(book: &Passbook) -> Result<Vec<CredentialRecord>, StoreError> {
    book.records()
}

pub fn confirm_details(record: &CredentialRecord) -> bool {
    println!("\nWebsite:        {}", record.website);
    println!("Email/Username: {}", record.email);
    println!("Password:       {}", mask(&record.password));

    match Confirm::new("Are the details correct?")
        .with_help_message("Please confirm that the details you have entered are correct.")
        .with_default(true)
        .prompt()
    {
        Ok(answer) => answer,
        Err(e) => {
            log::debug!("Confirmation prompt ended: {}", e);
            false
        }
    }
}

pub fn render_records(records: &[CredentialRecord], show_passwords: bool) -> String {
    let mut out = format!(
        "{:<14}  {:<30}  {:<30}  {}\n",
        "Date", "Website", "Email", "Password"
    );
    for record in records {
        let password = if show_passwords {
            record.password.clone()
        } else {
            mask(&record.password)
        };
        out.push_str(&format!(
            "{:<14}  {:<30}  {:<30}  {}\n",
            record.timestamp,
            truncate_string(&record.website, 30),
            truncate_string(&record.email, 30),
            password
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::PasswordGenerator;
    use crate::store::TextStore;
    use crate::system::NoClipboard;
    use crate::validation::ValidationError;

    fn book(dir: &tempfile::TempDir) -> Passbook {
        Passbook::new(
            PasswordGenerator::default(),
            Box::new(TextStore::new(dir.path().join("passwords_saved.dat"))),
            Box::new(NoClipboard),
            None,
        )
    }

    #[test]
    fn add_rejects_malformed_email() {
        let dir = tempfile::tempdir().unwrap();
        let book = book(&dir);

        let result = handle_add(&book, "site", "not-an-email", "pw", true);
        assert!(matches!(
            result,
            Err(SaveError::Validation(ValidationError::InvalidEmail(_)))
        ));
        assert!(handle_list(&book).unwrap().is_empty());
    }

    #[test]
    fn add_reports_missing_email_as_missing_field() {
        let dir = tempfile::tempdir().unwrap();
        let book = book(&dir);

        let result = handle_add(&book, "site", "", "pw", true);
        assert!(matches!(
            result,
            Err(SaveError::Validation(ValidationError::MissingField(_)))
        ));
    }

    #[test]
    fn add_then_list() {
        let dir = tempfile::tempdir().unwrap();
        let book = book(&dir);

        handle_add(&book, "example.com", "e@x.com", "pw!", true).unwrap();
        let records = handle_list(&book).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].website, "example.com");
    }

    #[test]
    fn generate_returns_requested_count() {
        let dir = tempfile::tempdir().unwrap();
        let book = book(&dir);

        assert_eq!(handle_generate(&book, 3).len(), 3);
        assert_eq!(handle_generate(&book, 0).len(), 1);
    }

    #[test]
    fn rendered_table_masks_passwords_by_default() {
        let records = vec![CredentialRecord {
            timestamp: "05/01/25 14:30".to_string(),
            website: "example.com".to_string(),
            email: "e@x.com".to_string(),
            password: "hunter2".to_string(),
        }];

        let masked = render_records(&records, false);
        assert!(masked.contains("*******"));
        assert!(!masked.contains("hunter2"));
        assert!(render_records(&records, true).contains("hunter2"));
    }
}
