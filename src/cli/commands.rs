// src/cli/commands.rs
use clap::Subcommand;
use std::fmt;

#[derive(Subcommand)]
pub enum CliCommand {
    /// Generate a password and copy it to the clipboard
    Generate {
        /// How many passwords to print (the last one is left on the clipboard)
        #[arg(long, short, default_value_t = 1)]
        count: usize,
    },

    /// Save a website, email and password
    Add {
        /// Website or service
        #[arg(long, short, required = true)]
        website: String,

        /// Email or username (falls back to DEFAULT_EMAIL)
        #[arg(long, short)]
        email: Option<String>,

        /// Password to store (prompted for when omitted)
        #[arg(long, short, conflicts_with = "generate")]
        password: Option<String>,

        /// Generate the password instead of entering one
        #[arg(long, short)]
        generate: bool,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// List saved records
    List {
        /// Print records as JSON
        #[arg(long)]
        json: bool,

        /// Show passwords instead of masking them
        #[arg(long)]
        show_passwords: bool,
    },
}

// Written by hand so a password given on the command line never reaches the log
impl fmt::Debug for CliCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliCommand::Generate { count } => {
                f.debug_struct("Generate").field("count", count).finish()
            }
            CliCommand::Add {
                website,
                email,
                password,
                generate,
                yes,
            } => f
                .debug_struct("Add")
                .field("website", website)
                .field("email", email)
                .field("password", &password.as_ref().map(|_| "<redacted>"))
                .field("generate", generate)
                .field("yes", yes)
                .finish(),
            CliCommand::List {
                json,
                show_passwords,
            } => f
                .debug_struct("List")
                .field("json", json)
                .field("show_passwords", show_passwords)
                .finish(),
        }
    }
}
