// src/cli/mod.rs
use clap::Parser;
use std::path::PathBuf;

use crate::core::config::Config;
use crate::store::StoreFormat;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate passwords and keep a log of saved credentials", long_about = None)]
pub struct Args {
    /// File the records are appended to
    #[arg(long, short, env = "PASSBOOK_STORE")]
    pub store: Option<PathBuf>,

    /// Store layout
    #[arg(long, short, value_enum)]
    pub format: Option<StoreFormat>,

    /// Do not copy generated passwords to the clipboard
    #[arg(long)]
    pub no_clipboard: bool,

    /// Command to execute (interactive form when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl Args {
    // Flags win over whatever the environment set
    pub fn apply(&self, config: &mut Config) {
        if let Some(format) = self.format {
            config.store_format = format;
        }
        if let Some(store) = &self.store {
            config.store_path = Some(store.clone());
        }
        if self.no_clipboard {
            config.clipboard_enabled = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = Args::try_parse_from([
            "passbook",
            "--format",
            "csv",
            "--store",
            "mine.csv",
            "--no-clipboard",
            "list",
        ])
        .unwrap();

        let mut config = Config::default();
        args.apply(&mut config);

        assert_eq!(config.store_format, StoreFormat::Csv);
        assert_eq!(config.get_store_path(), PathBuf::from("mine.csv"));
        assert!(!config.clipboard_enabled);
        assert!(matches!(args.command, Some(CliCommand::List { .. })));
    }

    #[test]
    fn no_flags_leave_config_alone() {
        let args = Args::try_parse_from(["passbook"]).unwrap();
        let mut config = Config {
            store_format: StoreFormat::Csv,
            ..Config::default()
        };
        args.apply(&mut config);

        assert_eq!(config.store_format, StoreFormat::Csv);
        assert!(config.clipboard_enabled);
        assert!(args.command.is_none());
    }

    #[test]
    fn debug_output_hides_password() {
        let args = Args::try_parse_from([
            "passbook",
            "add",
            "--website",
            "example.com",
            "--password",
            "hunter2",
        ])
        .unwrap();

        let logged = format!("{:?}", args);
        assert!(!logged.contains("hunter2"));
        assert!(logged.contains("<redacted>"));
        assert!(logged.contains("example.com"));
    }
}
