// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::models::PasswordGenerationOptions;
use crate::store::StoreFormat;

// Configuration for the password book
#[derive(Debug, Clone)]
pub struct Config {
    // Store
    pub store_format: StoreFormat,
    pub store_path: Option<PathBuf>,

    // Form
    pub default_email: Option<String>,

    // Password Generation
    pub password_shuffle: bool,
    pub clipboard_enabled: bool,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,

    // Problems found while loading, logged once the logger is up
    pub load_warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Store
            store_format: StoreFormat::Text,
            store_path: None, // Derived from the format unless set

            // Form
            default_email: None,

            // Password Generation
            password_shuffle: true,
            clipboard_enabled: true,

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,

            load_warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::load_from(|key| env::var(key).ok())
    }

    pub fn load_from<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Store
        if let Some(format) = var("PASSBOOK_FORMAT") {
            match format.parse() {
                Ok(format) => config.store_format = format,
                Err(e) => config
                    .load_warnings
                    .push(format!("PASSBOOK_FORMAT: {}, using {:?}", e, config.store_format)),
            }
        }

        if let Some(path) = var("PASSBOOK_STORE") {
            if !path.trim().is_empty() {
                config.store_path = Some(PathBuf::from(path));
            }
        }

        // Form
        if let Some(email) = var("DEFAULT_EMAIL") {
            if !email.trim().is_empty() {
                config.default_email = Some(email.trim().to_string());
            }
        }

        // Password Generation
        if let Some(val) = var("PASSWORD_SHUFFLE") {
            match val.parse() {
                Ok(shuffle) => config.password_shuffle = shuffle,
                Err(_) => config
                    .load_warnings
                    .push(format!("PASSWORD_SHUFFLE: ignoring '{}'", val)),
            }
        }

        if let Some(val) = var("CLIPBOARD_ENABLED") {
            match val.parse() {
                Ok(enabled) => config.clipboard_enabled = enabled,
                Err(_) => config
                    .load_warnings
                    .push(format!("CLIPBOARD_ENABLED: ignoring '{}'", val)),
            }
        }

        // Logging
        if let Some(level) = var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => config
                    .load_warnings
                    .push(format!("LOG_LEVEL: ignoring '{}'", level)),
            }
        }

        if let Some(file) = var("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    // Explicit path wins, otherwise the format's conventional file name
    pub fn get_store_path(&self) -> PathBuf {
        self.store_path
            .clone()
            .unwrap_or_else(|| self.store_format.default_path())
    }

    pub fn generation_options(&self) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            shuffle: self.password_shuffle,
            ..PasswordGenerationOptions::default()
        }
    }
}
