// src/system/mod.rs
use thiserror::Error;

pub mod clipboard;
pub use clipboard::{Clipboard, NoClipboard, SystemClipboard};

#[derive(Error, Debug)]
pub enum SystemError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to execute command: {0}")]
    CommandError(String),

    #[error("No clipboard tool found (tried pbcopy, clip, wl-copy, xclip, xsel)")]
    NoClipboard,
}

pub type Result<T> = std::result::Result<T, SystemError>;
