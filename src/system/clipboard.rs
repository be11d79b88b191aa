// src/system/clipboard.rs
use std::io::Write;
use std::process::{Command, Stdio};

use super::{Result, SystemError};

/// Destination for generated passwords.
pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<()>;
}

// Tried in order; the first one that spawns wins.
const BACKENDS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("clip", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Pipes text into whichever platform clipboard tool is installed.
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        SystemClipboard
    }

    fn pipe_into(program: &str, args: &[&str], text: &str) -> Result<()> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }

        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(SystemError::CommandError(format!("{} exited with {}", program, status)))
        }
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        for (program, args) in BACKENDS {
            match Self::pipe_into(program, args, text) {
                Ok(()) => {
                    log::debug!("Copied to clipboard via {}", program);
                    return Ok(());
                }
                Err(SystemError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                    continue;
                }
                Err(e) => return Err(e),
            }
        }
        Err(SystemError::NoClipboard)
    }
}

/// Used when clipboard copying is switched off.
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn copy(&self, _text: &str) -> Result<()> {
        log::debug!("Clipboard disabled, not copying");
        Ok(())
    }
}
