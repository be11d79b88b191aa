// src/core/mod.rs
pub mod config;
pub mod passbook;

pub use passbook::{Passbook, SaveError};
