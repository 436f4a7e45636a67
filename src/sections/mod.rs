//! Command surfaces, one module per portfolio section plus data transfer
//! and display preferences.
//!
//! These are the only consumers of `core::document::ContentStore`. They
//! never touch persisted storage directly; every mutation goes through a
//! store operation.

use clap::ValueEnum;

pub mod about;
pub mod contact;
pub mod experience;
pub mod prefs;
pub mod projects;
pub mod services;
pub mod transfer;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
