//! Display preferences. A single boolean entry (`dark-mode`) that shares
//! the storage mechanism with the document but is otherwise unrelated to
//! the content store.

use crate::core::error::FolioError;
use crate::core::store::{DARK_MODE_KEY, Store};
use crate::core::time::command_envelope;
use crate::sections::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(name = "theme", about = "Toggle the dark-mode display preference.")]
pub struct ThemeCli {
    /// Output format for this command group.
    #[clap(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,
    #[clap(subcommand)]
    command: ThemeCommand,
}

#[derive(Subcommand, Debug)]
pub enum ThemeCommand {
    /// Switch to the dark theme.
    Dark,
    /// Switch to the light theme.
    Light,
    /// Show the current preference.
    Show,
}

pub fn run_theme_cli(store: &Store, cli: ThemeCli) -> Result<(), FolioError> {
    let dark = match cli.command {
        ThemeCommand::Dark => {
            store.write(DARK_MODE_KEY, &true);
            true
        }
        ThemeCommand::Light => {
            store.write(DARK_MODE_KEY, &false);
            false
        }
        ThemeCommand::Show => store.read(DARK_MODE_KEY, false),
    };

    match cli.format {
        OutputFormat::Json => {
            let out = command_envelope("theme", "ok", serde_json::json!({ "dark": dark }));
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => {
            println!("theme: {}", if dark { "dark" } else { "light" });
        }
    }
    Ok(())
}
