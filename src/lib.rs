//! Folio: a daemonless, local-first portfolio content store.
//!
//! One JSON document holds the whole portfolio — about, experience,
//! projects, services, contact — and lives in a `.folio/data` directory
//! next to your content. Every mutation goes through the content store and
//! is persisted immediately; there is no server, no daemon, and no
//! database.
//!
//! # Model
//!
//! - **Singleton sections** (`about`, `contact`) are replaced wholesale:
//!   an edit submits the entire new record.
//! - **Collection sections** (`experience`, `projects`, `services`) hold
//!   ordered, id-addressed items with add / edit (shallow merge) / remove /
//!   move operations. Ids are assigned at add time and never reassigned.
//! - **Import** replaces the whole document after a shallow structural
//!   check (required sections present); it fails closed.
//! - **Export** writes a timestamped snapshot of the same JSON.
//!
//! # Layout
//!
//! - [`core`]: document schema, content store, persisted store adapter,
//!   validation, shared helpers
//! - [`sections`]: the CLI surfaces (the only consumers of the store)
//!
//! ```bash
//! folio init
//! folio experience add "Acme Corp" --position "Engineer"
//! folio projects list
//! folio data export
//! ```

pub mod core;
pub mod sections;

use crate::core::document::ContentStore;
use crate::core::store::{DOCUMENT_KEY, Store};
use crate::core::{error, schema, time};
use crate::sections::{
    OutputFormat, about, contact, experience, prefs, projects, services, transfer,
};

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "folio",
    version = env!("CARGO_PKG_VERSION"),
    about = "Folio is a daemonless, local-first portfolio content store: one JSON document, edited section by section, persisted on every mutation. 🗂️"
)]
struct Cli {
    /// Project directory holding (or to hold) `.folio/data`. Defaults to
    /// the nearest initialized ancestor of the current directory.
    #[clap(long, global = true)]
    dir: Option<PathBuf>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug)]
struct InitCli {
    /// Reseed with the default document even if one already exists.
    #[clap(long)]
    force: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create `.folio/data` and seed it with the default document.
    Init(InitCli),

    /// Print the current document.
    Show {
        #[clap(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Edit the 'about' section.
    About(about::AboutCli),

    /// Edit the 'experience' collection.
    Experience(experience::ExperienceCli),

    /// Edit the 'projects' collection.
    Projects(projects::ProjectsCli),

    /// Edit the optional 'services' collection.
    Services(services::ServicesCli),

    /// Edit the 'contact' section.
    Contact(contact::ContactCli),

    /// Import, export, and reset the whole document.
    Data(transfer::DataCli),

    /// Display preference (dark mode).
    Theme(prefs::ThemeCli),

    /// Print the binary version.
    Version,
}

pub fn run() -> Result<(), error::FolioError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Version => {
            println!("v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Init(init) => run_init(cli.dir, init),
        Command::Theme(theme_cli) => {
            let store = Store::resolve(cli.dir.as_deref())?;
            prefs::run_theme_cli(&store, theme_cli)
        }
        command => {
            let store = Store::resolve(cli.dir.as_deref())?;
            let mut content = ContentStore::open(store);
            match command {
                Command::Show { format } => {
                    let document = content.document();
                    match format {
                        OutputFormat::Json => {
                            let out = time::command_envelope(
                                "show",
                                "ok",
                                serde_json::json!({ "document": document }),
                            );
                            println!("{}", serde_json::to_string_pretty(&out)?);
                        }
                        OutputFormat::Text => {
                            println!("{}", serde_json::to_string_pretty(document)?);
                        }
                    }
                    Ok(())
                }
                Command::About(about_cli) => about::run_about_cli(&mut content, about_cli),
                Command::Experience(experience_cli) => {
                    experience::run_experience_cli(&mut content, experience_cli)
                }
                Command::Projects(projects_cli) => {
                    projects::run_projects_cli(&mut content, projects_cli)
                }
                Command::Services(services_cli) => {
                    services::run_services_cli(&mut content, services_cli)
                }
                Command::Contact(contact_cli) => {
                    contact::run_contact_cli(&mut content, contact_cli)
                }
                Command::Data(data_cli) => transfer::run_data_cli(&mut content, data_cli),
                // Handled above; unreachable by construction.
                Command::Init(_) | Command::Theme(_) | Command::Version => Ok(()),
            }
        }
    }
}

fn run_init(dir: Option<PathBuf>, init: InitCli) -> Result<(), error::FolioError> {
    let target_dir = match dir {
        Some(d) => d,
        None => std::env::current_dir()?,
    };
    let store = Store::rooted_in(&target_dir);

    if store.entry_path(DOCUMENT_KEY).exists() && !init.force {
        println!(
            "{} {} already holds a portfolio; use {} to reseed",
            "▸".bright_yellow(),
            store.root.display(),
            "--force".bright_cyan().bold()
        );
        return Ok(());
    }

    std::fs::create_dir_all(&store.root)?;
    let text = serde_json::to_string_pretty(&schema::default_document())?;
    std::fs::write(store.entry_path(DOCUMENT_KEY), text)?;

    println!(
        "{} seeded default portfolio at {}",
        "▸".bright_green().bold(),
        store.entry_path(DOCUMENT_KEY).display()
    );
    println!(
        "  edit with {}, {}, {} ...",
        "folio about set".bright_cyan(),
        "folio experience add".bright_cyan(),
        "folio projects add".bright_cyan()
    );
    Ok(())
}
