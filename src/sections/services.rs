use crate::core::document::ContentStore;
use crate::core::error::FolioError;
use crate::core::output;
use crate::core::schema::{ServiceEntry, ServicePatch};
use crate::core::time::command_envelope;
use crate::sections::OutputFormat;
use clap::{Parser, Subcommand};
use serde_json::Value as JsonValue;

#[derive(Parser, Debug)]
#[clap(name = "services", about = "Edit the optional 'services' collection of the portfolio.")]
pub struct ServicesCli {
    /// Output format for this command group.
    #[clap(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,
    #[clap(subcommand)]
    command: ServicesCommand,
}

#[derive(Subcommand, Debug)]
pub enum ServicesCommand {
    /// Append a service entry (id is assigned by the store).
    Add {
        #[clap(value_name = "TITLE")]
        title: String,
        #[clap(long, default_value = "")]
        description: String,
        /// Glyph shown next to the title.
        #[clap(long, default_value = "")]
        icon: String,
        /// Repeatable; listed in order.
        #[clap(long = "feature")]
        features: Vec<String>,
        #[clap(long, default_value = "")]
        pricing: String,
        #[clap(long, default_value = "")]
        duration: String,
    },
    /// List entries in display order.
    List,
    /// Get one entry by id.
    Get {
        #[clap(long)]
        id: String,
    },
    /// Shallow-merge changes onto an entry; omitted flags keep their value.
    Edit {
        #[clap(long)]
        id: String,
        #[clap(long)]
        title: Option<String>,
        #[clap(long)]
        description: Option<String>,
        #[clap(long)]
        icon: Option<String>,
        /// Repeatable; when given, replaces the whole list.
        #[clap(long = "feature")]
        features: Vec<String>,
        #[clap(long)]
        pricing: Option<String>,
        #[clap(long)]
        duration: Option<String>,
    },
    /// Remove an entry by id (no-op when absent).
    Remove {
        #[clap(long)]
        id: String,
    },
    /// Move an entry from one position to another.
    Move {
        #[clap(long)]
        from: usize,
        #[clap(long)]
        to: usize,
    },
}

pub fn run_services_cli(content: &mut ContentStore, cli: ServicesCli) -> Result<(), FolioError> {
    let out = match &cli.command {
        ServicesCommand::Add {
            title,
            description,
            icon,
            features,
            pricing,
            duration,
        } => {
            let id = content.add_service(ServiceEntry {
                id: String::new(),
                title: title.clone(),
                description: description.clone(),
                icon: icon.clone(),
                features: features.clone(),
                pricing: pricing.clone(),
                duration: duration.clone(),
            });
            command_envelope("services.add", "ok", serde_json::json!({ "id": id }))
        }
        ServicesCommand::List => command_envelope(
            "services.list",
            "ok",
            serde_json::json!({ "items": content.document().services }),
        ),
        ServicesCommand::Get { id } => {
            let entry = content.document().services.iter().find(|s| s.id == *id);
            command_envelope(
                "services.get",
                if entry.is_some() { "ok" } else { "not_found" },
                serde_json::json!({ "item": entry }),
            )
        }
        ServicesCommand::Edit {
            id,
            title,
            description,
            icon,
            features,
            pricing,
            duration,
        } => {
            let patch = ServicePatch {
                title: title.clone(),
                description: description.clone(),
                icon: icon.clone(),
                features: if features.is_empty() {
                    None
                } else {
                    Some(features.clone())
                },
                pricing: pricing.clone(),
                duration: duration.clone(),
            };
            let status = if content.update_service(id, patch) {
                "ok"
            } else {
                "not_found"
            };
            command_envelope("services.edit", status, serde_json::json!({ "id": id }))
        }
        ServicesCommand::Remove { id } => {
            let status = if content.remove_service(id) {
                "ok"
            } else {
                "not_found"
            };
            command_envelope("services.remove", status, serde_json::json!({ "id": id }))
        }
        ServicesCommand::Move { from, to } => {
            let status = if content.move_service(*from, *to) {
                "ok"
            } else {
                "out_of_range"
            };
            command_envelope(
                "services.move",
                status,
                serde_json::json!({ "from": from, "to": to }),
            )
        }
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => match &cli.command {
            ServicesCommand::List => {
                let items = out.get("items").cloned().unwrap_or(JsonValue::Null);
                match items.as_array() {
                    Some(arr) if !arr.is_empty() => {
                        for (index, item) in arr.iter().enumerate() {
                            let id = item.get("id").and_then(|v| v.as_str()).unwrap_or("?");
                            let title = item.get("title").and_then(|v| v.as_str()).unwrap_or("");
                            let pricing =
                                item.get("pricing").and_then(|v| v.as_str()).unwrap_or("");
                            println!(
                                "{}. [{}] {} ({})",
                                index,
                                id,
                                output::compact_line(title, 48),
                                pricing
                            );
                        }
                    }
                    _ => println!("No services."),
                }
            }
            ServicesCommand::Get { .. } => match out.get("item") {
                Some(item) if !item.is_null() => {
                    println!("{}", serde_json::to_string_pretty(item)?);
                }
                _ => println!("No such service."),
            },
            ServicesCommand::Add { .. } => {
                let id = out.get("id").and_then(|v| v.as_str()).unwrap_or("?");
                println!("Added service {}", id);
            }
            _ => {
                let status = out.get("status").and_then(|v| v.as_str()).unwrap_or("ok");
                match status {
                    "not_found" => println!("No service with that id; nothing changed."),
                    "out_of_range" => println!("Index out of range; nothing moved."),
                    _ => println!("Services updated."),
                }
            }
        },
    }
    Ok(())
}
