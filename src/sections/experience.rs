use crate::core::document::ContentStore;
use crate::core::error::FolioError;
use crate::core::output;
use crate::core::schema::{ExperienceEntry, ExperiencePatch};
use crate::core::time::command_envelope;
use crate::sections::OutputFormat;
use clap::{Parser, Subcommand};
use serde_json::Value as JsonValue;

#[derive(Parser, Debug)]
#[clap(name = "experience", about = "Edit the 'experience' collection of the portfolio.")]
pub struct ExperienceCli {
    /// Output format for this command group.
    #[clap(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,
    #[clap(subcommand)]
    command: ExperienceCommand,
}

#[derive(Subcommand, Debug)]
pub enum ExperienceCommand {
    /// Append an experience entry (id is assigned by the store).
    Add {
        #[clap(value_name = "COMPANY")]
        company: String,
        #[clap(long, default_value = "")]
        position: String,
        #[clap(long, default_value = "")]
        duration: String,
        #[clap(long, default_value = "")]
        location: String,
        #[clap(long, default_value = "")]
        description: String,
        /// Repeatable; listed in order.
        #[clap(long = "achievement")]
        achievements: Vec<String>,
        /// Repeatable; listed in order.
        #[clap(long = "tech")]
        technologies: Vec<String>,
        #[clap(long)]
        logo: Option<String>,
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
        company: Option<String>,
        #[clap(long)]
        position: Option<String>,
        #[clap(long)]
        duration: Option<String>,
        #[clap(long)]
        location: Option<String>,
        #[clap(long)]
        description: Option<String>,
        /// Repeatable; when given, replaces the whole list.
        #[clap(long = "achievement")]
        achievements: Vec<String>,
        /// Repeatable; when given, replaces the whole list.
        #[clap(long = "tech")]
        technologies: Vec<String>,
        #[clap(long)]
        logo: Option<String>,
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

fn vec_patch(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

pub fn run_experience_cli(content: &mut ContentStore, cli: ExperienceCli) -> Result<(), FolioError> {
    let out = match &cli.command {
        ExperienceCommand::Add {
            company,
            position,
            duration,
            location,
            description,
            achievements,
            technologies,
            logo,
        } => {
            let id = content.add_experience(ExperienceEntry {
                id: String::new(),
                company: company.clone(),
                position: position.clone(),
                duration: duration.clone(),
                location: location.clone(),
                description: description.clone(),
                achievements: achievements.clone(),
                technologies: technologies.clone(),
                logo: logo.clone(),
            });
            command_envelope("experience.add", "ok", serde_json::json!({ "id": id }))
        }
        ExperienceCommand::List => command_envelope(
            "experience.list",
            "ok",
            serde_json::json!({ "items": content.document().experience }),
        ),
        ExperienceCommand::Get { id } => {
            let entry = content.document().experience.iter().find(|e| e.id == *id);
            command_envelope(
                "experience.get",
                if entry.is_some() { "ok" } else { "not_found" },
                serde_json::json!({ "item": entry }),
            )
        }
        ExperienceCommand::Edit {
            id,
            company,
            position,
            duration,
            location,
            description,
            achievements,
            technologies,
            logo,
        } => {
            let patch = ExperiencePatch {
                company: company.clone(),
                position: position.clone(),
                duration: duration.clone(),
                location: location.clone(),
                description: description.clone(),
                achievements: vec_patch(achievements),
                technologies: vec_patch(technologies),
                logo: logo.clone(),
            };
            let status = if content.update_experience(id, patch) {
                "ok"
            } else {
                "not_found"
            };
            command_envelope("experience.edit", status, serde_json::json!({ "id": id }))
        }
        ExperienceCommand::Remove { id } => {
            let status = if content.remove_experience(id) {
                "ok"
            } else {
                "not_found"
            };
            command_envelope("experience.remove", status, serde_json::json!({ "id": id }))
        }
        ExperienceCommand::Move { from, to } => {
            let status = if content.move_experience(*from, *to) {
                "ok"
            } else {
                "out_of_range"
            };
            command_envelope(
                "experience.move",
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
            ExperienceCommand::List => {
                let items = out.get("items").cloned().unwrap_or(JsonValue::Null);
                match items.as_array() {
                    Some(arr) if !arr.is_empty() => {
                        for (index, item) in arr.iter().enumerate() {
                            let id = item.get("id").and_then(|v| v.as_str()).unwrap_or("?");
                            let company =
                                item.get("company").and_then(|v| v.as_str()).unwrap_or("");
                            let position =
                                item.get("position").and_then(|v| v.as_str()).unwrap_or("");
                            let duration =
                                item.get("duration").and_then(|v| v.as_str()).unwrap_or("");
                            println!(
                                "{}. [{}] {} - {} ({})",
                                index,
                                id,
                                company,
                                output::compact_line(position, 48),
                                duration
                            );
                        }
                    }
                    _ => println!("No experience entries."),
                }
            }
            ExperienceCommand::Get { .. } => match out.get("item") {
                Some(item) if !item.is_null() => {
                    println!("{}", serde_json::to_string_pretty(item)?);
                }
                _ => println!("No such entry."),
            },
            ExperienceCommand::Add { .. } => {
                let id = out.get("id").and_then(|v| v.as_str()).unwrap_or("?");
                println!("Added experience entry {}", id);
            }
            _ => {
                let status = out.get("status").and_then(|v| v.as_str()).unwrap_or("ok");
                match status {
                    "not_found" => println!("No entry with that id; nothing changed."),
                    "out_of_range" => println!("Index out of range; nothing moved."),
                    _ => println!("Experience updated."),
                }
            }
        },
    }
    Ok(())
}
