use crate::core::document::ContentStore;
use crate::core::error::FolioError;
use crate::core::output;
use crate::core::schema::{ProjectEntry, ProjectLinks, ProjectPatch, ProjectStatus};
use crate::core::time::command_envelope;
use crate::sections::OutputFormat;
use clap::{Parser, Subcommand};
use serde_json::Value as JsonValue;

#[derive(Parser, Debug)]
#[clap(name = "projects", about = "Edit the 'projects' collection of the portfolio.")]
pub struct ProjectsCli {
    /// Output format for this command group.
    #[clap(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,
    #[clap(subcommand)]
    command: ProjectsCommand,
}

#[derive(Subcommand, Debug)]
pub enum ProjectsCommand {
    /// Append a project entry (id is assigned by the store).
    Add {
        #[clap(value_name = "TITLE")]
        title: String,
        #[clap(long, default_value = "")]
        description: String,
        #[clap(long, default_value = "")]
        image: String,
        #[clap(long, default_value = "")]
        category: String,
        /// Repeatable; listed in order.
        #[clap(long = "tech")]
        tech_stack: Vec<String>,
        #[clap(long)]
        github: Option<String>,
        #[clap(long)]
        demo: Option<String>,
        #[clap(long)]
        docs: Option<String>,
        /// Pin this project to the featured row.
        #[clap(long)]
        featured: bool,
        #[clap(long, value_enum, default_value = "development")]
        status: ProjectStatus,
    },
    /// List entries in display order.
    List {
        /// Only featured projects.
        #[clap(long)]
        featured: bool,
    },
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
        image: Option<String>,
        #[clap(long)]
        category: Option<String>,
        /// Repeatable; when given, replaces the whole list.
        #[clap(long = "tech")]
        tech_stack: Vec<String>,
        #[clap(long)]
        github: Option<String>,
        #[clap(long)]
        demo: Option<String>,
        #[clap(long)]
        docs: Option<String>,
        #[clap(long)]
        featured: Option<bool>,
        #[clap(long, value_enum)]
        status: Option<ProjectStatus>,
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

pub fn run_projects_cli(content: &mut ContentStore, cli: ProjectsCli) -> Result<(), FolioError> {
    let out = match &cli.command {
        ProjectsCommand::Add {
            title,
            description,
            image,
            category,
            tech_stack,
            github,
            demo,
            docs,
            featured,
            status,
        } => {
            let id = content.add_project(ProjectEntry {
                id: String::new(),
                title: title.clone(),
                description: description.clone(),
                image: image.clone(),
                category: category.clone(),
                tech_stack: tech_stack.clone(),
                links: ProjectLinks {
                    github: github.clone(),
                    demo: demo.clone(),
                    docs: docs.clone(),
                },
                featured: *featured,
                status: *status,
            });
            command_envelope("projects.add", "ok", serde_json::json!({ "id": id }))
        }
        ProjectsCommand::List { featured } => {
            let items: Vec<&ProjectEntry> = content
                .document()
                .projects
                .iter()
                .filter(|p| !*featured || p.featured)
                .collect();
            command_envelope("projects.list", "ok", serde_json::json!({ "items": items }))
        }
        ProjectsCommand::Get { id } => {
            let entry = content.document().projects.iter().find(|p| p.id == *id);
            command_envelope(
                "projects.get",
                if entry.is_some() { "ok" } else { "not_found" },
                serde_json::json!({ "item": entry }),
            )
        }
        ProjectsCommand::Edit {
            id,
            title,
            description,
            image,
            category,
            tech_stack,
            github,
            demo,
            docs,
            featured,
            status,
        } => {
            let patch = ProjectPatch {
                title: title.clone(),
                description: description.clone(),
                image: image.clone(),
                category: category.clone(),
                tech_stack: if tech_stack.is_empty() {
                    None
                } else {
                    Some(tech_stack.clone())
                },
                github: github.clone(),
                demo: demo.clone(),
                docs: docs.clone(),
                featured: *featured,
                status: *status,
            };
            let outcome = if content.update_project(id, patch) {
                "ok"
            } else {
                "not_found"
            };
            command_envelope("projects.edit", outcome, serde_json::json!({ "id": id }))
        }
        ProjectsCommand::Remove { id } => {
            let outcome = if content.remove_project(id) {
                "ok"
            } else {
                "not_found"
            };
            command_envelope("projects.remove", outcome, serde_json::json!({ "id": id }))
        }
        ProjectsCommand::Move { from, to } => {
            let outcome = if content.move_project(*from, *to) {
                "ok"
            } else {
                "out_of_range"
            };
            command_envelope(
                "projects.move",
                outcome,
                serde_json::json!({ "from": from, "to": to }),
            )
        }
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => match &cli.command {
            ProjectsCommand::List { .. } => {
                let items = out.get("items").cloned().unwrap_or(JsonValue::Null);
                match items.as_array() {
                    Some(arr) if !arr.is_empty() => {
                        for (index, item) in arr.iter().enumerate() {
                            let id = item.get("id").and_then(|v| v.as_str()).unwrap_or("?");
                            let title = item.get("title").and_then(|v| v.as_str()).unwrap_or("");
                            let category =
                                item.get("category").and_then(|v| v.as_str()).unwrap_or("");
                            let status = item.get("status").and_then(|v| v.as_str()).unwrap_or("?");
                            let star = if item
                                .get("featured")
                                .and_then(|v| v.as_bool())
                                .unwrap_or(false)
                            {
                                "*"
                            } else {
                                " "
                            };
                            println!(
                                "{}.{} [{}] {} ({} | {})",
                                index,
                                star,
                                id,
                                output::compact_line(title, 48),
                                category,
                                status
                            );
                        }
                    }
                    _ => println!("No projects."),
                }
            }
            ProjectsCommand::Get { .. } => match out.get("item") {
                Some(item) if !item.is_null() => {
                    println!("{}", serde_json::to_string_pretty(item)?);
                }
                _ => println!("No such project."),
            },
            ProjectsCommand::Add { .. } => {
                let id = out.get("id").and_then(|v| v.as_str()).unwrap_or("?");
                println!("Added project {}", id);
            }
            _ => {
                let status = out.get("status").and_then(|v| v.as_str()).unwrap_or("ok");
                match status {
                    "not_found" => println!("No project with that id; nothing changed."),
                    "out_of_range" => println!("Index out of range; nothing moved."),
                    _ => println!("Projects updated."),
                }
            }
        },
    }
    Ok(())
}
