use crate::core::document::ContentStore;
use crate::core::error::FolioError;
use crate::core::schema::Skill;
use crate::core::time::command_envelope;
use crate::sections::OutputFormat;
use clap::{Parser, Subcommand};
use serde_json::Value as JsonValue;

#[derive(Parser, Debug)]
#[clap(name = "about", about = "Edit the 'about' section of the portfolio.")]
pub struct AboutCli {
    /// Output format for this command group.
    #[clap(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,
    #[clap(subcommand)]
    command: AboutCommand,
}

#[derive(Subcommand, Debug)]
pub enum AboutCommand {
    /// Show the about record.
    Show,
    /// Replace the about record. Unset flags carry over their current
    /// values; the whole record is submitted, not a patch.
    Set {
        #[clap(long)]
        name: Option<String>,
        #[clap(long)]
        title: Option<String>,
        #[clap(long)]
        description: Option<String>,
        #[clap(long)]
        location: Option<String>,
        #[clap(long)]
        email: Option<String>,
        #[clap(long)]
        website: Option<String>,
        #[clap(long)]
        avatar: Option<String>,
    },
    /// Manage the ordered skills list.
    Skill {
        #[clap(subcommand)]
        command: SkillCommand,
    },
    /// Manage the ordered expertise labels.
    Expertise {
        #[clap(subcommand)]
        command: ExpertiseCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum SkillCommand {
    /// Append a skill.
    Add {
        #[clap(value_name = "NAME")]
        name: String,
        /// Proficiency 0-100.
        #[clap(long, default_value = "50")]
        level: u8,
    },
    /// Remove a skill by exact name.
    Remove {
        #[clap(value_name = "NAME")]
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ExpertiseCommand {
    /// Append an expertise label.
    Add {
        #[clap(value_name = "LABEL")]
        label: String,
    },
    /// Remove an expertise label by exact match.
    Remove {
        #[clap(value_name = "LABEL")]
        label: String,
    },
}

pub fn run_about_cli(content: &mut ContentStore, cli: AboutCli) -> Result<(), FolioError> {
    let out = match &cli.command {
        AboutCommand::Show => command_envelope(
            "about.show",
            "ok",
            serde_json::json!({ "about": content.document().about }),
        ),
        AboutCommand::Set {
            name,
            title,
            description,
            location,
            email,
            website,
            avatar,
        } => {
            let mut about = content.document().about.clone();
            if let Some(name) = name {
                about.name = name.clone();
            }
            if let Some(title) = title {
                about.title = title.clone();
            }
            if let Some(description) = description {
                about.description = description.clone();
            }
            if let Some(location) = location {
                about.location = location.clone();
            }
            if let Some(email) = email {
                about.email = email.clone();
            }
            if let Some(website) = website {
                about.website = website.clone();
            }
            if let Some(avatar) = avatar {
                about.avatar = avatar.clone();
            }
            content.replace_about(about);
            command_envelope("about.set", "ok", serde_json::json!({}))
        }
        AboutCommand::Skill { command } => match command {
            SkillCommand::Add { name, level } => {
                let mut about = content.document().about.clone();
                about.skills.push(Skill {
                    name: name.clone(),
                    level: *level,
                });
                content.replace_about(about);
                command_envelope(
                    "about.skill.add",
                    "ok",
                    serde_json::json!({ "name": name, "level": level }),
                )
            }
            SkillCommand::Remove { name } => {
                let mut about = content.document().about.clone();
                let before = about.skills.len();
                about.skills.retain(|skill| skill.name != *name);
                let status = if about.skills.len() == before {
                    "not_found"
                } else {
                    content.replace_about(about);
                    "ok"
                };
                command_envelope(
                    "about.skill.remove",
                    status,
                    serde_json::json!({ "name": name }),
                )
            }
        },
        AboutCommand::Expertise { command } => match command {
            ExpertiseCommand::Add { label } => {
                let mut about = content.document().about.clone();
                about.expertise.push(label.clone());
                content.replace_about(about);
                command_envelope(
                    "about.expertise.add",
                    "ok",
                    serde_json::json!({ "label": label }),
                )
            }
            ExpertiseCommand::Remove { label } => {
                let mut about = content.document().about.clone();
                let before = about.expertise.len();
                about.expertise.retain(|entry| entry != label);
                let status = if about.expertise.len() == before {
                    "not_found"
                } else {
                    content.replace_about(about);
                    "ok"
                };
                command_envelope(
                    "about.expertise.remove",
                    status,
                    serde_json::json!({ "label": label }),
                )
            }
        },
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => match &cli.command {
            AboutCommand::Show => {
                let about = out.get("about").cloned().unwrap_or(JsonValue::Null);
                let field = |key: &str| {
                    about
                        .get(key)
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string()
                };
                println!("{} - {}", field("name"), field("title"));
                println!("  location: {}", field("location"));
                println!("  email:    {}", field("email"));
                println!("  website:  {}", field("website"));
                if let Some(skills) = about.get("skills").and_then(|v| v.as_array()) {
                    println!("  skills:");
                    for skill in skills {
                        let name = skill.get("name").and_then(|v| v.as_str()).unwrap_or("?");
                        let level = skill.get("level").and_then(|v| v.as_u64()).unwrap_or(0);
                        println!("    - {} ({})", name, level);
                    }
                }
                if let Some(expertise) = about.get("expertise").and_then(|v| v.as_array()) {
                    let labels: Vec<&str> = expertise.iter().filter_map(|v| v.as_str()).collect();
                    if !labels.is_empty() {
                        println!("  expertise: {}", labels.join(", "));
                    }
                }
            }
            _ => {
                let status = out.get("status").and_then(|v| v.as_str()).unwrap_or("ok");
                if status == "not_found" {
                    println!("No matching entry; nothing changed.");
                } else {
                    println!("About section updated.");
                }
            }
        },
    }
    Ok(())
}
