use crate::core::document::ContentStore;
use crate::core::error::FolioError;
use crate::core::time::command_envelope;
use crate::sections::OutputFormat;
use clap::{Parser, Subcommand};
use serde_json::Value as JsonValue;

#[derive(Parser, Debug)]
#[clap(name = "contact", about = "Edit the 'contact' section of the portfolio.")]
pub struct ContactCli {
    /// Output format for this command group.
    #[clap(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,
    #[clap(subcommand)]
    command: ContactCommand,
}

#[derive(Subcommand, Debug)]
pub enum ContactCommand {
    /// Show the contact record.
    Show,
    /// Replace the contact record. Unset flags carry over their current
    /// values; the whole record is submitted, not a patch.
    Set {
        #[clap(long)]
        email: Option<String>,
        #[clap(long)]
        phone: Option<String>,
        #[clap(long)]
        location: Option<String>,
        #[clap(long)]
        availability: Option<String>,
    },
    /// Manage social links (free-form platform keys).
    Social {
        #[clap(subcommand)]
        command: SocialCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum SocialCommand {
    /// Set the URL/handle for a platform (adds or overwrites).
    Set {
        #[clap(value_name = "PLATFORM")]
        platform: String,
        #[clap(value_name = "URL")]
        url: String,
    },
    /// Remove a platform entry.
    Unset {
        #[clap(value_name = "PLATFORM")]
        platform: String,
    },
}

pub fn run_contact_cli(content: &mut ContentStore, cli: ContactCli) -> Result<(), FolioError> {
    let out = match &cli.command {
        ContactCommand::Show => command_envelope(
            "contact.show",
            "ok",
            serde_json::json!({ "contact": content.document().contact }),
        ),
        ContactCommand::Set {
            email,
            phone,
            location,
            availability,
        } => {
            let mut contact = content.document().contact.clone();
            if let Some(email) = email {
                contact.email = email.clone();
            }
            if let Some(phone) = phone {
                contact.phone = phone.clone();
            }
            if let Some(location) = location {
                contact.location = location.clone();
            }
            if let Some(availability) = availability {
                contact.availability = availability.clone();
            }
            content.replace_contact(contact);
            command_envelope("contact.set", "ok", serde_json::json!({}))
        }
        ContactCommand::Social { command } => match command {
            SocialCommand::Set { platform, url } => {
                let mut contact = content.document().contact.clone();
                contact.social.insert(platform.clone(), url.clone());
                content.replace_contact(contact);
                command_envelope(
                    "contact.social.set",
                    "ok",
                    serde_json::json!({ "platform": platform }),
                )
            }
            SocialCommand::Unset { platform } => {
                let mut contact = content.document().contact.clone();
                let status = if contact.social.remove(platform).is_some() {
                    content.replace_contact(contact);
                    "ok"
                } else {
                    "not_found"
                };
                command_envelope(
                    "contact.social.unset",
                    status,
                    serde_json::json!({ "platform": platform }),
                )
            }
        },
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => match &cli.command {
            ContactCommand::Show => {
                let contact = out.get("contact").cloned().unwrap_or(JsonValue::Null);
                let field = |key: &str| {
                    contact
                        .get(key)
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string()
                };
                println!("email:        {}", field("email"));
                println!("phone:        {}", field("phone"));
                println!("location:     {}", field("location"));
                println!("availability: {}", field("availability"));
                if let Some(social) = contact.get("social").and_then(|v| v.as_object()) {
                    if !social.is_empty() {
                        println!("social:");
                        for (platform, url) in social {
                            println!("  {}: {}", platform, url.as_str().unwrap_or(""));
                        }
                    }
                }
            }
            _ => {
                let status = out.get("status").and_then(|v| v.as_str()).unwrap_or("ok");
                if status == "not_found" {
                    println!("No matching entry; nothing changed.");
                } else {
                    println!("Contact section updated.");
                }
            }
        },
    }
    Ok(())
}
