//! Import/export of the whole content set as JSON files.
//!
//! This is the only path that feeds user-supplied documents into the
//! content store. File problems (wrong extension, unreadable file,
//! malformed JSON text) are rejected here; the store is never handed an
//! unparseable payload. Structural rejection (missing sections) happens
//! inside `ContentStore::import` and fails closed.

use crate::core::document::ContentStore;
use crate::core::error::FolioError;
use crate::core::output;
use crate::core::schema;
use crate::core::time::{command_envelope, utc_stamp};
use crate::sections::OutputFormat;
use clap::{Parser, Subcommand};
use serde_json::Value as JsonValue;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed filename for the starter-document export.
pub const SAMPLE_EXPORT_NAME: &str = "sample-portfolio-data.json";

#[derive(Parser, Debug)]
#[clap(name = "data", about = "Import, export, and reset the whole portfolio document.")]
pub struct DataCli {
    /// Output format for this command group.
    #[clap(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,
    #[clap(subcommand)]
    command: DataCommand,
}

#[derive(Subcommand, Debug)]
pub enum DataCommand {
    /// Replace the document with the contents of a JSON file.
    Import {
        #[clap(value_name = "FILE")]
        file: PathBuf,
    },
    /// Write a timestamped snapshot (`portfolio-data-<stamp>.json`), or
    /// print the JSON to stdout with --stdout.
    Export {
        /// Target directory for the snapshot file.
        #[clap(long)]
        out: Option<PathBuf>,
        /// Print to stdout instead of writing a file.
        #[clap(long)]
        stdout: bool,
    },
    /// Write the reduced starter document to a fixed filename.
    Sample {
        /// Target directory for the sample file.
        #[clap(long)]
        out: Option<PathBuf>,
    },
    /// Replace the document with the built-in default.
    Reset {
        /// Required; resetting discards all edits.
        #[clap(long)]
        yes: bool,
    },
    /// Per-section item counts.
    Summary,
}

/// Read and parse a candidate document. Mirrors the upload checks: the
/// path must name a readable `.json` file containing parseable JSON.
fn read_candidate(path: &Path) -> Result<JsonValue, FolioError> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if !is_json {
        return Err(FolioError::PathError(format!(
            "not a JSON file: {}",
            path.display()
        )));
    }
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text)
        .map_err(|err| FolioError::ValidationError(format!("invalid JSON format: {}", err)))
}

fn write_snapshot(
    dir: Option<&Path>,
    filename: &str,
    document: &schema::PortfolioDocument,
) -> Result<(PathBuf, u64), FolioError> {
    let dir = dir.unwrap_or(Path::new("."));
    let path = dir.join(filename);
    let text = serde_json::to_string_pretty(document)?;
    fs::write(&path, &text)?;
    Ok((path, text.len() as u64))
}

pub fn run_data_cli(content: &mut ContentStore, cli: DataCli) -> Result<(), FolioError> {
    let out = match &cli.command {
        DataCommand::Import { file } => {
            let candidate = read_candidate(file)?;
            let bytes = fs::metadata(file).map(|m| m.len()).unwrap_or(0);
            content.import(candidate)?;
            command_envelope(
                "data.import",
                "ok",
                serde_json::json!({
                    "file": file.to_string_lossy(),
                    "bytes": bytes,
                }),
            )
        }
        DataCommand::Export { out, stdout } => {
            let document = content.export();
            if *stdout {
                // Clipboard-style export: same serialization, no file.
                println!("{}", serde_json::to_string_pretty(&document)?);
                return Ok(());
            }
            let filename = format!("portfolio-data-{}.json", utc_stamp());
            let (path, bytes) = write_snapshot(out.as_deref(), &filename, &document)?;
            command_envelope(
                "data.export",
                "ok",
                serde_json::json!({
                    "file": path.to_string_lossy(),
                    "bytes": bytes,
                }),
            )
        }
        DataCommand::Sample { out } => {
            let (path, bytes) =
                write_snapshot(out.as_deref(), SAMPLE_EXPORT_NAME, &schema::sample_document())?;
            command_envelope(
                "data.sample",
                "ok",
                serde_json::json!({
                    "file": path.to_string_lossy(),
                    "bytes": bytes,
                }),
            )
        }
        DataCommand::Reset { yes } => {
            if !*yes {
                return Err(FolioError::ValidationError(
                    "reset discards all edits; re-run with --yes to confirm".to_string(),
                ));
            }
            content.reset();
            command_envelope("data.reset", "ok", serde_json::json!({}))
        }
        DataCommand::Summary => {
            let doc = content.document();
            let social_links = doc.contact.social.values().filter(|v| !v.is_empty()).count();
            command_envelope(
                "data.summary",
                "ok",
                serde_json::json!({
                    "skills": doc.about.skills.len(),
                    "expertise": doc.about.expertise.len(),
                    "experience": doc.experience.len(),
                    "projects": doc.projects.len(),
                    "services": doc.services.len(),
                    "social_links": social_links,
                }),
            )
        }
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => match &cli.command {
            DataCommand::Import { .. } => {
                let file = out.get("file").and_then(|v| v.as_str()).unwrap_or("?");
                let bytes = out.get("bytes").and_then(|v| v.as_u64()).unwrap_or(0);
                println!(
                    "Imported {} ({})",
                    file,
                    output::format_file_size(bytes)
                );
            }
            DataCommand::Export { .. } | DataCommand::Sample { .. } => {
                let file = out.get("file").and_then(|v| v.as_str()).unwrap_or("?");
                let bytes = out.get("bytes").and_then(|v| v.as_u64()).unwrap_or(0);
                println!(
                    "Wrote {} ({})",
                    file,
                    output::format_file_size(bytes)
                );
            }
            DataCommand::Reset { .. } => {
                println!("Portfolio data reset to defaults.");
            }
            DataCommand::Summary => {
                println!(
                    "about:      {} skills, {} expertise areas",
                    out["skills"], out["expertise"]
                );
                println!("experience: {} entries", out["experience"]);
                println!("projects:   {} entries", out["projects"]);
                println!("services:   {} entries", out["services"]);
                println!("contact:    {} social links", out["social_links"]);
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_candidate_rejects_non_json_extension() {
        let err = read_candidate(Path::new("portfolio.txt")).unwrap_err();
        assert!(matches!(err, FolioError::PathError(_)));
    }

    #[test]
    fn test_read_candidate_rejects_malformed_text() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("broken.json");
        fs::write(&path, "{ nope").unwrap();
        let err = read_candidate(&path).unwrap_err();
        assert!(matches!(err, FolioError::ValidationError(_)));
    }

    #[test]
    fn test_read_candidate_accepts_valid_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("ok.json");
        fs::write(&path, r#"{"about":{}}"#).unwrap();
        let value = read_candidate(&path).unwrap();
        assert!(value.get("about").is_some());
    }
}
