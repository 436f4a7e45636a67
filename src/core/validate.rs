//! Shallow structural validation for full-document replacement.
//!
//! A candidate only has to be a JSON object carrying the required top-level
//! sections. Field types inside sections, element shapes, and id uniqueness
//! are deliberately not checked here: a structurally-valid document is
//! accepted and any inner damage surfaces downstream, not as an import
//! failure. Do not tighten this without changing the import contract.

use serde_json::Value as JsonValue;

/// Sections a replacement document must carry, checked in this order.
/// `services` is intentionally absent: it is an optional section.
pub const REQUIRED_SECTIONS: [&str; 4] = ["about", "experience", "projects", "contact"];

/// Returns the human-readable rejection reason, or `Ok(())` when the
/// candidate is minimally shaped.
pub fn validate_document(candidate: &JsonValue) -> Result<(), String> {
    let Some(sections) = candidate.as_object() else {
        return Err("portfolio data must be a JSON object".to_string());
    };
    for section in REQUIRED_SECTIONS {
        if !sections.contains_key(section) {
            return Err(format!("missing required section: {}", section));
        }
    }
    Ok(())
}
