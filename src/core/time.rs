//! Shared timestamp/id helpers for persisted entries and CLI envelopes.

use serde_json::Value as JsonValue;
use ulid::Ulid;

/// Returns unix-epoch seconds with `Z` suffix (e.g. `1771220592Z`).
pub fn now_epoch_z() -> String {
    format!("{}Z", now_unix_secs())
}

pub fn now_unix_secs() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Fresh collection-item identifier. Ulids are sortable by creation time,
/// which keeps exported documents diffable after repeated adds.
pub fn new_item_id() -> String {
    Ulid::new().to_string()
}

/// UTC timestamp safe for filenames: `2026-08-30T12-04-05`.
///
/// Matches the export-filename convention (ISO-8601 with `:` replaced,
/// second precision).
pub fn utc_stamp() -> String {
    utc_stamp_from(now_unix_secs())
}

fn utc_stamp_from(secs: u64) -> String {
    let secs = secs as i64;
    let days = secs.div_euclid(86_400);
    let sod = secs.rem_euclid(86_400);
    let (year, month, day) = civil_from_days(days);
    format!(
        "{:04}-{:02}-{:02}T{:02}-{:02}-{:02}",
        year,
        month,
        day,
        sod / 3_600,
        (sod % 3_600) / 60,
        sod % 60
    )
}

// Gregorian date from days since the unix epoch (days_from_civil inverse).
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    (if month <= 2 { year + 1 } else { year }, month, day)
}

/// Standard command response envelope shape used across CLI surfaces.
pub fn command_envelope(cmd: &str, status: &str, extra: JsonValue) -> JsonValue {
    let mut base = serde_json::json!({
        "ts": now_epoch_z(),
        "event_id": new_item_id(),
        "cmd": cmd,
        "status": status
    });
    if let (Some(base_obj), Some(extra_obj)) = (base.as_object_mut(), extra.as_object()) {
        for (k, v) in extra_obj {
            base_obj.insert(k.clone(), v.clone());
        }
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_epoch_z_format() {
        let result = now_epoch_z();
        assert!(result.ends_with('Z'));
        let numeric_part = result.trim_end_matches('Z');
        assert!(numeric_part.parse::<u64>().is_ok());
    }

    #[test]
    fn test_new_item_id_is_unique() {
        let id1 = new_item_id();
        let id2 = new_item_id();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_utc_stamp_known_instants() {
        assert_eq!(utc_stamp_from(0), "1970-01-01T00-00-00");
        // 2000-03-01 is the canonical leap-boundary check for civil_from_days.
        assert_eq!(utc_stamp_from(951_868_800), "2000-03-01T00-00-00");
        assert_eq!(utc_stamp_from(1_735_689_599), "2024-12-31T23-59-59");
    }

    #[test]
    fn test_command_envelope_merges_extra() {
        let envelope = command_envelope("data.export", "ok", serde_json::json!({"bytes": 42}));
        assert_eq!(envelope["cmd"], "data.export");
        assert_eq!(envelope["status"], "ok");
        assert_eq!(envelope["bytes"], 42);
        assert!(envelope["ts"].is_string());
        assert!(envelope["event_id"].is_string());
    }
}
