//! Persisted store adapter: one JSON entry per key under a local data root.
//!
//! This is the durability layer for the content store. It mirrors the
//! semantics of a browser-local key/value store: reads fall back to a
//! caller-supplied default and writes are best-effort. A failed read or
//! write is logged and absorbed, never surfaced to the caller — the
//! in-memory document is the source of truth for the current process.

use crate::core::error::FolioError;
use crate::core::output;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Entry key for the serialized portfolio document.
pub const DOCUMENT_KEY: &str = "portfolio-data";
/// Entry key for the dark-mode display preference (independent of the
/// document; shares the storage mechanism only).
pub const DARK_MODE_KEY: &str = "dark-mode";

const DATA_DIR_PARTS: [&str; 2] = [".folio", "data"];

/// Handle to a folio data root. All persisted entries live directly under
/// `root` as `<key>.json`.
#[derive(Debug, Clone)]
pub struct Store {
    /// Absolute or caller-relative path to the data root directory.
    pub root: PathBuf,
}

impl Store {
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Store { root: root.into() }
    }

    /// Data root for a project directory: `<dir>/.folio/data`.
    pub fn rooted_in(dir: &Path) -> Self {
        let mut root = dir.to_path_buf();
        for part in DATA_DIR_PARTS {
            root.push(part);
        }
        Store { root }
    }

    /// Walk ancestors of `start` looking for an existing `.folio/data`.
    pub fn discover(start: &Path) -> Option<Self> {
        let mut current = Some(start);
        while let Some(dir) = current {
            let candidate = Store::rooted_in(dir);
            if candidate.root.is_dir() {
                return Some(candidate);
            }
            current = dir.parent();
        }
        None
    }

    /// Resolve the store for a command invocation: an explicit `--dir` wins,
    /// else the nearest initialized ancestor, else the current directory
    /// (uninitialized roots simply read back defaults).
    pub fn resolve(dir: Option<&Path>) -> Result<Self, FolioError> {
        if let Some(dir) = dir {
            return Ok(Store::rooted_in(dir));
        }
        let cwd = std::env::current_dir()?;
        Ok(Store::discover(&cwd).unwrap_or_else(|| Store::rooted_in(&cwd)))
    }

    pub fn initialized(&self) -> bool {
        self.root.is_dir()
    }

    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    /// Read `key`, falling back to `default` when the entry is missing,
    /// unreadable, or fails to deserialize. Corrupt entries are reported on
    /// stderr and left in place for inspection.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let path = self.entry_path(key);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return default,
            Err(err) => {
                output::warn(&format!(
                    "could not read entry '{}' at {}: {}",
                    key,
                    path.display(),
                    err
                ));
                return default;
            }
        };
        match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(err) => {
                output::warn(&format!(
                    "entry '{}' at {} is corrupt, using default: {}",
                    key,
                    path.display(),
                    err
                ));
                default
            }
        }
    }

    /// Serialize `value` under `key`. Persistence is best-effort: the caller
    /// has already committed its in-memory state, so failures (quota, missing
    /// permissions, unwritable root) are logged and swallowed.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(err) = self.try_write(key, value) {
            output::warn(&format!("could not persist entry '{}': {}", key, err));
        }
    }

    fn try_write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), FolioError> {
        fs::create_dir_all(&self.root)?;
        let text = serde_json::to_string_pretty(value)?;
        fs::write(self.entry_path(key), text)?;
        Ok(())
    }
}
