//! JSON-file preference store.
//!
//! The file is one flat object of `"key": bool`. It is read once on open and
//! rewritten whole on every `set`. A missing or unreadable file starts empty.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::warn;

use pixel_guess_core::{GameError, PreferenceStore, Result};

#[derive(Debug, Clone)]
pub struct JsonFilePreferences {
    path: PathBuf,
    values: BTreeMap<String, bool>,
}

impl JsonFilePreferences {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(text) => parse(&text).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "ignoring malformed preferences file");
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read preferences file");
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, key: &str) -> Result<()> {
        let fail = |reason: String| GameError::Preferences {
            key: key.to_string(),
            reason,
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| fail(e.to_string()))?;
            }
        }
        let text = serde_json::to_string_pretty(&self.values).map_err(|e| fail(e.to_string()))?;
        std::fs::write(&self.path, text).map_err(|e| fail(e.to_string()))
    }
}

/// String flags (`"true"`/`"false"`) are accepted; any other non-bool reads false.
fn parse(text: &str) -> serde_json::Result<BTreeMap<String, bool>> {
    let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(text)?;
    Ok(raw
        .into_iter()
        .map(|(k, v)| {
            let flag = match v {
                serde_json::Value::Bool(b) => b,
                serde_json::Value::String(s) => s == "true",
                _ => false,
            };
            (k, flag)
        })
        .collect())
}

impl PreferenceStore for JsonFilePreferences {
    fn get(&self, key: &str) -> bool {
        self.values.get(key).copied().unwrap_or(false)
    }

    /// The in-memory value always changes; a failed write is still reported.
    fn set(&mut self, key: &str, value: bool) -> Result<()> {
        self.values.insert(key.to_string(), value);
        self.save(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_false() {
        let dir = TempDir::new().unwrap();
        let prefs = JsonFilePreferences::open(dir.path().join("prefs.json"));
        assert!(!prefs.get("includeSkins"));
    }

    #[test]
    fn set_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut prefs = JsonFilePreferences::open(&path);
        prefs.set("includeSkins", true).unwrap();
        prefs.set("item_includeArena", false).unwrap();

        let reopened = JsonFilePreferences::open(&path);
        assert!(reopened.get("includeSkins"));
        assert!(!reopened.get("item_includeArena"));
        assert!(!reopened.get("unknown"));
    }

    #[test]
    fn accepts_string_flags_and_survives_garbage() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"includeSkins":"true","item_includeArena":"false"}"#).unwrap();
        let prefs = JsonFilePreferences::open(&path);
        assert!(prefs.get("includeSkins"));
        assert!(!prefs.get("item_includeArena"));

        std::fs::write(&path, "not json").unwrap();
        let prefs = JsonFilePreferences::open(&path);
        assert!(!prefs.get("includeSkins"));
    }

    #[test]
    fn failed_write_keeps_memory_value() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be makes the write fail.
        let path = dir.path().join("prefs.json");
        std::fs::create_dir(&path).unwrap();

        let mut prefs = JsonFilePreferences::open(&path);
        let err = prefs.set("includeSkins", true).unwrap_err();
        assert!(matches!(err, GameError::Preferences { .. }));
        assert!(prefs.get("includeSkins"));
    }
}
