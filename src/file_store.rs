//! JSON file backed preference store.
//!
//! Preferences live in a single pretty-printed JSON object of string values,
//! by default under the per-user config directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::host::{HostError, PreferenceStore};

const APP_DIR: &str = "garage-dashboard";
const PREFERENCES_FILE: &str = "preferences.json";

/// Durable [`PreferenceStore`] over a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store at `<config_dir>/garage-dashboard/preferences.json`.
    pub fn open_default() -> Result<Self, HostError> {
        let config_dir =
            dirs::config_dir().ok_or(HostError::Unavailable("no per-user config directory"))?;
        Ok(Self::at(config_dir.join(APP_DIR).join(PREFERENCES_FILE)))
    }

    /// Store at an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, HostError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), HostError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(values)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl PreferenceStore for JsonFileStore {
    fn get_string(&self, key: &str) -> Result<Option<String>, HostError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<(), HostError> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::at(dir.path().join("nested").join("prefs.json"));
        assert_eq!(store.get_string("theme").unwrap(), None);
    }

    #[test]
    fn test_set_creates_parent_and_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");
        let mut store = JsonFileStore::at(&path);

        store.set_string("density", "compact").unwrap();
        store.set_string("theme", "dark").unwrap();

        let reopened = JsonFileStore::at(&path);
        assert_eq!(reopened.get_string("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get_string("density").unwrap().as_deref(), Some("compact"));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::at(&path);
        assert!(matches!(store.get_string("theme"), Err(HostError::Serde(_))));
    }
}
