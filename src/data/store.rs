//! Local key-value persistence for plant settings.
//!
//! The store is a single JSON document on disk mapping string keys to JSON
//! values; the plant list lives under the `plants` key. Saves rewrite the
//! whole entry, preserving any other keys in the document. There is no
//! versioning, migration, or locking.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::models::PlantConfig;

const PLANTS_KEY: &str = "plants";
const STORE_FILE: &str = "settings.json";

/// Store interface for the on-disk settings document
pub struct PlantStore {
    dir: PathBuf,
}

impl PlantStore {
    /// Create a new store rooted at the given directory
    pub fn new(dir: PathBuf) -> Self {
        PlantStore { dir }
    }

    fn store_path(&self) -> PathBuf {
        self.dir.join(STORE_FILE)
    }

    /// Read the full key-value document, or an empty map if none exists yet
    fn read_document(&self) -> Result<BTreeMap<String, serde_json::Value>> {
        let path = self.store_path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings file: {path:?}"))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse settings file: {path:?}"))
    }

    /// Load the persisted plant list. A missing file or absent key yields an
    /// empty list; a malformed document is an error for the caller to surface.
    pub fn load_plants(&self) -> Result<Vec<PlantConfig>> {
        let document = self.read_document()?;
        match document.get(PLANTS_KEY) {
            Some(value) => serde_json::from_value(value.clone())
                .context("Failed to parse stored plant list"),
            None => Ok(Vec::new()),
        }
    }

    /// Persist the full plant list, overwriting the previous entry.
    /// Other keys in the document are left untouched.
    pub fn save_plants(&self, plants: &[PlantConfig]) -> Result<()> {
        let mut document = self.read_document().unwrap_or_default();
        document.insert(
            PLANTS_KEY.to_string(),
            serde_json::to_value(plants).context("Failed to serialize plant list")?,
        );

        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create settings directory: {:?}", self.dir))?;
        let path = self.store_path();
        let raw = serde_json::to_string_pretty(&document)
            .context("Failed to serialize settings document")?;
        fs::write(&path, raw)
            .with_context(|| format!("Failed to write settings file: {path:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> PlantStore {
        PlantStore::new(dir.path().to_path_buf())
    }

    #[test]
    fn test_load_without_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.load_plants().unwrap().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut plants = vec![
            PlantConfig::new("1", "Aloe Vera", 30, 60),
            PlantConfig::new("2", "Snake Plant", 40, 70),
        ];
        plants[1].image_uri = Some("file:///photos/snake.jpg".to_string());

        store.save_plants(&plants).unwrap();
        let loaded = store.load_plants().unwrap();
        assert_eq!(loaded, plants);
    }

    #[test]
    fn test_save_overwrites_previous_list() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store
            .save_plants(&[PlantConfig::new("1", "Aloe Vera", 30, 60)])
            .unwrap();
        store
            .save_plants(&[PlantConfig::new("2", "Snake Plant", 40, 70)])
            .unwrap();

        let loaded = store.load_plants().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Snake Plant");
    }

    #[test]
    fn test_unknown_keys_survive_save() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"plants": [{"id": "1", "name": "Aloe Vera", "min": 30, "max": 60}], "lastTab": "home"}"#,
        )
        .unwrap();

        let loaded = store.load_plants().unwrap();
        assert_eq!(loaded.len(), 1);

        store
            .save_plants(&[PlantConfig::new("2", "Snake Plant", 40, 70)])
            .unwrap();

        let raw = std::fs::read_to_string(dir.path().join("settings.json")).unwrap();
        let document: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(document["lastTab"], "home");
        assert_eq!(document["plants"][0]["name"], "Snake Plant");
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        std::fs::write(dir.path().join("settings.json"), "not json").unwrap();
        assert!(store.load_plants().is_err());
    }
}
