use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::config;
use super::error::{AppError, Result};
use crate::app::domain::{AppSettings, Contract, PlanningItem};
use crate::app::services::sample_data;

pub const CONTRACTS_KEY: &str = "contracts_data";
pub const PLANNING_KEY: &str = "planning_data";
pub const SETTINGS_KEY: &str = "app_settings";

/// Minimal string key-value store the gateway persists through.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// One JSON file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the platform data directory
    pub fn default_location() -> Self {
        Self::new(config::data_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(AppError::Storage(format!("invalid key '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, value)?;
        Ok(())
    }
}

/// In-memory store, used by tests and as a scratch backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(raw: &str) -> Result<T> {
    Ok(serde_json::from_str(raw)?)
}

/// Typed access to the three persisted records.
///
/// Every failure (unreadable store, corrupt JSON, failed write) is logged
/// here and replaced by an empty list or the default settings; nothing
/// propagates past this boundary.
pub struct PersistenceGateway {
    store: Box<dyn KeyValueStore>,
}

impl PersistenceGateway {
    /// Wrap a store, writing the sample dataset for any missing collection.
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        let mut gateway = Self {
            store: Box::new(store),
        };
        gateway.seed_if_missing();
        gateway
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    fn seed_if_missing(&mut self) {
        if self.is_absent(CONTRACTS_KEY) {
            tracing::info!("No stored contracts, writing sample data");
            self.save(CONTRACTS_KEY, &sample_data::contracts());
        }
        if self.is_absent(PLANNING_KEY) {
            tracing::info!("No stored planning items, writing sample data");
            self.save(PLANNING_KEY, &sample_data::planning_items());
        }
    }

    /// Only a confirmed miss counts as absent; a read error must not
    /// overwrite whatever is stored.
    fn is_absent(&self, key: &str) -> bool {
        match self.store.get(key) {
            Ok(value) => value.is_none(),
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to inspect stored record");
                false
            }
        }
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::error!(key, error = %e, "Failed to read stored record");
                return None;
            }
        };
        match decode(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!(key, error = %e, "Failed to parse stored record. Using defaults.");
                None
            }
        }
    }

    fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        let json = match serde_json::to_string_pretty(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(key, error = %e, "Failed to serialize record");
                return;
            }
        };
        match self.store.set(key, &json) {
            Ok(()) => tracing::debug!(key, bytes = json.len(), "Record saved"),
            Err(e) => tracing::error!(key, error = %e, "Failed to save record"),
        }
    }

    pub fn load_contracts(&self) -> Vec<Contract> {
        self.load(CONTRACTS_KEY).unwrap_or_default()
    }

    pub fn save_contracts(&mut self, contracts: &[Contract]) {
        self.save(CONTRACTS_KEY, contracts);
    }

    pub fn load_planning_items(&self) -> Vec<PlanningItem> {
        self.load(PLANNING_KEY).unwrap_or_default()
    }

    pub fn save_planning_items(&mut self, items: &[PlanningItem]) {
        self.save(PLANNING_KEY, items);
    }

    /// Persisted settings merged over the defaults
    pub fn load_settings(&self) -> AppSettings {
        self.load(SETTINGS_KEY).unwrap_or_default()
    }

    pub fn save_settings(&mut self, settings: &AppSettings) {
        self.save(SETTINGS_KEY, settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::ThemeMode;
    use crate::app::domain::columns::default_contract_columns;

    /// Store whose reads always fail
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(AppError::Storage("disk on fire".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(AppError::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_first_run_seeds_sample_data() {
        let gateway = PersistenceGateway::new(MemoryStore::new());
        assert_eq!(gateway.load_contracts(), sample_data::contracts());
        assert_eq!(gateway.load_planning_items(), sample_data::planning_items());
        assert!(gateway.store().get(SETTINGS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_existing_empty_list_is_not_reseeded() {
        let store = MemoryStore::new()
            .with_entry(CONTRACTS_KEY, "[]")
            .with_entry(PLANNING_KEY, "[]");
        let gateway = PersistenceGateway::new(store);
        assert!(gateway.load_contracts().is_empty());
        assert!(gateway.load_planning_items().is_empty());
    }

    #[test]
    fn test_decode_reports_json_errors() {
        let err = decode::<Vec<Contract>>("[{").unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }

    #[test]
    fn test_corrupt_json_falls_back_to_empty() {
        let store = MemoryStore::new()
            .with_entry(CONTRACTS_KEY, "{not json")
            .with_entry(PLANNING_KEY, "[]")
            .with_entry(SETTINGS_KEY, "[1, 2");
        let gateway = PersistenceGateway::new(store);
        assert!(gateway.load_contracts().is_empty());
        assert_eq!(gateway.load_settings(), AppSettings::default());
    }

    #[test]
    fn test_broken_store_degrades_to_defaults() {
        let mut gateway = PersistenceGateway::new(BrokenStore);
        assert!(gateway.load_contracts().is_empty());
        assert!(gateway.load_planning_items().is_empty());
        assert_eq!(gateway.load_settings(), AppSettings::default());
        // Writes fail silently
        gateway.save_contracts(&[]);
        gateway.save_settings(&AppSettings::default());
    }

    #[test]
    fn test_settings_merge_over_defaults() {
        let store = MemoryStore::new().with_entry(SETTINGS_KEY, r#"{"theme": "dark", "font": "serif"}"#);
        let gateway = PersistenceGateway::new(store);
        let settings = gateway.load_settings();
        assert_eq!(settings.theme, ThemeMode::Dark);
        assert_eq!(settings.font, "serif");
        assert_eq!(settings.font_size, 14);
        assert_eq!(settings.column_visibility, default_contract_columns());
    }

    #[test]
    fn test_save_then_load_contracts() {
        let mut gateway = PersistenceGateway::new(MemoryStore::new());
        let contract = Contract {
            id: "x".to_string(),
            item: "Вода питна".to_string(),
            expected_cost: 99.9,
            ..Default::default()
        };
        gateway.save_contracts(std::slice::from_ref(&contract));
        assert_eq!(gateway.load_contracts(), vec![contract]);
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));
        assert_eq!(store.get("app_settings").unwrap(), None);
        store.set("app_settings", "{}").unwrap();
        assert_eq!(store.get("app_settings").unwrap().as_deref(), Some("{}"));
        assert!(dir.path().join("nested").join("app_settings.json").exists());
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        assert!(matches!(store.get("../escape"), Err(AppError::Storage(_))));
        assert!(matches!(store.set("", "x"), Err(AppError::Storage(_))));
    }

    #[test]
    fn test_gateway_over_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let mut gateway = PersistenceGateway::new(FileStore::new(dir.path()));
        let settings = AppSettings {
            theme: ThemeMode::Dark,
            ..Default::default()
        };
        gateway.save_settings(&settings);
        gateway.save_planning_items(&[]);

        let reopened = PersistenceGateway::new(FileStore::new(dir.path()));
        assert_eq!(reopened.load_settings(), settings);
        assert!(reopened.load_planning_items().is_empty());
        assert_eq!(reopened.load_contracts(), sample_data::contracts());
    }
}
