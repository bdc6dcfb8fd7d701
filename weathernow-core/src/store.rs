use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use std::{collections::HashMap, fs, path::PathBuf, sync::Mutex};

/// Key under which the recent-search list is persisted.
pub const RECENT_KEY: &str = "weather_recent";

/// Maximum number of remembered searches.
pub const RECENT_CAP: usize = 5;

/// Durable key-value storage local to the user. Injectable so tests (and
/// embedders) can swap the on-disk store for an in-memory one.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// On-disk storage: one JSON file per key under the platform data directory.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn open() -> Result<Self> {
        let dirs = ProjectDirs::from("dev", "weathernow", "weathernow")
            .ok_or_else(|| anyhow!("Could not determine platform data directory"))?;

        Ok(Self {
            dir: dirs.data_dir().to_path_buf(),
        })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read storage file: {}", path.display()))?;

        Ok(Some(contents))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create data directory: {}", self.dir.display()))?;

        let path = self.key_path(key);
        fs::write(&path, value)
            .with_context(|| format!("Failed to write storage file: {}", path.display()))?;

        Ok(())
    }
}

/// In-memory storage used in tests and anywhere persistence is unwanted.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("storage mutex poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("storage mutex poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Most-recent-first history of prior queries: de-duplicated by exact string
/// match, capped at [`RECENT_CAP`], persisted across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentSearches {
    cities: Vec<String>,
}

impl RecentSearches {
    /// Read the persisted list. An absent or malformed stored value yields an
    /// empty list; startup must never fail on bad history.
    pub fn load(storage: &dyn Storage) -> Self {
        let raw = match storage.get(RECENT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(error) => {
                log::warn!("Failed to read recent searches: {error:#}");
                return Self::default();
            }
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(cities) => Self { cities },
            Err(error) => {
                log::warn!("Ignoring malformed recent-search list: {error}");
                Self::default()
            }
        }
    }

    /// Serialize and write the list back, synchronously.
    pub fn save(&self, storage: &dyn Storage) -> Result<()> {
        let encoded = serde_json::to_string(&self.cities)
            .context("Failed to serialize recent-search list")?;
        storage.set(RECENT_KEY, &encoded)
    }

    /// Move `city` to the front, dropping any earlier occurrence, then cap.
    pub fn record(&mut self, city: &str) {
        self.cities.retain(|c| c != city);
        self.cities.insert(0, city.to_string());
        self.cities.truncate(RECENT_CAP);
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
