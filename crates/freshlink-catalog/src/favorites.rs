//! Favorite product ids, persisted as a JSON array under one key of a
//! string key-value store.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

use freshlink_core::listing::ListingId;

/// Storage key holding the JSON-encoded favorites list.
pub const FAVORITES_KEY: &str = "favoriteProducts";

#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error("favorites store I/O failed at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("favorites store is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Minimal string key-value persistence.
pub trait KeyValueStore {
    /// # Errors
    ///
    /// Returns [`FavoritesError`] if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, FavoritesError>;

    /// # Errors
    ///
    /// Returns [`FavoritesError`] if the backing storage cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), FavoritesError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, FavoritesError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FavoritesError> {
        (**self).set(key, value)
    }
}

/// In-process store, used by tests and when no path is configured.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, FavoritesError> {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FavoritesError> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A JSON object file mapping keys to string values. Every write rewrites
/// the whole file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, FavoritesError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn io_error(&self, source: std::io::Error) -> FavoritesError {
        FavoritesError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, FavoritesError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FavoritesError> {
        // An unreadable file is replaced rather than blocking every write.
        let mut entries = self.read_all().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let body = serde_json::to_string_pretty(&entries)?;
        std::fs::write(&self.path, body).map_err(|e| self.io_error(e))
    }
}

/// Favorite product ids in the order they were added.
#[derive(Debug)]
pub struct Favorites<S> {
    store: S,
    ids: Vec<ListingId>,
}

impl<S: KeyValueStore> Favorites<S> {
    /// Read the persisted list. A missing key, a malformed value or a
    /// corrupt backing file starts empty.
    ///
    /// # Errors
    ///
    /// Returns [`FavoritesError::Io`] when the store itself cannot be read.
    pub fn open(store: S) -> Result<Self, FavoritesError> {
        let raw = match store.get(FAVORITES_KEY) {
            Ok(raw) => raw,
            Err(FavoritesError::Json(e)) => {
                tracing::warn!(error = %e, "ignoring corrupt favorites store");
                None
            }
            Err(e) => return Err(e),
        };
        let ids = match raw {
            None => Vec::new(),
            Some(raw) => serde_json::from_str::<Vec<ListingId>>(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring malformed favorites list");
                Vec::new()
            }),
        };
        Ok(Self { store, ids })
    }

    /// Add `id` if absent, remove it if present, then persist the full list.
    /// Returns whether `id` is a favorite afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`FavoritesError`] if the list cannot be persisted. The
    /// in-memory set is left unchanged in that case.
    pub fn toggle(&mut self, id: ListingId) -> Result<bool, FavoritesError> {
        let mut next = self.ids.clone();
        let now_favorite = match next.iter().position(|f| *f == id) {
            Some(index) => {
                next.remove(index);
                false
            }
            None => {
                next.push(id);
                true
            }
        };

        let encoded = serde_json::to_string(&next)?;
        self.store.set(FAVORITES_KEY, &encoded)?;
        self.ids = next;

        tracing::debug!(product_id = id, favorite = now_favorite, "favorite toggled");
        Ok(now_favorite)
    }

    #[must_use]
    pub fn contains(&self, id: ListingId) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn ids(&self) -> &[ListingId] {
        &self.ids
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
