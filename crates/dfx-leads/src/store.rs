//! Local, append-only lead persistence.
//!
//! Storage is best-effort: a collection that was never written, or whose file
//! was cleared, reads as empty. Nothing here offers durability guarantees.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::debug;

use crate::error::LeadError;
use crate::lead::Lead;

/// A key-value surface holding one ordered list of leads per collection key.
pub trait LeadStore: Send + Sync {
    /// Append `lead` to the end of `collection`, creating it if needed.
    fn append(&self, collection: &str, lead: &Lead) -> Result<(), LeadError>;

    /// All leads in `collection`, oldest first. Unknown collections are empty.
    fn load(&self, collection: &str) -> Result<Vec<Lead>, LeadError>;

    /// Number of leads in `collection`.
    fn count(&self, collection: &str) -> Result<usize, LeadError> {
        Ok(self.load(collection)?.len())
    }
}

/// In-process store, lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Lead>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LeadStore for MemoryStore {
    fn append(&self, collection: &str, lead: &Lead) -> Result<(), LeadError> {
        check_collection(collection)?;
        self.collections
            .lock()
            .entry(collection.to_string())
            .or_default()
            .push(lead.clone());
        Ok(())
    }

    fn load(&self, collection: &str) -> Result<Vec<Lead>, LeadError> {
        check_collection(collection)?;
        Ok(self
            .collections
            .lock()
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }
}

/// One pretty-printed JSON array file per collection: `<dir>/<collection>.json`.
///
/// Appends rewrite the whole file through a temporary sibling and a rename, so
/// a crash mid-write leaves the previous contents intact. Concurrent writers
/// in separate processes are not coordinated.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
    write_lock: std::sync::Arc<Mutex<()>>,
}

impl JsonFileStore {
    /// Store rooted at `dir`. The directory is created on first append.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Default::default(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `collection`.
    pub fn collection_path(&self, collection: &str) -> Result<PathBuf, LeadError> {
        check_collection(collection)?;
        Ok(self.dir.join(format!("{collection}.json")))
    }
}

impl LeadStore for JsonFileStore {
    fn append(&self, collection: &str, lead: &Lead) -> Result<(), LeadError> {
        let path = self.collection_path(collection)?;
        let _guard = self.write_lock.lock();

        let mut leads = self.load(collection)?;
        leads.push(lead.clone());

        let data = serde_json::to_vec_pretty(&leads)
            .map_err(|e| LeadError::Serialization(e.to_string()))?;

        std::fs::create_dir_all(&self.dir).map_err(|e| LeadError::IoError(e.to_string()))?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, &data).map_err(|e| LeadError::IoError(e.to_string()))?;
        std::fs::rename(&tmp, &path).map_err(|e| LeadError::IoError(e.to_string()))?;

        debug!(path = %path.display(), total = leads.len(), "lead collection written");
        Ok(())
    }

    fn load(&self, collection: &str) -> Result<Vec<Lead>, LeadError> {
        let path = self.collection_path(collection)?;
        let data = match std::fs::read(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(LeadError::IoError(e.to_string())),
        };
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        serde_json::from_slice(&data).map_err(|e| LeadError::Corrupted {
            collection: collection.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Collection keys become file names, so they must be a single plain segment.
fn check_collection(collection: &str) -> Result<(), LeadError> {
    let ok = !collection.is_empty()
        && collection
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if ok {
        Ok(())
    } else {
        Err(LeadError::InvalidCollection(collection.to_string()))
    }
}
