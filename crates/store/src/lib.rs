//! File-backed score persistence.
//!
//! Implements the core's [`ScoreStore`] seam with a small JSON file. Storage
//! trouble of any kind (missing file, bad permissions, corrupt contents)
//! degrades to the caller's default value and never reaches the engine.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use tui_blockfall_core::store::ScoreStore;

/// On-disk layout: a flat map of named counters.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    scores: BTreeMap<String, u32>,
}

/// JSON-file score store.
///
/// Values are cached in memory; every `set` rewrites the file. Write failures
/// are swallowed, so at worst the record survives only for the session.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    file: StoreFile,
}

impl FileStore {
    /// Open a store at `path`, reading any existing contents. A missing or
    /// unreadable file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file = Self::read(&path).unwrap_or_default();
        Self { path, file }
    }

    fn read(path: &Path) -> Option<StoreFile> {
        let data = fs::read(path).ok()?;
        serde_json::from_slice(&data).ok()
    }

    fn write(&self) {
        let Ok(data) = serde_json::to_vec_pretty(&self.file) else {
            return;
        };
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let _ = fs::write(&self.path, data);
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileStore {
    fn get(&self, key: &str, default: u32) -> u32 {
        self.file.scores.get(key).copied().unwrap_or(default)
    }

    fn set(&mut self, key: &str, value: u32) {
        self.file.scores.insert(key.to_owned(), value);
        self.write();
    }
}
