//! File-based Completion Store Adapter
//!
//! Stores one JSON document per user under a base directory. Writes go to a
//! temporary file first and are renamed into place, so a crash never leaves a
//! half-written log behind.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::domain::foundation::UserId;
use crate::domain::progression::CompletionLog;
use crate::ports::{CompletionStore, CompletionStoreError, StoredCompletions};

/// On-disk layout of a user's log
#[derive(Debug, Serialize, Deserialize)]
struct CompletionDocument {
    version: u64,
    completions: CompletionLog,
}

/// File-based storage for completion logs
#[derive(Debug)]
pub struct FileCompletionStore {
    base_path: PathBuf,
    // Serializes compare-and-swap within this process.
    write_lock: Mutex<()>,
}

impl FileCompletionStore {
    /// Create a new file store rooted at `base_path`
    ///
    /// # Example
    /// ```ignore
    /// let store = FileCompletionStore::new("./data/completions");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the document for a user.
    ///
    /// Bytes outside `[A-Za-z0-9_-]` are hex-escaped so any user id maps to
    /// a single safe file name.
    fn user_file_path(&self, user_id: &UserId) -> PathBuf {
        let mut name = String::with_capacity(user_id.as_str().len() + 5);
        for byte in user_id.as_str().bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
                name.push(byte as char);
            } else {
                name.push_str(&format!("%{:02X}", byte));
            }
        }
        name.push_str(".json");
        self.base_path.join(name)
    }

    async fn read_document(
        &self,
        path: &Path,
    ) -> Result<Option<CompletionDocument>, CompletionStoreError> {
        match fs::read_to_string(path).await {
            Ok(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| CompletionStoreError::Serialization(e.to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CompletionStoreError::Io(e.to_string())),
        }
    }

    async fn write_document(
        &self,
        path: &Path,
        document: &CompletionDocument,
    ) -> Result<(), CompletionStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| CompletionStoreError::Io(e.to_string()))?;

        let json = serde_json::to_string_pretty(document)
            .map_err(|e| CompletionStoreError::Serialization(e.to_string()))?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, json)
            .await
            .map_err(|e| CompletionStoreError::Io(e.to_string()))?;
        fs::rename(&tmp_path, path)
            .await
            .map_err(|e| CompletionStoreError::Io(e.to_string()))
    }
}

#[async_trait]
impl CompletionStore for FileCompletionStore {
    async fn load(&self, user_id: &UserId) -> Result<StoredCompletions, CompletionStoreError> {
        let path = self.user_file_path(user_id);
        tracing::debug!(path = %path.display(), "Loading completion log");

        Ok(match self.read_document(&path).await? {
            Some(doc) => StoredCompletions {
                log: doc.completions,
                version: doc.version,
            },
            None => StoredCompletions::default(),
        })
    }

    async fn compare_and_swap(
        &self,
        user_id: &UserId,
        expected_version: u64,
        log: &CompletionLog,
    ) -> Result<u64, CompletionStoreError> {
        let _guard = self.write_lock.lock().await;
        let path = self.user_file_path(user_id);

        let actual = self
            .read_document(&path)
            .await?
            .map_or(0, |doc| doc.version);
        if actual != expected_version {
            return Err(CompletionStoreError::Conflict {
                expected: expected_version,
                actual,
            });
        }

        let document = CompletionDocument {
            version: actual + 1,
            completions: log.clone(),
        };
        self.write_document(&path, &document).await?;
        tracing::debug!(path = %path.display(), version = document.version, "Stored completion log");

        Ok(document.version)
    }
}
