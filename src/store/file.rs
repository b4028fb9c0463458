use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::{fs, io::AsyncWriteExt, sync::Mutex};
use tracing::{debug, error, warn};
use uuid::Uuid;

use super::DocumentStore;
use crate::error::StoreError;
use crate::models::Document;

/// Stores each document as a pretty-printed JSON file under one directory.
///
/// Every document has its own lock, so reads and writes of the same file are
/// serialized while different files are independent. Writes land in a temp
/// file first and are renamed over the target, so a reader never sees a
/// half-written document.
pub struct FileStore {
    dir: PathBuf,
    locks: [Mutex<()>; 4],
}

fn slot(document: Document) -> usize {
    match document {
        Document::Polly => 0,
        Document::Polikarpova => 1,
        Document::Total => 2,
        Document::Pallets => 3,
    }
}

impl FileStore {
    /// Opens the store, creating `dir` (and parents) if it does not exist.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| StoreError::io(&dir, e))?;

        Ok(Self {
            dir,
            locks: std::array::from_fn(|_| Mutex::new(())),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_of(&self, document: Document) -> PathBuf {
        self.dir.join(document.file_name())
    }

    /// Caller must hold the document's lock.
    async fn write_locked(&self, document: Document, value: &Value) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(value)?;
        let path = self.path_of(document);
        let tmp = self
            .dir
            .join(format!(".{}.{}.tmp", document.file_name(), Uuid::new_v4()));

        if let Err(err) = write_then_rename(&tmp, &path, &bytes).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(err);
        }

        debug!(document = %document, bytes = bytes.len(), "Saved document");
        Ok(())
    }
}

async fn write_then_rename(tmp: &Path, path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let mut file = fs::File::create(tmp)
        .await
        .map_err(|e| StoreError::io(tmp, e))?;
    file.write_all(bytes)
        .await
        .map_err(|e| StoreError::io(tmp, e))?;
    file.sync_all().await.map_err(|e| StoreError::io(tmp, e))?;
    drop(file);

    fs::rename(tmp, path)
        .await
        .map_err(|e| StoreError::io(path, e))
}

#[async_trait]
impl DocumentStore for FileStore {
    async fn load(&self, document: Document) -> Value {
        let path = self.path_of(document);
        let _guard = self.locks[slot(document)].lock().await;

        match fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(value) => value,
                Err(err) => {
                    warn!(
                        document = %document,
                        path = %path.display(),
                        error = %err,
                        "Stored document is malformed, serving default"
                    );
                    document.default_value()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                let default = document.default_value();
                if let Err(err) = self.write_locked(document, &default).await {
                    error!(document = %document, error = %err, "Failed to create document");
                } else {
                    debug!(document = %document, path = %path.display(), "Created document with default");
                }
                default
            }
            Err(err) => {
                error!(
                    document = %document,
                    path = %path.display(),
                    error = %err,
                    "Failed to read document, serving default"
                );
                document.default_value()
            }
        }
    }

    async fn save(&self, document: Document, value: &Value) -> Result<(), StoreError> {
        let _guard = self.locks[slot(document)].lock().await;
        self.write_locked(document, value).await
    }
}
