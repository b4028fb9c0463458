//! Persistence for the four documents.
//!
//! Handlers only see [`DocumentStore`]; the binary wires in [`FileStore`],
//! tests can swap in [`MemoryStore`].

mod file;
#[cfg(test)]
mod memory;

pub use file::FileStore;
#[cfg(test)]
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreError;
use crate::models::Document;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Current content of `document`. Never fails: a missing document is
    /// created with its default, an unreadable one yields the default.
    async fn load(&self, document: Document) -> Value;

    /// Replace the whole content of `document` with `value`.
    async fn save(&self, document: Document, value: &Value) -> Result<(), StoreError>;

    /// Reset the three inventory documents to empty sequences. Pallets are kept.
    async fn clear_all(&self) -> Result<(), StoreError> {
        let empty = Value::Array(Vec::new());
        for document in Document::INVENTORY {
            self.save(document, &empty).await?;
        }
        Ok(())
    }
}
