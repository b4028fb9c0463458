use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::DocumentStore;
use crate::error::StoreError;
use crate::models::Document;

/// In-memory [`DocumentStore`] used by handler tests. Writes never fail.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<HashMap<Document, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn load(&self, document: Document) -> Value {
        if let Some(value) = self.documents.read().await.get(&document) {
            return value.clone();
        }
        self.documents
            .write()
            .await
            .entry(document)
            .or_insert_with(|| document.default_value())
            .clone()
    }

    async fn save(&self, document: Document, value: &Value) -> Result<(), StoreError> {
        self.documents.write().await.insert(document, value.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn untouched_documents_load_defaults() {
        let store = MemoryStore::new();
        assert_eq!(store.load(Document::Total).await, json!([]));
        assert_eq!(store.load(Document::Pallets).await, json!({ "occupiedPallets": 0 }));
    }

    #[tokio::test]
    async fn clear_all_resets_inventory_only() {
        let store = MemoryStore::new();
        store.save(Document::Polly, &json!([{ "item": "a" }])).await.unwrap();
        store
            .save(Document::Pallets, &json!({ "occupiedPallets": 3 }))
            .await
            .unwrap();

        store.clear_all().await.unwrap();

        assert_eq!(store.load(Document::Polly).await, json!([]));
        assert_eq!(store.load(Document::Pallets).await, json!({ "occupiedPallets": 3 }));
    }
}
