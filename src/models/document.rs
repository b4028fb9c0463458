use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A named JSON record persisted as one file in the data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Document {
    Polly,
    Polikarpova,
    Total,
    Pallets,
}

impl Document {
    /// The three inventory documents, in the order `clear_all` resets them.
    pub const INVENTORY: [Document; 3] = [Document::Polly, Document::Polikarpova, Document::Total];

    pub fn name(self) -> &'static str {
        match self {
            Document::Polly => "polly",
            Document::Polikarpova => "polikarpova",
            Document::Total => "total",
            Document::Pallets => "pallets",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Document::Polly => "inventory_polly.json",
            Document::Polikarpova => "inventory_polikarpova.json",
            Document::Total => "inventory_total.json",
            Document::Pallets => "pallets.json",
        }
    }

    /// Value served (and persisted on first access) when the file is missing or unreadable.
    pub fn default_value(self) -> Value {
        match self {
            Document::Pallets => json!({ "occupiedPallets": 0 }),
            _ => Value::Array(Vec::new()),
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Request / response payloads ──────────────────────────────────────────────

/// Body of `POST /save-data`. Absent or `null` fields leave their document untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveData {
    #[serde(default)]
    pub polly_data: Option<Value>,
    #[serde(default)]
    pub polikarpova_data: Option<Value>,
    #[serde(default)]
    pub total_data: Option<Value>,
}

impl SaveData {
    /// Documents to overwrite, paired with their new content.
    pub fn into_updates(self) -> Vec<(Document, Value)> {
        [
            (Document::Polikarpova, self.polikarpova_data),
            (Document::Polly, self.polly_data),
            (Document::Total, self.total_data),
        ]
        .into_iter()
        .filter_map(|(doc, value)| value.map(|v| (doc, v)))
        .collect()
    }
}

/// Response of `GET /get-data`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySnapshot {
    pub polly_data: Value,
    pub polikarpova_data: Value,
    pub total_data: Value,
}
