use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Contents of the pallets document. Any JSON number is accepted and kept as sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pallets {
    pub occupied_pallets: Number,
}

impl Default for Pallets {
    fn default() -> Self {
        Self {
            occupied_pallets: Number::from(0),
        }
    }
}

/// Body of `POST /update-pallets`. The field is left untyped so a wrong type
/// can be reported as a validation error rather than a decode failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePallets {
    #[serde(default)]
    pub occupied_pallets: Option<Value>,
}

impl UpdatePallets {
    /// Returns the record to store, or `None` if `occupiedPallets` is not a number.
    pub fn validate(self) -> Option<Pallets> {
        match self.occupied_pallets {
            Some(Value::Number(n)) => Some(Pallets {
                occupied_pallets: n,
            }),
            _ => None,
        }
    }
}
