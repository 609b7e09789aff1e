//! Payment notification envelope sent by the provider to the merchant.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::invoice::Invoice;
use crate::error::ModelError;

/// Callback body: `{"bill": {...}, "version": "1"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub bill: Invoice,
    #[serde(default)]
    pub version: String,
}

impl Notification {
    /// Maps a decoded callback body. `version` may be absent but must be a
    /// string when present.
    pub fn prepare(data: &Value) -> Result<Self, ModelError> {
        if data.get("bill").is_none() {
            return Err(ModelError::MissingField("bill"));
        }
        Notification::deserialize(data).map_err(ModelError::invalid("notification"))
    }
}
