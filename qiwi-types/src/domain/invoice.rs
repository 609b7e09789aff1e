//! Bill (invoice) domain model.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::amount::Amount;
use super::status::{Status, StatusValue};
use crate::error::ModelError;

/// A payment bill as returned by the create, check and cancel endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub site_id: String,
    pub bill_id: String,
    pub amount: Amount,
    pub status: Status,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_url: Option<String>,
    pub creation_date_time: DateTime<FixedOffset>,
    pub expiration_date_time: DateTime<FixedOffset>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer: Map<String, Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub custom_fields: Map<String, Value>,
}

impl Invoice {
    /// Maps a decoded bill response into an `Invoice`.
    pub fn prepare(data: &Value) -> Result<Self, ModelError> {
        Invoice::deserialize(data).map_err(ModelError::invalid("invoice"))
    }

    pub fn is_waiting(&self) -> bool {
        self.status.value == StatusValue::Waiting
    }

    pub fn is_paid(&self) -> bool {
        self.status.value == StatusValue::Paid
    }

    pub fn is_canceled(&self) -> bool {
        self.status.value == StatusValue::Rejected
    }

    pub fn is_expired(&self) -> bool {
        self.status.value == StatusValue::Expired
    }
}

/// Absent and `null` both mean "empty".
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
