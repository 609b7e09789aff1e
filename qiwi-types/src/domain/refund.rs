//! Refund domain model.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::amount::Amount;
use super::status::Status;
use crate::error::ModelError;

/// A refund issued against a paid bill.
///
/// Whether the refund is partial or full is decided by the provider and
/// reported through `status.value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    pub amount: Amount,
    pub datetime: DateTime<FixedOffset>,
    pub refund_id: String,
    pub status: Status,
}

impl Refund {
    /// Maps a decoded refund response into a `Refund`.
    pub fn prepare(data: &Value) -> Result<Self, ModelError> {
        Refund::deserialize(data).map_err(ModelError::invalid("refund"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatusValue;
    use serde_json::json;

    #[test]
    fn test_refund_prepare() {
        let data = json!({
            "amount": {"currency": "RUB", "value": "10.00"},
            "datetime": "2019-08-28T16:30:00+03:00",
            "refundId": "6b2f1c56-0b6b-4e8a-9d5e-2f0a8d1f0e7a",
            "status": {"value": "PARTIAL", "changedDateTime": "2019-08-28T16:30:00+03:00"}
        });
        let refund = Refund::prepare(&data).unwrap();
        assert_eq!(refund.amount.value.to_string(), "10.00");
        assert_eq!(refund.refund_id, "6b2f1c56-0b6b-4e8a-9d5e-2f0a8d1f0e7a");
        assert_eq!(refund.status.value, StatusValue::Partial);
        assert_eq!(
            refund.datetime,
            DateTime::parse_from_rfc3339("2019-08-28T16:30:00+03:00").unwrap()
        );
    }

    #[test]
    fn test_refund_status_may_use_legacy_datetime() {
        let data = json!({
            "amount": {"currency": "RUB", "value": "42.24"},
            "datetime": "2019-08-28T16:30:00+03:00",
            "refundId": "r-1",
            "status": {"value": "FULL", "datetime": "2019-08-28T16:30:00+03:00"}
        });
        let refund = Refund::prepare(&data).unwrap();
        assert_eq!(refund.status.value, StatusValue::Full);
    }

    #[test]
    fn test_refund_without_id_fails() {
        let data = json!({
            "amount": {"currency": "RUB", "value": "10.00"},
            "datetime": "2019-08-28T16:30:00+03:00",
            "status": {"value": "FULL", "changedDateTime": "2019-08-28T16:30:00+03:00"}
        });
        assert!(Refund::prepare(&data).is_err());
    }
}
