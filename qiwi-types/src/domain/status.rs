//! Bill and refund status.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ModelError;

/// Status values reported by the bill API.
///
/// Bills move through `WAITING` into one of `PAID`, `REJECTED` or `EXPIRED`.
/// Refunds report `PARTIAL` or `FULL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusValue {
    Waiting,
    Paid,
    Rejected,
    Expired,
    Partial,
    Full,
}

impl AsRef<str> for StatusValue {
    fn as_ref(&self) -> &str {
        match self {
            Self::Waiting => "WAITING",
            Self::Paid => "PAID",
            Self::Rejected => "REJECTED",
            Self::Expired => "EXPIRED",
            Self::Partial => "PARTIAL",
            Self::Full => "FULL",
        }
    }
}

impl std::fmt::Display for StatusValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// Status value plus the moment it last changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStatus")]
pub struct Status {
    pub value: StatusValue,
    #[serde(rename = "changedDateTime")]
    pub changed_at: DateTime<FixedOffset>,
}

impl Status {
    /// Reads the nested `status` object of a bill or refund payload.
    pub fn prepare(data: &Value) -> Result<Self, ModelError> {
        let raw = data.get("status").ok_or(ModelError::MissingField("status"))?;
        Status::deserialize(raw).map_err(ModelError::invalid("status"))
    }
}

/// Wire shape of a status. Older responses carry `datetime`, newer ones
/// `changedDateTime`.
#[derive(Deserialize)]
struct RawStatus {
    value: StatusValue,
    #[serde(default)]
    datetime: Option<DateTime<FixedOffset>>,
    #[serde(default, rename = "changedDateTime")]
    changed_date_time: Option<DateTime<FixedOffset>>,
}

impl TryFrom<RawStatus> for Status {
    type Error = ModelError;

    fn try_from(raw: RawStatus) -> Result<Self, Self::Error> {
        let mut changed_at = raw.datetime;
        if raw.changed_date_time.is_some() {
            changed_at = raw.changed_date_time;
        }
        let changed_at = changed_at.ok_or(ModelError::MissingField("status.changedDateTime"))?;
        Ok(Status {
            value: raw.value,
            changed_at,
        })
    }
}
