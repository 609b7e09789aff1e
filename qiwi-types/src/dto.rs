//! Request payloads sent to the bill API.

use serde::{Deserialize, Serialize};

use crate::domain::Amount;

// ─────────────────────────────────────────────────────────────────────────────
// Bill DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Body of the "create or replace bill" request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBillRequest {
    pub amount: Amount,
    /// ISO-8601 timestamp with a numeric UTC offset
    pub expiration_date_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Always sent, possibly empty
    #[serde(default)]
    pub customer: CustomerPayload,
}

/// Customer section of a bill request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Refund DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Body of the refund request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundRequest {
    pub amount: Amount,
}
