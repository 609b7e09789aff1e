//! # QIWI Types
//!
//! Domain types for the QIWI bill API client.
//! This crate has ZERO IO dependencies - only value objects decoded from
//! provider responses, request payloads, and mapping errors.
//!
//! ## Layout
//!
//! - `domain/` - Value objects (Amount, Status, Invoice, Refund, Notification)
//! - `dto/` - Request payloads for the create and refund endpoints
//! - `error/` - Errors raised while mapping payloads into models

pub mod domain;
pub mod dto;
pub mod error;

// Re-export commonly used types
pub use domain::{Amount, Invoice, Notification, Refund, Status, StatusValue};
pub use dto::*;
pub use error::ModelError;

// Decimal is part of the public API of Amount.
pub use rust_decimal::Decimal;
