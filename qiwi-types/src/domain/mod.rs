//! Domain models for the bill API.

pub mod amount;
pub mod invoice;
pub mod notification;
pub mod refund;
pub mod status;

pub use amount::Amount;
pub use invoice::Invoice;
pub use notification::Notification;
pub use refund::Refund;
pub use status::{Status, StatusValue};
