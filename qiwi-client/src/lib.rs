//! # QIWI Client SDK
//!
//! A typed Rust client for the QIWI bill API: create, check, cancel and
//! refund bills, plus the HMAC check for payment notifications.
//!
//! Each call performs exactly one HTTP exchange and hands back either the
//! mapped domain object or an [`ApiError`]. Nothing is retried.

pub mod config;
pub mod error;
pub mod signature;
pub mod transport;

use chrono::{DateTime, Offset, SecondsFormat, TimeDelta, Utc};
use chrono_tz::Tz;
use reqwest::Method;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};
use uuid::Uuid;

use qiwi_types::{Amount, CreateBillRequest, CustomerPayload, Decimal, Invoice, Refund, RefundRequest};

pub use config::{ClientConfig, DEFAULT_BASE_URL, Timeouts};
pub use error::ApiError;
pub use signature::{sign_invoice, signature_payload, verify_invoice_signature, verify_notification};
pub use transport::{ApiResponse, HttpTransport};

/// Currency used when the caller has no preference.
pub const DEFAULT_CURRENCY: &str = "RUB";

/// Timezone the expiration timestamp is expressed in by default.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Moscow;

/// Bills expire one day after creation by default.
pub fn default_expiry() -> TimeDelta {
    TimeDelta::days(1)
}

/// QIWI bill API client.
pub struct QiwiClient {
    base_url: String,
    headers: HeaderMap,
    transport: HttpTransport,
}

impl QiwiClient {
    /// Creates a client for the production endpoint.
    pub fn new(secret_key: impl Into<String>) -> Result<Self, ApiError> {
        Self::from_config(ClientConfig::new(secret_key))
    }

    /// Creates a client from explicit settings.
    pub fn from_config(config: ClientConfig) -> Result<Self, ApiError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.secret_key))
            .map_err(|_| ApiError::InvalidConfig("secret key is not a valid header value".into()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            headers,
            transport: HttpTransport::new(config.timeouts)?,
        })
    }

    /// Points the client at another bill resource (sandbox, mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Replaces the connect/read timeout pair. The HTTP client is rebuilt.
    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Result<Self, ApiError> {
        self.transport = HttpTransport::new(timeouts)?;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeouts(&self) -> Timeouts {
        self.transport.timeouts()
    }

    /// Issues a new bill under a freshly generated id.
    ///
    /// The bill expires `expire_in` from now; the timestamp is sent with the
    /// UTC offset of `timezone`. Empty `comment` and `email` are left out of
    /// the payload.
    #[instrument(skip(self, comment, email))]
    pub async fn create_bill(
        &self,
        amount: Decimal,
        currency: &str,
        comment: Option<&str>,
        expire_in: TimeDelta,
        email: Option<&str>,
        timezone: Tz,
    ) -> Result<Invoice, ApiError> {
        let bill_id = Uuid::new_v4();
        let req = CreateBillRequest {
            amount: Amount::new(amount, currency),
            expiration_date_time: expiration_timestamp(Utc::now(), expire_in, timezone)?,
            comment: non_empty(comment),
            customer: CustomerPayload {
                account: non_empty(email),
            },
        };

        info!(%bill_id, "Creating bill");
        let data = self.put(&format!("{}/{}", self.base_url, bill_id), &req).await?;
        Ok(Invoice::prepare(&data)?)
    }

    /// Fetches the current state of a bill.
    #[instrument(skip(self))]
    pub async fn check_bill(&self, bill_id: &str) -> Result<Invoice, ApiError> {
        let data = self.get(&format!("{}/{}", self.base_url, bill_id)).await?;
        Ok(Invoice::prepare(&data)?)
    }

    /// Rejects an unpaid bill. The returned invoice carries the provider's
    /// view of the bill after the request, normally `REJECTED`.
    #[instrument(skip(self))]
    pub async fn cancel_bill(&self, bill_id: &str) -> Result<Invoice, ApiError> {
        let data = self
            .post(&format!("{}/{}/reject", self.base_url, bill_id))
            .await?;
        Ok(Invoice::prepare(&data)?)
    }

    /// Refunds `amount` of a paid bill under a freshly generated refund id.
    /// Whether the refund is partial or full is decided by the provider.
    #[instrument(skip(self))]
    pub async fn refund_bill(
        &self,
        amount: Decimal,
        bill_id: &str,
        currency: &str,
    ) -> Result<Refund, ApiError> {
        let refund_id = Uuid::new_v4();
        let req = RefundRequest {
            amount: Amount::new(amount, currency),
        };

        info!(%refund_id, "Refunding bill");
        let data = self
            .put(
                &format!("{}/{}/refunds/{}", self.base_url, bill_id, refund_id),
                &req,
            )
            .await?;
        Ok(Refund::prepare(&data)?)
    }

    async fn get(&self, url: &str) -> Result<Value, ApiError> {
        let req = self
            .transport
            .request(Method::GET, url)
            .headers(self.headers.clone());
        self.transport.execute(req).await?.json()
    }

    async fn post(&self, url: &str) -> Result<Value, ApiError> {
        let req = self
            .transport
            .request(Method::POST, url)
            .headers(self.headers.clone());
        self.transport.execute(req).await?.json()
    }

    async fn put<B: Serialize>(&self, url: &str, body: &B) -> Result<Value, ApiError> {
        let req = self
            .transport
            .request(Method::PUT, url)
            .headers(self.headers.clone())
            .json(body);
        self.transport.execute(req).await?.json()
    }
}

/// `now + expire_in`, rendered as ISO-8601 with seconds precision and the
/// numeric offset `timezone` has at that instant.
pub fn expiration_timestamp(
    now: DateTime<Utc>,
    expire_in: TimeDelta,
    timezone: Tz,
) -> Result<String, ApiError> {
    let expires_at = now.checked_add_signed(expire_in).ok_or_else(|| {
        ApiError::InvalidArgument(format!("expiry {} is out of range", expire_in))
    })?;
    let local = expires_at.with_timezone(&timezone);
    let offset = local.offset().fix();
    Ok(local
        .with_timezone(&offset)
        .to_rfc3339_opts(SecondsFormat::Secs, false))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
