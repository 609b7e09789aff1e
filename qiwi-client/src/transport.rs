//! HTTP transport: one exchange per call, outcome classified into
//! [`ApiError`] kinds.

use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::{debug, error};

use crate::config::Timeouts;
use crate::error::ApiError;

/// A successful (2xx) response. The body is decoded on demand.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    body: String,
}

impl ApiResponse {
    /// Decodes the body as JSON.
    pub fn json(&self) -> Result<Value, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| {
            ApiError::MalformedResponse(format!("Invalid JSON body: {:?} ({})", self.body, e))
        })
    }
}

/// Wraps a `reqwest::Client` configured with the connect/read timeout pair.
pub struct HttpTransport {
    http: Client,
    timeouts: Timeouts,
}

impl HttpTransport {
    pub fn new(timeouts: Timeouts) -> Result<Self, ApiError> {
        let http = Client::builder()
            .connect_timeout(timeouts.connect)
            .read_timeout(timeouts.read)
            .build()
            .map_err(|e| ApiError::InvalidConfig(format!("cannot build HTTP client: {}", e)))?;
        Ok(Self { http, timeouts })
    }

    pub fn timeouts(&self) -> Timeouts {
        self.timeouts
    }

    /// Starts a request on the underlying client.
    pub fn request(&self, method: reqwest::Method, url: &str) -> RequestBuilder {
        self.http.request(method, url)
    }

    /// Performs the exchange.
    ///
    /// Non-2xx statuses become [`ApiError::RemoteRejection`] with the raw body,
    /// timeouts become [`ApiError::TransportTimeout`], anything else that
    /// fails below HTTP becomes [`ApiError::TransportFailure`].
    pub async fn execute(&self, request: RequestBuilder) -> Result<ApiResponse, ApiError> {
        let request = request.build().map_err(|e| self.classify(e, "<unbuilt>"))?;
        let method = request.method().clone();
        let url = request.url().to_string();

        debug!("Making {} request to {}", method, url);
        let resp = self
            .http
            .execute(request)
            .await
            .map_err(|e| self.classify(e, &url))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| self.classify(e, &url))?;

        if !status.is_success() {
            error!(
                "HTTPError with HTTP status: {} @ {}. Response: {}",
                status.as_u16(),
                url,
                body
            );
            return Err(ApiError::RemoteRejection {
                status: status.as_u16(),
                body,
            });
        }

        debug!("{} {} -> {}", method, url, status.as_u16());
        Ok(ApiResponse { body })
    }

    fn classify(&self, err: reqwest::Error, url: &str) -> ApiError {
        if err.is_timeout() {
            error!(
                "Connection timeout: {}. Timeout settings {:?}",
                url, self.timeouts
            );
            ApiError::TransportTimeout {
                connect: self.timeouts.connect,
                read: self.timeouts.read,
            }
        } else {
            error!("Request to {} failed: {}", url, err);
            ApiError::TransportFailure(err)
        }
    }
}
