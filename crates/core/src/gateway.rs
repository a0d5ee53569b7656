//! Outbound HTTP client for the Northwind REST API.

use crate::config::BackendConfig;
use crate::error::NorthwindResult;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Body returned by the backend.
///
/// Serializes untagged: JSON passes through as-is and text becomes a JSON
/// string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiPayload {
    /// Body parsed as JSON.
    Json(serde_json::Value),
    /// Body that was not valid JSON, relayed verbatim.
    Text(String),
}

impl ApiPayload {
    /// Parse a response body, falling back to text when it is not JSON.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice(body) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(String::from_utf8_lossy(body).into_owned()),
        }
    }

    /// Pretty-printed JSON rendering, used as MCP text content.
    pub fn to_pretty_json(&self) -> NorthwindResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Reusable GET client. Cheap to clone.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
}

impl GatewayClient {
    pub fn new(config: &BackendConfig) -> NorthwindResult<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            "northwind-mcp/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Issue one GET and return the body.
    ///
    /// The status code is not inspected: an error page from the backend is
    /// relayed like any other payload. Only transport failures are errors.
    pub async fn call(&self, url: &str) -> NorthwindResult<ApiPayload> {
        info!(url = %url, "Calling API");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        debug!(status = status.as_u16(), bytes = body.len(), "API responded");
        Ok(ApiPayload::from_body(&body))
    }
}
