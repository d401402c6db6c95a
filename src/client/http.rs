//! HTTP transport for signed requests

use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;

use super::MwsConfig;
use crate::errors::{MwsError, MwsResult};
use crate::types::Quota;

/// Fully encoded outbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: String,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response: status, undecoded body text and quota headers
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
    pub quota: Quota,
}

/// Sends one request and returns whatever came back.
///
/// Timeouts, TLS and connection reuse belong to the implementation. A non-2xx
/// status is not an error at this layer.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> MwsResult<HttpResponse>;
}

/// HTTP 클라이언트 (reqwest)
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// 새로운 HTTP 클라이언트 생성
    pub fn new(config: &MwsConfig) -> MwsResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms()))
            .build()
            .map_err(|e| MwsError::Transport {
                url: config.host().to_string(),
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: HttpRequest) -> MwsResult<HttpResponse> {
        let method = reqwest::Method::from_bytes(request.method.as_bytes()).map_err(|e| {
            MwsError::Transport {
                url: request.url.clone(),
                message: e.to_string(),
            }
        })?;

        let mut builder = self.client.request(method, &request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        let response = builder.body(request.body).send().await?;

        let status = response.status().as_u16();
        let quota = Quota::from_headers(
            response
                .headers()
                .iter()
                .filter_map(|(name, value)| value.to_str().ok().map(|v| (name.as_str(), v))),
        );
        let body = response.text().await?;

        Ok(HttpResponse {
            status,
            body,
            quota,
        })
    }
}
