//! Request assembly and dispatch

use std::collections::HashMap;
use std::sync::Arc;
use url::Url;

use super::http::{HttpClient, HttpRequest, Transport};
use super::registry::VersionRegistry;
use super::MwsConfig;
use crate::errors::{MwsError, MwsResult};
use crate::signing::{request_authority, sign_parameters, SIGNATURE_KEY, TIMESTAMP_KEY};
use crate::types::{Parameters, Quota};
use crate::utils::crypto::md5_base64;
use crate::utils::time::{format_timestamp, Clock, SystemClock};

pub const HTTP_METHOD: &str = "POST";
pub const SIGNATURE_VERSION: &str = "2";
pub const SIGNATURE_METHOD: &str = "HmacSHA256";

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const FEED_CONTENT_TYPE: &str = "text/xml; charset=iso-8859-1";

/// Signed request, before it is turned into bytes on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedEnvelope {
    pub method: String,
    pub url: Url,
    pub host: String,
    pub path: String,
    /// Final parameters, `Signature` included
    pub parameters: Parameters,
    /// Feed document for binary-payload calls
    pub body: Option<Vec<u8>>,
}

impl SignedEnvelope {
    /// Encodes the envelope.
    ///
    /// Without a body the parameters become the form-encoded request body.
    /// With a body they move to the query string, the raw bytes become the
    /// body and `Content-MD5` carries base64(md5(body)).
    pub fn into_request(self) -> HttpRequest {
        let encoded = self.parameters.to_form_encoded();
        let mut headers = HashMap::new();

        match self.body {
            None => {
                headers.insert("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string());
                HttpRequest {
                    method: self.method,
                    url: self.url.to_string(),
                    headers,
                    body: encoded.into_bytes(),
                }
            }
            Some(body) => {
                let mut url = self.url;
                url.set_query(Some(&encoded));
                headers.insert("Content-MD5".to_string(), md5_base64(&body));
                headers.insert("Content-Type".to_string(), FEED_CONTENT_TYPE.to_string());
                HttpRequest {
                    method: self.method,
                    url: url.to_string(),
                    headers,
                    body,
                }
            }
        }
    }
}

/// Response of one MWS call. The body is returned undecoded.
#[derive(Debug, Clone, PartialEq)]
pub struct MwsResponse {
    pub status: u16,
    pub body: String,
    pub quota: Quota,
}

impl MwsResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// MWS API client
///
/// Injects the authentication fields, signs, and sends each call through its
/// [`Transport`]. Config and version registry are read-only after
/// construction.
pub struct MwsClient {
    config: MwsConfig,
    registry: Arc<VersionRegistry>,
    transport: Box<dyn Transport>,
    clock: Box<dyn Clock>,
}

impl MwsClient {
    /// Client with the reqwest transport, system clock and standard versions
    pub fn new(config: MwsConfig) -> MwsResult<Self> {
        let transport = HttpClient::new(&config)?;
        Ok(Self {
            config,
            registry: Arc::new(VersionRegistry::standard()),
            transport: Box::new(transport),
            clock: Box::new(SystemClock),
        })
    }

    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Box::new(transport);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_registry(mut self, registry: Arc<VersionRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn config(&self) -> &MwsConfig {
        &self.config
    }

    pub fn registry(&self) -> &VersionRegistry {
        &self.registry
    }

    pub fn marketplace_id(&self) -> &str {
        self.config.marketplace_id()
    }

    /// Builds and signs a call without sending it.
    ///
    /// Standard fields overwrite caller parameters with the same name.
    pub fn prepare(
        &self,
        action: &str,
        action_path: &str,
        mut params: Parameters,
        body: Option<Vec<u8>>,
    ) -> MwsResult<SignedEnvelope> {
        self.config.validate()?;
        let secret = self
            .config
            .secret_key()
            .ok_or_else(|| MwsError::configuration("secret key is required"))?;

        let url = resolve_url(self.config.host(), action_path)?;
        let host = request_authority(&url)?;
        let path = url.path().to_string();

        let version = self.registry.require(action_path)?;
        tracing::debug!(action, path = %path, version, "assembling MWS request");

        if let Some(token) = self.config.auth_token() {
            params.insert("MWSAuthToken", token);
        }
        params.insert("Action", action);
        params.insert("AWSAccessKeyId", self.config.access_key().unwrap_or_default());
        params.insert("SellerId", self.config.seller_id().unwrap_or_default());
        params.insert("SignatureVersion", SIGNATURE_VERSION);
        params.insert("SignatureMethod", SIGNATURE_METHOD);
        params.insert("Version", version);
        params.insert(TIMESTAMP_KEY, format_timestamp(self.clock.now()));

        let signature = sign_parameters(HTTP_METHOD, &host, &path, &params, secret)?;
        params.insert(SIGNATURE_KEY, signature);

        Ok(SignedEnvelope {
            method: HTTP_METHOD.to_string(),
            url,
            host,
            path,
            parameters: params,
            body,
        })
    }

    /// Signs and sends one call.
    ///
    /// Any failure (config, URL, signing, transport) is returned as is; there
    /// are no retries. Non-2xx responses are returned like any other.
    pub async fn execute(
        &self,
        action: &str,
        action_path: &str,
        params: Parameters,
        body: Option<Vec<u8>>,
    ) -> MwsResult<MwsResponse> {
        let request = self.prepare(action, action_path, params, body)?.into_request();
        let url = request.url.clone();

        let response = self.transport.send(request).await?;
        if !(200..300).contains(&response.status) {
            tracing::warn!(action, status = response.status, url = %url, "MWS returned non-success status");
        }

        Ok(MwsResponse {
            status: response.status,
            body: response.body,
            quota: response.quota,
        })
    }
}

/// `https://{host}{action_path}`
pub fn resolve_url(host: &str, action_path: &str) -> MwsResult<Url> {
    let raw = format!("https://{host}{action_path}");
    if host.is_empty() || host.contains(['/', '?', '#']) {
        return Err(MwsError::url_resolution(raw, "host must be a bare authority"));
    }
    if !action_path.starts_with('/') {
        return Err(MwsError::url_resolution(raw, "action path must start with '/'"));
    }

    let url = Url::parse(&raw).map_err(|e| MwsError::url_resolution(raw.as_str(), e.to_string()))?;
    if url.query().is_some() || url.fragment().is_some() {
        return Err(MwsError::url_resolution(raw, "action path must not carry a query or fragment"));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url() {
        let url = resolve_url("mws.amazonservices.com", "/Reports/2009-01-01").unwrap();
        assert_eq!(url.as_str(), "https://mws.amazonservices.com/Reports/2009-01-01");
    }

    #[test]
    fn test_resolve_url_errors() {
        for (host, path) in [
            ("", "/Reports/2009-01-01"),
            ("https://mws.amazonservices.com", "/Reports/2009-01-01"),
            ("mws.amazonservices.com", "Reports/2009-01-01"),
            ("mws.amazonservices.com", "/Reports?x=1"),
            ("bad host", "/Reports/2009-01-01"),
        ] {
            let err = resolve_url(host, path).unwrap_err();
            assert_eq!(err.code(), "URL_RESOLUTION_ERROR", "{host} {path}");
        }
    }

    #[test]
    fn test_form_envelope_into_request() {
        let envelope = SignedEnvelope {
            method: "POST".into(),
            url: resolve_url("mws.amazonservices.com", "/Reports/2009-01-01").unwrap(),
            host: "mws.amazonservices.com".into(),
            path: "/Reports/2009-01-01".into(),
            parameters: [("Action", "GetReport"), ("Signature", "a+b=")].into_iter().collect(),
            body: None,
        };
        let request = envelope.into_request();
        assert_eq!(request.url, "https://mws.amazonservices.com/Reports/2009-01-01");
        assert_eq!(request.header("content-type"), Some(FORM_CONTENT_TYPE));
        assert!(request.header("Content-MD5").is_none());
        assert_eq!(request.body, b"Action=GetReport&Signature=a%2Bb%3D".to_vec());
    }

    #[test]
    fn test_feed_envelope_into_request() {
        let envelope = SignedEnvelope {
            method: "POST".into(),
            url: resolve_url("mws.amazonservices.com", "/Feeds/2009-01-01").unwrap(),
            host: "mws.amazonservices.com".into(),
            path: "/Feeds/2009-01-01".into(),
            parameters: [("Action", "SubmitFeed")].into_iter().collect(),
            body: Some(Vec::new()),
        };
        let request = envelope.into_request();
        assert_eq!(
            request.url,
            "https://mws.amazonservices.com/Feeds/2009-01-01?Action=SubmitFeed"
        );
        assert_eq!(request.header("Content-MD5"), Some("1B2M2Y8AsgTpgAmY7PhCfg=="));
        assert_eq!(request.header("Content-Type"), Some(FEED_CONTENT_TYPE));
        assert!(request.body.is_empty());
    }

    #[test]
    fn test_response_success_range() {
        let mut response = MwsResponse {
            status: 200,
            body: String::new(),
            quota: Quota::default(),
        };
        assert!(response.is_success());
        response.status = 503;
        assert!(!response.is_success());
    }
}
