//! Client configuration

use crate::errors::{MwsError, MwsResult};
use crate::types::Marketplace;

pub const DEFAULT_TIMEOUT_MS: u64 = 30000;

/// Environment variables read by [`MwsConfig::from_env`]
pub const ENV_ACCESS_KEY: &str = "ACCESS_KEY";
pub const ENV_SECRET_KEY: &str = "SECRET_KEY";
pub const ENV_SELLER_ID: &str = "SELLER_ID";
pub const ENV_AUTH_TOKEN: &str = "MWS_AUTH_TOKEN";
pub const ENV_MARKETPLACE_ID: &str = "MARKETPLACE_ID";
pub const ENV_HOST: &str = "MWS_HOST";

/// MWS 클라이언트 설정
///
/// Credentials and marketplace of one seller account. A client keeps its
/// config for its whole lifetime and never changes it.
#[derive(Debug, Clone)]
pub struct MwsConfig {
    access_key: Option<String>,
    secret_key: Option<String>,
    host: String,
    auth_token: Option<String>,
    marketplace_id: String,
    seller_id: Option<String>,
    timeout_ms: u64,
}

impl Default for MwsConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MwsConfig {
    /// 새로운 설정 생성 (US 마켓플레이스)
    pub fn new() -> Self {
        let marketplace = Marketplace::Us;
        Self {
            access_key: None,
            secret_key: None,
            host: marketplace.mws_endpoint().to_string(),
            auth_token: None,
            marketplace_id: marketplace.id().to_string(),
            seller_id: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Reads credentials from the process environment.
    ///
    /// `ACCESS_KEY`, `SECRET_KEY` and `SELLER_ID` are required;
    /// `MWS_AUTH_TOKEN`, `MARKETPLACE_ID` and `MWS_HOST` are optional.
    pub fn from_env() -> MwsResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> MwsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| MwsError::configuration(format!("environment variable {name} is not set")))
        };

        let mut config = Self::new()
            .with_access_key(required(ENV_ACCESS_KEY)?)
            .with_secret_key(required(ENV_SECRET_KEY)?)
            .with_seller_id(required(ENV_SELLER_ID)?);

        if let Some(id) = lookup(ENV_MARKETPLACE_ID).filter(|v| !v.is_empty()) {
            config = match Marketplace::from_id(&id) {
                Some(marketplace) => config.with_marketplace(marketplace),
                None => config.with_marketplace_id(id),
            };
        }
        if let Some(host) = lookup(ENV_HOST).filter(|v| !v.is_empty()) {
            config = config.with_host(host);
        }
        if let Some(token) = lookup(ENV_AUTH_TOKEN) {
            config = config.with_auth_token(token);
        }
        Ok(config)
    }

    /// Access key 설정
    pub fn with_access_key(mut self, key: impl Into<String>) -> Self {
        self.access_key = Some(key.into());
        self
    }

    /// Secret key 설정
    pub fn with_secret_key(mut self, secret: impl Into<String>) -> Self {
        self.secret_key = Some(secret.into());
        self
    }

    /// 인증 정보로 설정
    pub fn with_credentials(
        mut self,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        self.access_key = Some(access_key.into());
        self.secret_key = Some(secret_key.into());
        self
    }

    /// MWS host without scheme, e.g. `mws.amazonservices.com`
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Delegated access token (`MWSAuthToken`). An empty token counts as none.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.auth_token = if token.is_empty() { None } else { Some(token) };
        self
    }

    pub fn with_marketplace_id(mut self, marketplace_id: impl Into<String>) -> Self {
        self.marketplace_id = marketplace_id.into();
        self
    }

    /// Sets marketplace id and host together
    pub fn with_marketplace(mut self, marketplace: Marketplace) -> Self {
        self.marketplace_id = marketplace.id().to_string();
        self.host = marketplace.mws_endpoint().to_string();
        self
    }

    pub fn with_seller_id(mut self, seller_id: impl Into<String>) -> Self {
        self.seller_id = Some(seller_id.into());
        self
    }

    /// 타임아웃 설정 (밀리초)
    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    // === Getters ===

    pub fn access_key(&self) -> Option<&str> {
        self.access_key.as_deref()
    }

    pub fn secret_key(&self) -> Option<&str> {
        self.secret_key.as_deref()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    pub fn marketplace_id(&self) -> &str {
        &self.marketplace_id
    }

    pub fn seller_id(&self) -> Option<&str> {
        self.seller_id.as_deref()
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// 인증 정보 유효성 확인
    pub fn has_credentials(&self) -> bool {
        non_empty(&self.access_key) && non_empty(&self.secret_key)
    }

    /// Fails with a configuration error when a field every call needs is missing.
    pub fn validate(&self) -> MwsResult<()> {
        if !non_empty(&self.access_key) {
            return Err(MwsError::configuration("access key is required"));
        }
        if !non_empty(&self.secret_key) {
            return Err(MwsError::configuration("secret key is required"));
        }
        if !non_empty(&self.seller_id) {
            return Err(MwsError::configuration("seller id is required"));
        }
        if self.host.is_empty() {
            return Err(MwsError::configuration("host is required"));
        }
        Ok(())
    }
}

fn non_empty(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_builder() {
        let config = MwsConfig::new()
            .with_credentials("AKIDEXAMPLE", "secret-key")
            .with_seller_id("A1SELLER")
            .with_timeout(5000);

        assert_eq!(config.access_key(), Some("AKIDEXAMPLE"));
        assert_eq!(config.secret_key(), Some("secret-key"));
        assert_eq!(config.timeout_ms(), 5000);
        assert!(config.has_credentials());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_default() {
        let config = MwsConfig::default();
        assert!(config.access_key().is_none());
        assert!(!config.has_credentials());
        assert_eq!(config.host(), "mws.amazonservices.com");
        assert_eq!(config.marketplace_id(), "ATVPDKIKX0DER");
        assert_eq!(config.timeout_ms(), DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_validate_reports_missing_seller() {
        let err = MwsConfig::new()
            .with_credentials("AKIDEXAMPLE", "secret-key")
            .validate()
            .unwrap_err();
        assert!(err.is_configuration_error());
        assert!(err.to_string().contains("seller id"));
    }

    #[test]
    fn test_empty_auth_token_is_none() {
        assert!(MwsConfig::new().with_auth_token("").auth_token().is_none());
        assert_eq!(
            MwsConfig::new().with_auth_token("amzn.mws.token").auth_token(),
            Some("amzn.mws.token")
        );
    }

    #[test]
    fn test_with_marketplace_sets_host() {
        let config = MwsConfig::new().with_marketplace(Marketplace::Jp);
        assert_eq!(config.host(), "mws.amazonservices.jp");
        assert_eq!(config.marketplace_id(), "A1VC38T7YXB528");
    }

    #[test]
    fn test_from_lookup() {
        let env: HashMap<&str, &str> = [
            (ENV_ACCESS_KEY, "AKIDEXAMPLE"),
            (ENV_SECRET_KEY, "secret-key"),
            (ENV_SELLER_ID, "A1SELLER"),
            (ENV_MARKETPLACE_ID, "A1PA6795UKMFR9"),
        ]
        .into_iter()
        .collect();

        let config = MwsConfig::from_lookup(|name| env.get(name).map(|v| v.to_string())).unwrap();
        assert_eq!(config.seller_id(), Some("A1SELLER"));
        assert_eq!(config.marketplace_id(), "A1PA6795UKMFR9");
        assert_eq!(config.host(), "mws-eu.amazonservices.com");
        assert!(config.auth_token().is_none());
    }

    #[test]
    fn test_from_lookup_missing_secret() {
        let err = MwsConfig::from_lookup(|name| match name {
            ENV_ACCESS_KEY | ENV_SELLER_ID => Some("x".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(err.to_string().contains(ENV_SECRET_KEY));
    }
}
