//! MWS client, HTTP transport and related utilities

mod config;
mod http;
mod mws;
mod registry;

pub use config::{
    MwsConfig, DEFAULT_TIMEOUT_MS, ENV_ACCESS_KEY, ENV_AUTH_TOKEN, ENV_HOST, ENV_MARKETPLACE_ID,
    ENV_SECRET_KEY, ENV_SELLER_ID,
};
pub use http::{HttpClient, HttpRequest, HttpResponse, Transport};
pub use mws::{
    resolve_url, MwsClient, MwsResponse, SignedEnvelope, FEED_CONTENT_TYPE, FORM_CONTENT_TYPE,
    HTTP_METHOD, SIGNATURE_METHOD, SIGNATURE_VERSION,
};
pub use registry::{VersionRegistry, FEEDS_PATH, PRODUCTS_PATH, REPORTS_PATH, SELLERS_PATH};
