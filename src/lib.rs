//! MWS-Rust: Amazon Marketplace Web Service client
//!
//! Every MWS call carries a Signature Version 2 signature computed over its
//! method, host, path and sorted parameters. This crate flattens typed
//! requests into MWS's `List.Item.N` parameter convention, injects the
//! authentication fields, signs, and dispatches the call.
//!
//! Response bodies are returned as undecoded text.

pub mod api;
pub mod client;
pub mod errors;
pub mod signing;
pub mod types;
pub mod utils;

// Re-exports
pub use client::{MwsClient, MwsConfig, MwsResponse, Transport, VersionRegistry};
pub use errors::{MwsError, MwsResult};
pub use signing::{sign_parameters, sign_query_url};
pub use types::{
    FeeEstimateRequest, GetReportRequestListRequest, Marketplace, Parameters, Quota,
    RequestReportRequest,
};
