//! Endpoint wrappers, one module per MWS section
//!
//! Each wrapper builds the call's parameter set and hands it to
//! [`MwsClient::execute`](crate::client::MwsClient::execute).

mod feeds;
mod products;
mod reports;
mod sellers;

pub use feeds::DEFAULT_FEED_TYPE;
