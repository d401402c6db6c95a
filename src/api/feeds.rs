//! Feeds section (`/Feeds/2009-01-01`)

use crate::client::{MwsClient, MwsResponse, FEEDS_PATH};
use crate::errors::MwsResult;
use crate::types::Parameters;

pub const DEFAULT_FEED_TYPE: &str = "_POST_PRODUCT_DATA_";

impl MwsClient {
    /// Uploads a feed document.
    ///
    /// The document is sent as the raw body with a `Content-MD5` header; the
    /// signed parameters travel in the query string.
    pub async fn submit_feed(&self, content: Vec<u8>, feed_type: &str) -> MwsResult<MwsResponse> {
        let mut params = Parameters::new();
        params.insert("FeedType", feed_type);

        self.execute("SubmitFeed", FEEDS_PATH, params, Some(content))
            .await
    }
}
