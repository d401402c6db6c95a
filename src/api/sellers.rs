//! Sellers section (`/Sellers/2011-07-01`)

use crate::client::{MwsClient, MwsResponse, SELLERS_PATH};
use crate::errors::MwsResult;
use crate::types::Parameters;

impl MwsClient {
    /// Marketplaces the seller can sell in
    pub async fn list_marketplace_participations(&self) -> MwsResult<MwsResponse> {
        self.execute(
            "ListMarketplaceParticipations",
            SELLERS_PATH,
            Parameters::new(),
            None,
        )
        .await
    }
}
