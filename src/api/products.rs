//! Products section (`/Products/2011-10-01`)

use crate::client::{MwsClient, MwsResponse, PRODUCTS_PATH};
use crate::errors::MwsResult;
use crate::types::{fees_estimate_parameters, FeeEstimateRequest, Parameters};

impl MwsClient {
    /// Products and their attributes for a search query
    pub async fn list_matching_products(
        &self,
        query: &str,
        query_context_id: Option<&str>,
    ) -> MwsResult<MwsResponse> {
        let mut params = Parameters::new();
        params.insert("MarketplaceId", self.marketplace_id());
        params.insert("Query", query);
        params.insert_opt("QueryContextId", query_context_id.filter(|id| !id.is_empty()));

        self.execute("ListMatchingProducts", PRODUCTS_PATH, params, None)
            .await
    }

    pub async fn get_lowest_offer_listings_for_asin<S: AsRef<str>>(
        &self,
        asins: &[S],
    ) -> MwsResult<MwsResponse> {
        let params = self.asin_list_parameters(asins);
        self.execute("GetLowestOfferListingsForASIN", PRODUCTS_PATH, params, None)
            .await
    }

    pub async fn get_competitive_pricing_for_asin<S: AsRef<str>>(
        &self,
        asins: &[S],
    ) -> MwsResult<MwsResponse> {
        let params = self.asin_list_parameters(asins);
        self.execute("GetCompetitivePricingForASIN", PRODUCTS_PATH, params, None)
            .await
    }

    /// Products matching a list of identifiers of one type (ASIN, UPC, EAN, ...)
    pub async fn get_matching_product_for_id<S: AsRef<str>>(
        &self,
        id_type: &str,
        ids: &[S],
    ) -> MwsResult<MwsResponse> {
        let mut params = Parameters::new();
        params.insert_indexed("IdList.Id", ids.iter().map(|s| s.as_ref()));
        params.insert("IdType", id_type);
        params.insert("MarketplaceId", self.marketplace_id());

        self.execute("GetMatchingProductForId", PRODUCTS_PATH, params, None)
            .await
    }

    /// Fee estimates; unset item fields default against this client's marketplace.
    pub async fn get_my_fees_estimate(
        &self,
        items: &[FeeEstimateRequest],
    ) -> MwsResult<MwsResponse> {
        let params = fees_estimate_parameters(items, self.marketplace_id());
        self.execute("GetMyFeesEstimate", PRODUCTS_PATH, params, None)
            .await
    }

    fn asin_list_parameters<S: AsRef<str>>(&self, asins: &[S]) -> Parameters {
        let mut params = Parameters::new();
        params.insert_indexed("ASINList.ASIN", asins.iter().map(|s| s.as_ref()));
        params.insert("MarketplaceId", self.marketplace_id());
        params
    }
}
