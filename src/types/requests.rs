//! Structured request descriptions and their flat parameter encoding

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::parameters::Parameters;

const FEES_ESTIMATE_PREFIX: &str = "FeesEstimateRequestList.FeesEstimateRequest";
const DEFAULT_CURRENCY: &str = "USD";
const DEFAULT_ID_TYPE: &str = "ASIN";

/// One item of a `GetMyFeesEstimate` call
///
/// Unset optional fields are filled by [`FeeEstimateRequest::with_defaults`]
/// before flattening.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeeEstimateRequest {
    pub id_value: String,
    pub price_to_estimate_fees: Decimal,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub marketplace_id: Option<String>,
    #[serde(default)]
    pub id_type: Option<String>,
    #[serde(default)]
    pub identifier: Option<String>,
    /// Always sent as `true`, see [`FeeEstimateRequest::with_defaults`].
    #[serde(default)]
    pub is_amazon_fulfilled: bool,
}

impl FeeEstimateRequest {
    pub fn new(id_value: impl Into<String>, price_to_estimate_fees: Decimal) -> Self {
        Self {
            id_value: id_value.into(),
            price_to_estimate_fees,
            ..Default::default()
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn with_marketplace_id(mut self, marketplace_id: impl Into<String>) -> Self {
        self.marketplace_id = Some(marketplace_id.into());
        self
    }

    pub fn with_id_type(mut self, id_type: impl Into<String>) -> Self {
        self.id_type = Some(id_type.into());
        self
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_amazon_fulfilled(mut self, fulfilled: bool) -> Self {
        self.is_amazon_fulfilled = fulfilled;
        self
    }

    /// Fills unset fields, in order: currency `USD`, the caller's
    /// marketplace, id type `ASIN`, identifier = id value.
    ///
    /// `is_amazon_fulfilled` is forced to `true` whatever the caller set; the
    /// deployed service contract has always received `true` here.
    pub fn with_defaults(mut self, marketplace_id: &str) -> Self {
        if is_unset(&self.currency) {
            self.currency = Some(DEFAULT_CURRENCY.to_string());
        }
        if is_unset(&self.marketplace_id) {
            self.marketplace_id = Some(marketplace_id.to_string());
        }
        if is_unset(&self.id_type) {
            self.id_type = Some(DEFAULT_ID_TYPE.to_string());
        }
        if is_unset(&self.identifier) {
            self.identifier = Some(self.id_value.clone());
        }
        self.is_amazon_fulfilled = true;
        self
    }

    /// Flattens the item at 0-based `index` into its twelve keys under
    /// `FeesEstimateRequestList.FeesEstimateRequest.{index + 1}`.
    pub fn to_parameters(&self, index: usize, marketplace_id: &str) -> Parameters {
        let item = self.clone().with_defaults(marketplace_id);
        let prefix = format!("{FEES_ESTIMATE_PREFIX}.{}", index + 1);
        let currency = item.currency.unwrap_or_default();

        let mut params = Parameters::new();
        params.insert(format!("{prefix}.IdValue"), item.id_value);
        params.insert(
            format!("{prefix}.PriceToEstimateFees.ListingPrice.Amount"),
            format_amount(item.price_to_estimate_fees),
        );
        params.insert(
            format!("{prefix}.PriceToEstimateFees.ListingPrice.CurrencyCode"),
            currency.as_str(),
        );
        params.insert(format!("{prefix}.PriceToEstimateFees.Shipping.Amount"), "0");
        params.insert(
            format!("{prefix}.PriceToEstimateFees.Shipping.CurrencyCode"),
            currency.as_str(),
        );
        params.insert(format!("{prefix}.PriceToEstimateFees.Points.PointsNumber"), "0");
        params.insert(
            format!("{prefix}.PriceToEstimateFees.Points.PointsMonetaryValue.Amount"),
            "0",
        );
        params.insert(
            format!("{prefix}.PriceToEstimateFees.Points.PointsMonetaryValue.CurrencyCode"),
            currency.as_str(),
        );
        params.insert(
            format!("{prefix}.MarketplaceId"),
            item.marketplace_id.unwrap_or_default(),
        );
        params.insert(format!("{prefix}.IdType"), item.id_type.unwrap_or_default());
        params.insert(format!("{prefix}.Identifier"), item.identifier.unwrap_or_default());
        params.insert(
            format!("{prefix}.IsAmazonFulfilled"),
            item.is_amazon_fulfilled.to_string(),
        );
        params
    }
}

fn is_unset(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, str::is_empty)
}

/// Flattens a whole fee-estimate list, numbering items from 1.
pub fn fees_estimate_parameters(items: &[FeeEstimateRequest], marketplace_id: &str) -> Parameters {
    let mut params = Parameters::new();
    for (index, item) in items.iter().enumerate() {
        params.extend(item.to_parameters(index, marketplace_id));
    }
    params
}

/// Fixed two-decimal rendering. Exact midpoints round to the even digit.
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(2);
    rounded.to_string()
}

/// `RequestReport` arguments
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestReportRequest {
    pub report_type: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub report_options: Option<String>,
    #[serde(default)]
    pub marketplace_id_list: Vec<String>,
}

impl RequestReportRequest {
    pub fn new(report_type: impl Into<String>) -> Self {
        Self {
            report_type: report_type.into(),
            ..Default::default()
        }
    }

    pub fn with_start_date(mut self, start_date: impl Into<String>) -> Self {
        self.start_date = Some(start_date.into());
        self
    }

    pub fn with_end_date(mut self, end_date: impl Into<String>) -> Self {
        self.end_date = Some(end_date.into());
        self
    }

    pub fn with_report_options(mut self, report_options: impl Into<String>) -> Self {
        self.report_options = Some(report_options.into());
        self
    }

    pub fn with_marketplace_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.marketplace_id_list = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params.insert("ReportType", self.report_type.as_str());
        params.insert_opt("StartDate", self.start_date.as_deref());
        params.insert_opt("EndDate", self.end_date.as_deref());
        params.insert_opt("ReportOptions", self.report_options.as_deref());
        params.insert_indexed("MarketplaceIdList.Id", self.marketplace_id_list.iter().map(String::as_str));
        params
    }
}

/// `GetReportRequestList` filters
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetReportRequestListRequest {
    #[serde(default)]
    pub report_request_id_list: Vec<String>,
    #[serde(default)]
    pub report_type_list: Vec<String>,
    #[serde(default)]
    pub report_processing_status_list: Vec<String>,
    #[serde(default)]
    pub max_count: Option<u32>,
    #[serde(default)]
    pub requested_from_date: Option<String>,
    #[serde(default)]
    pub requested_to_date: Option<String>,
}

impl GetReportRequestListRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_report_request_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.report_request_id_list = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_report_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.report_type_list = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_processing_statuses<I, S>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.report_processing_status_list = statuses.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_max_count(mut self, max_count: u32) -> Self {
        self.max_count = Some(max_count);
        self
    }

    pub fn with_requested_from_date(mut self, date: impl Into<String>) -> Self {
        self.requested_from_date = Some(date.into());
        self
    }

    pub fn with_requested_to_date(mut self, date: impl Into<String>) -> Self {
        self.requested_to_date = Some(date.into());
        self
    }

    pub fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params.insert_indexed(
            "ReportRequestIdList.Id",
            self.report_request_id_list.iter().map(String::as_str),
        );
        params.insert_indexed("ReportTypeList.Type", self.report_type_list.iter().map(String::as_str));
        params.insert_indexed(
            "ReportProcessingStatusList.Status",
            self.report_processing_status_list.iter().map(String::as_str),
        );
        params.insert_opt("MaxCount", self.max_count.map(|n| n.to_string()));
        params.insert_opt("RequestedFromDate", self.requested_from_date.as_deref());
        params.insert_opt("RequestedToDate", self.requested_to_date.as_deref());
        params
    }
}
