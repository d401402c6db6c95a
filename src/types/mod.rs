//! Request and response types

mod marketplace;
mod parameters;
mod quota;
mod requests;

pub use marketplace::Marketplace;
pub use parameters::{indexed_key, Parameters};
pub use quota::{Quota, QUOTA_MAX_HEADER, QUOTA_REMAINING_HEADER, QUOTA_RESETS_ON_HEADER};
pub use requests::{
    fees_estimate_parameters, format_amount, FeeEstimateRequest, GetReportRequestListRequest,
    RequestReportRequest,
};
