//! Reports section (`/Reports/2009-01-01`)

use crate::client::{MwsClient, MwsResponse, REPORTS_PATH};
use crate::errors::MwsResult;
use crate::types::{GetReportRequestListRequest, Parameters, RequestReportRequest};

impl MwsClient {
    pub async fn request_report(&self, request: &RequestReportRequest) -> MwsResult<MwsResponse> {
        self.execute("RequestReport", REPORTS_PATH, request.to_parameters(), None)
            .await
    }

    pub async fn get_report_request_list(
        &self,
        request: &GetReportRequestListRequest,
    ) -> MwsResult<MwsResponse> {
        self.execute("GetReportRequestList", REPORTS_PATH, request.to_parameters(), None)
            .await
    }

    /// Status of a single report request (a one-id `GetReportRequestList`)
    pub async fn get_report_request_status(
        &self,
        report_request_id: &str,
    ) -> MwsResult<MwsResponse> {
        let request = GetReportRequestListRequest::new().with_report_request_ids([report_request_id]);
        self.get_report_request_list(&request).await
    }

    pub async fn get_report(&self, report_id: &str) -> MwsResult<MwsResponse> {
        let mut params = Parameters::new();
        params.insert("ReportId", report_id);

        self.execute("GetReport", REPORTS_PATH, params, None).await
    }
}
