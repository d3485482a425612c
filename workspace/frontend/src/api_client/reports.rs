use ::common::{report_raw_path, report_view_path, ReportDetail, ReportSummary};
use crate::api_client;
use crate::settings;

/// List every drift and expectation report
pub async fn list_reports() -> Result<Vec<ReportSummary>, String> {
    log::trace!("Fetching report list");
    let url = settings::get_settings().reports_url("/reports/list");
    let result = api_client::get::<Vec<ReportSummary>>(&url).await;
    match &result {
        Ok(reports) => log::info!("Fetched {} reports", reports.len()),
        Err(e) => log::error!("Failed to fetch report list: {}", e),
    }
    result.map_err(|e| e.to_string())
}

/// Get a single report by id
pub async fn get_report(id: String) -> Result<ReportDetail, String> {
    log::trace!("Fetching report {}", id);
    let url = settings::get_settings().reports_url(&report_view_path(&id));
    let result = api_client::get::<ReportDetail>(&url).await;
    match &result {
        Ok(report) => log::info!("Fetched {} report for station {}", report.kind.as_str(), report.station_id),
        Err(e) => log::error!("Failed to fetch report {}: {}", id, e),
    }
    result.map_err(|e| e.to_string())
}

/// URL of the raw report document, for framing
pub fn raw_report_url(id: &str) -> String {
    settings::get_settings().reports_url(&report_raw_path(id))
}
