use async_trait::async_trait;

use crate::{
    data::{
        datasources::app_store_connect_api_datasource::ReportBody,
        decoders::sales_report_decoder::SalesReportRows,
    },
    domain::entities::{app::App, sales_report_row::SalesReportRow},
    errors::AppStoreConnectError,
};

#[async_trait]
pub trait AppStoreConnectRepository: Send + Sync {
    /// Vendor number of the first vendor on the account. Additional vendors
    /// are ignored.
    async fn get_first_vendor_number(&self) -> Result<String, AppStoreConnectError>;

    /// Daily Sales Summary for `report_date` (YYYY-MM-DD), collected into
    /// memory. Malformed lines are dropped; an unpublished report is empty.
    async fn download_sales_report(
        &self,
        vendor_number: &str,
        report_date: &str,
    ) -> Result<Vec<SalesReportRow>, AppStoreConnectError>;

    /// Same request as `download_sales_report`, but rows are decoded lazily
    /// as the body streams in.
    async fn stream_sales_report(
        &self,
        vendor_number: &str,
        report_date: &str,
    ) -> Result<SalesReportRows<ReportBody>, AppStoreConnectError>;

    /// First page of apps on the account, sorted by name.
    async fn list_apps(&self) -> Result<Vec<App>, AppStoreConnectError>;
}
