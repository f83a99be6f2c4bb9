use std::io;

use async_trait::async_trait;
use bytes::Bytes;
use futures::{stream::BoxStream, StreamExt, TryStreamExt};
use reqwest::{header::ACCEPT, Request, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio_util::io::StreamReader;
use tracing::{debug, info};

use crate::{
    constants::{
        APPS_PAGE_LIMIT, APPS_SORT, SALES_REPORT_CONTENT_TYPE, SALES_REPORT_FREQUENCY,
        SALES_REPORT_SUB_TYPE, SALES_REPORT_TYPE,
    },
    data::{
        datasources::authenticated_transport::AuthenticatedTransport,
        decoders::sales_report_decoder::SalesReportRows,
        models::app_store_connect_api::{
            apps_response_model::AppsResponseModel, vendors_response_model::VendorsResponseModel,
        },
    },
    errors::AppStoreConnectError,
    secrets::AppStoreConnectCredentials,
};

/// Gzipped report body, streamed straight from the HTTP response.
pub type ReportBody = StreamReader<BoxStream<'static, io::Result<Bytes>>, Bytes>;

#[async_trait]
pub(crate) trait AppStoreConnectApiDatasource: Send + Sync {
    /// List Vendors:
    /// https://developer.apple.com/documentation/appstoreconnectapi/list_vendors
    async fn get_vendors(&self) -> Result<VendorsResponseModel, AppStoreConnectError>;

    /// Download Sales and Trends Reports (daily Sales Summary):
    /// https://developer.apple.com/documentation/appstoreconnectapi/download_sales_and_trends_reports
    ///
    /// vendorNumber:
    ///   The vendor number associated with the account.
    /// reportDate:
    ///   YYYY-MM-DD. Passed through unvalidated; a malformed date is rejected
    ///   upstream with a 4xx.
    ///
    /// A 404 means the report for that date is not published yet and yields
    /// an empty sequence.
    async fn get_sales_report(
        &self,
        vendor_number: &str,
        report_date: &str,
    ) -> Result<SalesReportRows<ReportBody>, AppStoreConnectError>;

    /// List Apps:
    /// https://developer.apple.com/documentation/appstoreconnectapi/list_apps
    async fn get_apps(&self) -> Result<AppsResponseModel, AppStoreConnectError>;
}

pub(crate) struct AppStoreConnectApiDatasourceImpl {
    transport: AuthenticatedTransport,
    base_url: String,
}

#[async_trait]
impl AppStoreConnectApiDatasource for AppStoreConnectApiDatasourceImpl {
    async fn get_vendors(&self) -> Result<VendorsResponseModel, AppStoreConnectError> {
        let request = self
            .transport
            .http_client()
            .get(self.url("vendors"))
            .build()?;
        self.callout_json(request, "ListVendors").await
    }

    async fn get_sales_report(
        &self,
        vendor_number: &str,
        report_date: &str,
    ) -> Result<SalesReportRows<ReportBody>, AppStoreConnectError> {
        let request = self
            .transport
            .http_client()
            .get(self.url("salesReports"))
            .query(&[
                ("filter[frequency]", SALES_REPORT_FREQUENCY),
                ("filter[reportDate]", report_date),
                ("filter[reportSubType]", SALES_REPORT_SUB_TYPE),
                ("filter[reportType]", SALES_REPORT_TYPE),
                ("filter[vendorNumber]", vendor_number),
            ])
            .header(ACCEPT, SALES_REPORT_CONTENT_TYPE)
            .build()?;

        info!(vendor_number, report_date, "downloading daily sales report");
        let response = self.transport.execute(request).await?;
        match response.status() {
            StatusCode::OK => {
                let body: ReportBody = StreamReader::new(
                    response
                        .bytes_stream()
                        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
                        .boxed(),
                );
                Ok(SalesReportRows::open(body).await?)
            }
            StatusCode::NOT_FOUND => {
                debug!(vendor_number, report_date, "sales report not published yet");
                Ok(SalesReportRows::empty())
            }
            _ => Err(Self::api_error(response, "DownloadSalesReport").await),
        }
    }

    async fn get_apps(&self) -> Result<AppsResponseModel, AppStoreConnectError> {
        let request = self
            .transport
            .http_client()
            .get(self.url("apps"))
            .query(&[("limit", APPS_PAGE_LIMIT), ("sort", APPS_SORT)])
            .build()?;
        self.callout_json(request, "ListApps").await
    }
}

impl AppStoreConnectApiDatasourceImpl {
    pub(crate) fn new(
        credentials: AppStoreConnectCredentials,
        base_url: String,
    ) -> Result<Self, AppStoreConnectError> {
        Ok(Self {
            transport: AuthenticatedTransport::new(credentials)?,
            base_url,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn callout_json<T: DeserializeOwned>(
        &self,
        request: Request,
        function_name: &str,
    ) -> Result<T, AppStoreConnectError> {
        let response = self.transport.execute(request).await?;
        if response.status() != StatusCode::OK {
            return Err(Self::api_error(response, function_name).await);
        }
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            debug!(function_name, error = %e, "failed to parse callout response");
            AppStoreConnectError::InvalidResponse(e)
        })
    }

    async fn api_error(response: Response, function_name: &str) -> AppStoreConnectError {
        let status = response.status();
        let body = response.text().await.unwrap_or_else(|e| {
            debug!(function_name, %status, error = %e, "failed to read error response body");
            String::new()
        });
        debug!(function_name, %status, "callout returned with non-200 status code");
        AppStoreConnectError::Api { status, body }
    }
}
