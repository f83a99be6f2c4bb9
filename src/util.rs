use crate::{
    constants::APP_STORE_CONNECT_BASE_URL,
    data::{
        datasources::app_store_connect_api_datasource::ReportBody,
        decoders::sales_report_decoder::SalesReportRows,
        repositories::app_store_connect_repository_impl::AppStoreConnectRepositoryImpl,
    },
    domain::{
        entities::{app::App, sales_report_row::SalesReportRow},
        repositories::app_store_connect_repository::AppStoreConnectRepository,
    },
    errors::AppStoreConnectError,
    secrets::AppStoreConnectCredentials,
};

pub struct AppStoreConnectUtil {
    app_store_connect_repository: Box<dyn AppStoreConnectRepository>,
}

impl AppStoreConnectUtil {
    /// Client against the production App Store Connect API.
    pub fn new(credentials: AppStoreConnectCredentials) -> Result<Self, AppStoreConnectError> {
        Self::builder(credentials).build()
    }

    pub fn builder(credentials: AppStoreConnectCredentials) -> AppStoreConnectUtilBuilder {
        AppStoreConnectUtilBuilder {
            credentials,
            base_url: None,
        }
    }

    /// Wraps any repository implementation, e.g. an in-memory fixture.
    pub fn from_repository(repository: impl AppStoreConnectRepository + 'static) -> Self {
        Self {
            app_store_connect_repository: Box::new(repository),
        }
    }

    pub async fn get_first_vendor_number(&self) -> Result<String, AppStoreConnectError> {
        self.app_store_connect_repository
            .get_first_vendor_number()
            .await
    }

    pub async fn download_sales_report(
        &self,
        vendor_number: &str,
        report_date: &str,
    ) -> Result<Vec<SalesReportRow>, AppStoreConnectError> {
        self.app_store_connect_repository
            .download_sales_report(vendor_number, report_date)
            .await
    }

    pub async fn stream_sales_report(
        &self,
        vendor_number: &str,
        report_date: &str,
    ) -> Result<SalesReportRows<ReportBody>, AppStoreConnectError> {
        self.app_store_connect_repository
            .stream_sales_report(vendor_number, report_date)
            .await
    }

    pub async fn list_apps(&self) -> Result<Vec<App>, AppStoreConnectError> {
        self.app_store_connect_repository.list_apps().await
    }
}

/// Construction-time options for [`AppStoreConnectUtil`]. The base URL cannot
/// change once the client is built.
#[derive(Debug)]
pub struct AppStoreConnectUtilBuilder {
    credentials: AppStoreConnectCredentials,
    base_url: Option<String>,
}

impl AppStoreConnectUtilBuilder {
    /// Overrides the API root (e.g. a mock server). Paths such as `/vendors`
    /// are appended to it, so include any version segment.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn build(self) -> Result<AppStoreConnectUtil, AppStoreConnectError> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| APP_STORE_CONNECT_BASE_URL.to_owned());
        Ok(AppStoreConnectUtil::from_repository(
            AppStoreConnectRepositoryImpl::new(self.credentials, base_url)?,
        ))
    }
}
