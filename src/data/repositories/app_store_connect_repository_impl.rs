use async_trait::async_trait;
use tracing::info;

use crate::{
    data::{
        datasources::app_store_connect_api_datasource::{
            AppStoreConnectApiDatasource, AppStoreConnectApiDatasourceImpl, ReportBody,
        },
        decoders::sales_report_decoder::SalesReportRows,
        models::app_store_connect_api::apps_response_model as aa,
    },
    domain::{
        entities::{app::App, sales_report_row::SalesReportRow},
        repositories::app_store_connect_repository::AppStoreConnectRepository,
    },
    errors::AppStoreConnectError,
    secrets::AppStoreConnectCredentials,
};

pub(crate) struct AppStoreConnectRepositoryImpl<A: AppStoreConnectApiDatasource> {
    app_store_connect_api_datasource: A,
}

#[async_trait]
impl<A: AppStoreConnectApiDatasource> AppStoreConnectRepository
    for AppStoreConnectRepositoryImpl<A>
{
    async fn get_first_vendor_number(&self) -> Result<String, AppStoreConnectError> {
        let vendors = self.app_store_connect_api_datasource.get_vendors().await?;
        if vendors.data.len() > 1 {
            info!(
                count = vendors.data.len(),
                "account has several vendors, using the first"
            );
        }
        vendors
            .data
            .into_iter()
            .next()
            .map(|vendor| vendor.attributes.vendor_number)
            .ok_or_else(|| {
                AppStoreConnectError::NotFound("no vendors found for this account".to_owned())
            })
    }

    async fn download_sales_report(
        &self,
        vendor_number: &str,
        report_date: &str,
    ) -> Result<Vec<SalesReportRow>, AppStoreConnectError> {
        let rows = self
            .stream_sales_report(vendor_number, report_date)
            .await?
            .collect_rows()
            .await?;
        info!(
            vendor_number,
            report_date,
            rows = rows.len(),
            "decoded daily sales report"
        );
        Ok(rows)
    }

    async fn stream_sales_report(
        &self,
        vendor_number: &str,
        report_date: &str,
    ) -> Result<SalesReportRows<ReportBody>, AppStoreConnectError> {
        self.app_store_connect_api_datasource
            .get_sales_report(vendor_number, report_date)
            .await
    }

    async fn list_apps(&self) -> Result<Vec<App>, AppStoreConnectError> {
        let apps = self.app_store_connect_api_datasource.get_apps().await?;
        Ok(apps.data.into_iter().map(App::from_app_model).collect())
    }
}

impl AppStoreConnectRepositoryImpl<AppStoreConnectApiDatasourceImpl> {
    pub(crate) fn new(
        credentials: AppStoreConnectCredentials,
        base_url: String,
    ) -> Result<Self, AppStoreConnectError> {
        Ok(Self {
            app_store_connect_api_datasource: AppStoreConnectApiDatasourceImpl::new(
                credentials,
                base_url,
            )?,
        })
    }
}

impl App {
    fn from_app_model(m: aa::AppModel) -> Self {
        App {
            id: m.id,
            name: m.attributes.name,
            bundle_id: m.attributes.bundle_id,
            sku: m.attributes.sku,
            primary_locale: m.attributes.primary_locale,
        }
    }
}
