use std::time::Duration;

pub(crate) const APP_STORE_CONNECT_BASE_URL: &str = "https://api.appstoreconnect.apple.com/v1";
pub(crate) const APP_STORE_CONNECT_AUDIENCE: &str = "appstoreconnect-v1";

/// Lifetime of every issued bearer token.
pub(crate) const TOKEN_LIFETIME_SECONDS: i64 = 20 * 60;

/// Applied uniformly to every callout, including streaming the report body.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) const SALES_REPORT_CONTENT_TYPE: &str = "application/a-gzip";
pub(crate) const SALES_REPORT_FREQUENCY: &str = "DAILY";
pub(crate) const SALES_REPORT_TYPE: &str = "SALES";
pub(crate) const SALES_REPORT_SUB_TYPE: &str = "SUMMARY";

/// Minimum number of tab-separated columns in a usable sales report line.
pub(crate) const SALES_REPORT_MIN_COLUMNS: usize = 13;

pub(crate) const APPS_PAGE_LIMIT: &str = "20";
pub(crate) const APPS_SORT: &str = "name";
