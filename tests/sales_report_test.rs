mod common;

use common::{client_for, gzip, REPORT_HEADER};
use fractic_app_store_connect::errors::AppStoreConnectError;
use httpmock::prelude::*;

const VALID_LINE: &str =
    "123456\tUS\tSKU-123\tKaiju\tApp\t1.0\tF1\t10\t7.00\t2026-02-01\t2026-02-01\tUSD\tUS\n";

#[tokio::test]
async fn test_download_sales_report() {
    let body = gzip(format!("{REPORT_HEADER}{VALID_LINE}").as_bytes()).await;

    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/salesReports")
                .header("accept", "application/a-gzip")
                .header_exists("authorization")
                .query_param("filter[frequency]", "DAILY")
                .query_param("filter[reportDate]", "2026-02-01")
                .query_param("filter[reportSubType]", "SUMMARY")
                .query_param("filter[reportType]", "SALES")
                .query_param("filter[vendorNumber]", "888888");
            then.status(200)
                .header("content-type", "application/a-gzip")
                .body(body);
        })
        .await;

    let rows = client_for(&server)
        .download_sales_report("888888", "2026-02-01")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].sku, "SKU-123");
    assert_eq!(rows[0].units, 10);
    assert_eq!(rows[0].proceeds, 7.00);
}

#[tokio::test]
async fn test_unpublished_report_is_empty() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/salesReports");
            then.status(404).body(r#"{"errors":[{"status":"404"}]}"#);
        })
        .await;

    let rows = client_for(&server)
        .download_sales_report("888888", "2026-02-01")
        .await
        .unwrap();

    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_rejected_report_request_is_api_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/salesReports");
            then.status(400).body("invalid reportDate");
        })
        .await;

    let err = client_for(&server)
        .download_sales_report("888888", "02/01/2026")
        .await
        .unwrap_err();

    match err {
        AppStoreConnectError::Api { status, body } => {
            assert_eq!(status.as_u16(), 400);
            assert_eq!(body, "invalid reportDate");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_lines_do_not_abort_download() {
    let report = format!(
        "{REPORT_HEADER}short\tline\n{VALID_LINE}\
         1\tUS\tSKU-NAN\tDev\tB\t1.0\tF1\tten\tseven\t2026-02-01\t2026-02-01\tUSD\tUS\n"
    );
    let body = gzip(report.as_bytes()).await;

    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/salesReports");
            then.status(200).body(body);
        })
        .await;

    let mut rows = client_for(&server)
        .stream_sales_report("888888", "2026-02-01")
        .await
        .unwrap();

    let first = rows.next_row().await.unwrap().unwrap();
    assert_eq!(first.sku, "SKU-123");
    let second = rows.next_row().await.unwrap().unwrap();
    assert_eq!(second.sku, "SKU-NAN");
    assert_eq!(second.units, 0);
    assert_eq!(second.proceeds, 0.0);
    assert!(rows.next_row().await.unwrap().is_none());
    assert_eq!(rows.skipped_rows(), 1);
}

#[tokio::test]
async fn test_non_gzip_body_is_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/salesReports");
            then.status(200).body(REPORT_HEADER);
        })
        .await;

    let err = client_for(&server)
        .download_sales_report("888888", "2026-02-01")
        .await
        .unwrap_err();

    assert!(matches!(err, AppStoreConnectError::Decode(_)));
}
