mod common;

use common::client_for;
use fractic_app_store_connect::errors::AppStoreConnectError;
use httpmock::prelude::*;

#[tokio::test]
async fn test_list_apps() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/apps")
                .query_param("limit", "20")
                .query_param("sort", "name")
                .header_exists("authorization");
            then.status(200)
                .header("content-type", "application/json")
                .body(
                    r#"{
                        "data": [{
                            "id": "123456789",
                            "type": "apps",
                            "attributes": {
                                "name": "Release Blaster",
                                "bundleId": "com.kaiju.blaster",
                                "sku": "SKU-123",
                                "primaryLocale": "en-US"
                            }
                        }],
                        "links": {"self": "https://api.appstoreconnect.apple.com/v1/apps"},
                        "meta": {"paging": {"total": 1, "limit": 20}}
                    }"#,
                );
        })
        .await;

    let apps = client_for(&server).list_apps().await.unwrap();

    mock.assert_async().await;
    assert_eq!(apps.len(), 1);
    assert_eq!(apps[0].name, "Release Blaster");
    assert_eq!(apps[0].bundle_id, "com.kaiju.blaster");
}

#[tokio::test]
async fn test_list_apps_non_200_is_api_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/apps");
            then.status(500).body("oops");
        })
        .await;

    let err = client_for(&server).list_apps().await.unwrap_err();
    assert!(matches!(err, AppStoreConnectError::Api { .. }));
}
