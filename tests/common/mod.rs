#![allow(dead_code)]

use async_compression::tokio::write::GzipEncoder;
use fractic_app_store_connect::{
    secrets::AppStoreConnectCredentials,
    util::AppStoreConnectUtil,
};
use httpmock::MockServer;
use openssl::{
    ec::{EcGroup, EcKey},
    nid::Nid,
    pkey::PKey,
};
use tokio::io::AsyncWriteExt;

pub const REPORT_HEADER: &str =
    "Provider\tCountry\tSKU\tDev\tTitle\tVer\tType\tUnits\tProceeds\tBegin\tEnd\tCurr\tCC\n";

/// Throwaway ES256 key, PKCS8 PEM encoded like a downloaded .p8 file.
pub fn generate_test_key() -> Vec<u8> {
    let group = EcGroup::from_curve_name(Nid::X9_62_PRIME256V1).unwrap();
    let key = PKey::from_ec_key(EcKey::generate(&group).unwrap()).unwrap();
    key.private_key_to_pem_pkcs8().unwrap()
}

pub fn test_credentials() -> AppStoreConnectCredentials {
    AppStoreConnectCredentials::new("TEST_KEY_ID", "TEST_ISSUER", generate_test_key())
}

pub fn client_for(server: &MockServer) -> AppStoreConnectUtil {
    AppStoreConnectUtil::builder(test_credentials())
        .base_url(server.url("/v1"))
        .build()
        .unwrap()
}

pub async fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzipEncoder::new(Vec::new());
    encoder.write_all(data).await.unwrap();
    encoder.shutdown().await.unwrap();
    encoder.into_inner()
}
