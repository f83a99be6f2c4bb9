use reqwest::{
    header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Request, Response,
};
use tracing::debug;

use crate::{
    constants::REQUEST_TIMEOUT,
    data::datasources::credential_issuer::issue_token,
    errors::{AppStoreConnectError, CredentialError},
    secrets::AppStoreConnectCredentials,
};

/// HTTP client that signs every outbound request with a freshly issued
/// bearer token. Status codes are left for the caller to interpret.
pub(crate) struct AuthenticatedTransport {
    credentials: AppStoreConnectCredentials,
    http_client: reqwest::Client,
}

impl AuthenticatedTransport {
    pub(crate) fn new(
        credentials: AppStoreConnectCredentials,
    ) -> Result<Self, AppStoreConnectError> {
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            credentials,
            http_client,
        })
    }

    /// Exposed so callers can build requests against the same client.
    pub(crate) fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    pub(crate) async fn execute(
        &self,
        mut request: Request,
    ) -> Result<Response, AppStoreConnectError> {
        let token = issue_token(&self.credentials)?;
        let bearer = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
            AppStoreConnectError::Auth(CredentialError::Config(format!(
                "token is not a valid header value: {e}"
            )))
        })?;

        let headers = request.headers_mut();
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        debug!(method = %request.method(), url = %request.url(), "sending authenticated callout");
        Ok(self.http_client.execute(request).await?)
    }
}
