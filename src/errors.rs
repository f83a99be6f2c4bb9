use reqwest::StatusCode;
use thiserror::Error;

/// Failure to produce a signed bearer token.
#[derive(Error, Debug)]
pub enum CredentialError {
    /// The configured private key material is unusable (not PEM, not PKCS8,
    /// or not a P-256 elliptic-curve key).
    #[error("invalid private key configuration: {0}")]
    Config(String),

    /// The signing operation itself failed.
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Stream-level failure while decoding a sales report. Individual malformed
/// rows never produce this error.
#[derive(Error, Debug)]
pub enum ReportDecodeError {
    #[error("failed to read report stream: {0}")]
    Stream(#[source] csv_async::Error),

    #[error("report stream is missing its header row")]
    MissingHeader,
}

#[derive(Error, Debug)]
pub enum AppStoreConnectError {
    #[error("failed to issue bearer token: {0}")]
    Auth(#[from] CredentialError),

    #[error("callout failed to send: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("callout returned with {status} status code: {body}")]
    Api { status: StatusCode, body: String },

    #[error("{0}")]
    NotFound(String),

    #[error("failed to decode sales report: {0}")]
    Decode(#[from] ReportDecodeError),

    #[error("failed to parse callout response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("invalid App Store Connect secrets: {0}")]
    Secrets(String),
}
