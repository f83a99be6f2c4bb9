use jsonwebtoken::{Algorithm, EncodingKey, Header};
use openssl::{nid::Nid, pkey::PKey};
use serde::Serialize;

use crate::{
    constants::{APP_STORE_CONNECT_AUDIENCE, TOKEN_LIFETIME_SECONDS},
    errors::CredentialError,
    secrets::AppStoreConnectCredentials,
};

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    iat: i64,
    exp: i64,
    aud: &'a str,
}

/// Builds a fresh ES256 token for the App Store Connect API:
/// https://developer.apple.com/documentation/appstoreconnectapi/generating-tokens-for-api-requests
///
/// The key is re-parsed on every call and nothing is cached, so the returned
/// token is always valid for the full 20 minute window.
pub(crate) fn issue_token(
    credentials: &AppStoreConnectCredentials,
) -> Result<String, CredentialError> {
    let der = parse_private_key(credentials.private_key())?;

    let mut header = Header::new(Algorithm::ES256);
    header.kid = Some(credentials.key_id().to_owned());

    let issued_at = chrono::Utc::now().timestamp();
    let claims = Claims {
        iss: credentials.issuer_id(),
        iat: issued_at,
        exp: issued_at + TOKEN_LIFETIME_SECONDS,
        aud: APP_STORE_CONNECT_AUDIENCE,
    };

    jsonwebtoken::encode(&header, &claims, &EncodingKey::from_ec_der(&der))
        .map_err(CredentialError::Signing)
}

/// Unwraps the PEM envelope and checks the contents are a PKCS8 key on P-256.
/// Returns the PKCS8 DER bytes.
fn parse_private_key(private_key: &[u8]) -> Result<Vec<u8>, CredentialError> {
    let block = pem::parse(private_key).map_err(|e| {
        CredentialError::Config(format!("failed to parse PEM block from private key: {e}"))
    })?;

    let key = PKey::private_key_from_pkcs8(block.contents())
        .map_err(|e| CredentialError::Config(format!("invalid PKCS8 private key: {e}")))?;
    let ec_key = key
        .ec_key()
        .map_err(|_| CredentialError::Config("private key is not an EC key".to_owned()))?;
    if ec_key.group().curve_name() != Some(Nid::X9_62_PRIME256V1) {
        return Err(CredentialError::Config(
            "private key is not on the P-256 curve".to_owned(),
        ));
    }

    Ok(block.into_contents())
}
