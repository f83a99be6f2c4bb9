use std::fmt;

use tracing::debug;

use crate::errors::AppStoreConnectError;

const APP_STORE_CONNECT_KEY_ID: &str = "APP_STORE_CONNECT_KEY_ID";
const APP_STORE_CONNECT_ISSUER_ID: &str = "APP_STORE_CONNECT_ISSUER_ID";
const APP_STORE_CONNECT_PRIVATE_KEY: &str = "APP_STORE_CONNECT_PRIVATE_KEY";
const APP_STORE_CONNECT_PRIVATE_KEY_PATH: &str = "APP_STORE_CONNECT_PRIVATE_KEY_PATH";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppStoreConnectSecretsConfig {
    KeyId,
    IssuerId,
    /// PEM content of the .p8 key downloaded from App Store Connect.
    PrivateKey,
    /// Path to the .p8 file. Only consulted when `PrivateKey` is unset.
    PrivateKeyPath,
}

impl AppStoreConnectSecretsConfig {
    pub fn env_key(&self) -> &'static str {
        match self {
            Self::KeyId => APP_STORE_CONNECT_KEY_ID,
            Self::IssuerId => APP_STORE_CONNECT_ISSUER_ID,
            Self::PrivateKey => APP_STORE_CONNECT_PRIVATE_KEY,
            Self::PrivateKeyPath => APP_STORE_CONNECT_PRIVATE_KEY_PATH,
        }
    }
}

/// Identity used to sign App Store Connect API tokens. Immutable once the
/// client is built.
#[derive(Clone)]
pub struct AppStoreConnectCredentials {
    key_id: String,
    issuer_id: String,
    private_key: Vec<u8>,
}

impl AppStoreConnectCredentials {
    pub fn new(
        key_id: impl Into<String>,
        issuer_id: impl Into<String>,
        private_key: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            key_id: key_id.into(),
            issuer_id: issuer_id.into(),
            private_key: private_key.into(),
        }
    }

    /// Reads credentials from the process environment.
    pub fn from_env() -> Result<Self, AppStoreConnectError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads credentials through an arbitrary key lookup (environment, secret
    /// store, test fixture).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppStoreConnectError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |secret: AppStoreConnectSecretsConfig| {
            lookup(secret.env_key()).filter(|value| !value.trim().is_empty())
        };
        let require = |secret: AppStoreConnectSecretsConfig| {
            get(secret).ok_or_else(|| {
                AppStoreConnectError::Secrets(format!("{} is not set", secret.env_key()))
            })
        };

        let key_id = require(AppStoreConnectSecretsConfig::KeyId)?;
        let issuer_id = require(AppStoreConnectSecretsConfig::IssuerId)?;
        let private_key = match get(AppStoreConnectSecretsConfig::PrivateKey) {
            Some(pem) => pem.into_bytes(),
            None => {
                let path = get(AppStoreConnectSecretsConfig::PrivateKeyPath).ok_or_else(|| {
                    AppStoreConnectError::Secrets(format!(
                        "neither {} nor {} is set",
                        APP_STORE_CONNECT_PRIVATE_KEY, APP_STORE_CONNECT_PRIVATE_KEY_PATH
                    ))
                })?;
                debug!(path = %path, "reading App Store Connect private key from file");
                std::fs::read(&path).map_err(|e| {
                    AppStoreConnectError::Secrets(format!(
                        "failed to read private key at {path}: {e}"
                    ))
                })?
            }
        };

        Ok(Self::new(key_id, issuer_id, private_key))
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    pub fn issuer_id(&self) -> &str {
        &self.issuer_id
    }

    pub(crate) fn private_key(&self) -> &[u8] {
        &self.private_key
    }
}

impl fmt::Debug for AppStoreConnectCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppStoreConnectCredentials")
            .field("key_id", &self.key_id)
            .field("issuer_id", &self.issuer_id)
            .field("private_key", &"<redacted>")
            .finish()
    }
}
