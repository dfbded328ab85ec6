use crate::constants::{KALSHI_ACCESS_KEY, KALSHI_ACCESS_SIGNATURE, KALSHI_ACCESS_TIMESTAMP};
use crate::{Result, SignRequest};
use chrono::{DateTime, Utc};
use http::request::Parts;
use http::HeaderValue;

/// The placeholder written into the signature header by [`MockSigner`].
pub const MOCK_SIGNATURE: &str = "mock-signature";

/// Test double for [`SignRequest`] that bypasses cryptography.
///
/// Writes the same three headers as [`crate::RsaPssSigner`], but the
/// signature header carries the fixed [`MOCK_SIGNATURE`] placeholder and no
/// key material is ever held or used. This is useful for testing consumers
/// of the signing contract; production clients must construct
/// [`crate::RsaPssSigner`] instead.
#[derive(Debug, Clone)]
pub struct MockSigner {
    api_key_id: String,
}

impl MockSigner {
    /// Create a new mock signer with the given API key id.
    pub fn new(api_key_id: &str) -> Self {
        Self {
            api_key_id: api_key_id.to_string(),
        }
    }
}

impl SignRequest for MockSigner {
    fn sign(&self, parts: &mut Parts, _body: &[u8], timestamp: DateTime<Utc>) -> Result<()> {
        let timestamp_ms = timestamp.timestamp_millis();

        parts
            .headers
            .insert(KALSHI_ACCESS_KEY, HeaderValue::from_str(&self.api_key_id)?);
        parts.headers.insert(
            KALSHI_ACCESS_TIMESTAMP,
            HeaderValue::from_str(&timestamp_ms.to_string())?,
        );
        parts
            .headers
            .insert(KALSHI_ACCESS_SIGNATURE, HeaderValue::from_static(MOCK_SIGNATURE));

        Ok(())
    }
}
