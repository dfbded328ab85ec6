use crate::constants::{KALSHI_ACCESS_KEY, KALSHI_ACCESS_SIGNATURE, KALSHI_ACCESS_TIMESTAMP};
use crate::message::string_to_sign;
use crate::{Credential, Error, Result};
use base64::{engine::general_purpose, Engine as _};
use chrono::{DateTime, Utc};
use http::request::Parts;
use http::HeaderValue;
use log::debug;
use rsa::pss::BlindedSigningKey;
use rsa::sha2::Sha256;
use rsa::signature::{RandomizedSigner, SignatureEncoding};
use rsa::{pkcs8::DecodePrivateKey, RsaPrivateKey};
use std::fmt::{Debug, Formatter};
use std::sync::RwLock;

/// SignRequest is the capability contract other components depend on.
///
/// Exactly two implementations exist: [`RsaPssSigner`] for production and
/// [`crate::MockSigner`] for isolating consumers in tests. They share no
/// state; callers hold either behind `dyn SignRequest`.
pub trait SignRequest: Debug + Send + Sync {
    /// Sign the request in place.
    ///
    /// Derives the canonical message from the request method, path, and the
    /// caller-supplied timestamp, then replaces the three `kalshi-access-*`
    /// headers with fresh values. Signing the same request twice leaves
    /// exactly one value per header, reflecting the second call.
    ///
    /// `body` is accepted for contract parity with the transport layer; the
    /// Kalshi scheme never signs the body.
    fn sign(&self, parts: &mut Parts, body: &[u8], timestamp: DateTime<Utc>) -> Result<()>;
}

/// RequestSigner that implements Kalshi trade API signing.
///
/// Signs the canonical `{timestamp_ms}{METHOD}{path}` message with RSA-PSS
/// using SHA-256 as both the message digest and the MGF1 hash, with a salt
/// as long as the digest (32 bytes). A 2048-bit key yields 256 signature
/// bytes, surfaced base64-encoded in the signature header.
///
/// The private key is parsed once at construction and held for the signer's
/// lifetime. Concurrent `sign` calls against one signer are safe; the key is
/// read-only after construction. [`RsaPssSigner::dispose`] is the single
/// mutating transition and releases the key material.
pub struct RsaPssSigner {
    api_key_id: String,
    key: RwLock<Option<BlindedSigningKey<Sha256>>>,
}

impl Debug for RsaPssSigner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaPssSigner")
            .field("api_key_id", &self.api_key_id)
            .finish_non_exhaustive()
    }
}

impl RsaPssSigner {
    /// Create a new signer from an API key id and a PEM-encoded PKCS8 RSA
    /// private key.
    ///
    /// Fails with [`crate::ErrorKind::CredentialInvalid`] when the key id is
    /// empty or the key text does not parse as an RSA private key.
    pub fn new(api_key_id: &str, private_key_pem: &str) -> Result<Self> {
        if api_key_id.is_empty() {
            return Err(Error::credential_invalid("api key id must not be empty"));
        }
        if private_key_pem.is_empty() {
            return Err(Error::credential_invalid(
                "expected a PEM-encoded PKCS8 RSA private key, got empty input",
            ));
        }

        let private_key = RsaPrivateKey::from_pkcs8_pem(private_key_pem).map_err(|e| {
            Error::credential_invalid(format!(
                "expected a PEM-encoded PKCS8 RSA private key: {e}"
            ))
            .with_source(e)
        })?;

        Ok(Self {
            api_key_id: api_key_id.to_string(),
            key: RwLock::new(Some(BlindedSigningKey::new(private_key))),
        })
    }

    /// Create a new signer from a [`Credential`].
    pub fn from_credential(credential: &Credential) -> Result<Self> {
        Self::new(&credential.api_key_id, &credential.private_key_pem)
    }

    /// The API key id written into the access-key header.
    pub fn api_key_id(&self) -> &str {
        &self.api_key_id
    }

    /// Release the private key material.
    ///
    /// The key bytes are zeroized on drop by the underlying RSA
    /// implementation. Every `sign` call after this fails with
    /// [`crate::ErrorKind::Disposed`]. A dispose overlapping an in-flight
    /// `sign` serializes on the internal lock and takes effect once that
    /// call completes.
    pub fn dispose(&self) {
        let mut key = self.key.write().expect("lock poisoned");
        *key = None;
    }
}

impl SignRequest for RsaPssSigner {
    fn sign(&self, parts: &mut Parts, _body: &[u8], timestamp: DateTime<Utc>) -> Result<()> {
        let key = self.key.read().expect("lock poisoned");
        let Some(key) = key.as_ref() else {
            return Err(Error::disposed("signer key material has been released"));
        };

        let timestamp_ms = timestamp.timestamp_millis();
        let path = parts
            .uri
            .path_and_query()
            .map(|paq| paq.as_str())
            .unwrap_or("/");
        let string_to_sign = string_to_sign(timestamp_ms, &parts.method, path);

        debug!("string to sign: {}", &string_to_sign);

        let signature = key
            .try_sign_with_rng(&mut rand::thread_rng(), string_to_sign.as_bytes())
            .map_err(|e| {
                Error::signing_failed(format!("rsa-pss signing failed: {e}")).with_source(e)
            })?;
        let encoded_signature = general_purpose::STANDARD.encode(signature.to_bytes());

        // insert replaces all previous values for a header, never appends.
        parts
            .headers
            .insert(KALSHI_ACCESS_KEY, HeaderValue::from_str(&self.api_key_id)?);
        parts.headers.insert(
            KALSHI_ACCESS_TIMESTAMP,
            HeaderValue::from_str(&timestamp_ms.to_string())?,
        );
        parts.headers.insert(
            KALSHI_ACCESS_SIGNATURE,
            HeaderValue::from_str(&encoded_signature)?,
        );

        Ok(())
    }
}
