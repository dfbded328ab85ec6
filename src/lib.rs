//! Request signing for the Kalshi trade API.
//!
//! Kalshi authenticates requests with a per-request RSA-PSS signature over a
//! canonical message, alongside a key identifier and a millisecond timestamp.
//! No shared secret travels over the wire; the server verifies the signature
//! against the public key registered for the key id.
//!
//! ## Overview
//!
//! - [`SignRequest`]: the capability contract, with two implementations —
//!   [`RsaPssSigner`] for production and [`MockSigner`] for tests.
//! - [`string_to_sign`]: the canonical `{timestamp_ms}{METHOD}{path}` message
//!   builder. Query strings and the request body are never signed.
//! - [`Credential`]: API key id plus private key text, loadable from the
//!   environment.
//!
//! Signing mutates the request's header map in place, replacing the three
//! `kalshi-access-*` headers. Timestamps are caller-supplied, which keeps
//! signing deterministic to test against a known verifier.
//!
//! ## Example
//!
//! ```no_run
//! use chrono::Utc;
//! use kalshi_auth::{RsaPssSigner, SignRequest};
//!
//! # fn main() -> kalshi_auth::Result<()> {
//! let pem = std::fs::read_to_string("kalshi-key.pem").expect("read key file");
//! let signer = RsaPssSigner::new("my-key-id", &pem)?;
//!
//! let (mut parts, body) = http::Request::builder()
//!     .method("GET")
//!     .uri("https://api.elections.kalshi.com/trade-api/v2/exchange/status")
//!     .body(Vec::new())
//!     .expect("valid request")
//!     .into_parts();
//!
//! signer.sign(&mut parts, &body, Utc::now())?;
//! // parts.headers now carries kalshi-access-key, kalshi-access-timestamp
//! // and kalshi-access-signature.
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod constants;

mod error;
pub use error::{Error, ErrorKind, Result};

mod credential;
pub use credential::Credential;

mod message;
pub use message::string_to_sign;

mod sign;
pub use sign::{RsaPssSigner, SignRequest};

mod mock;
pub use mock::{MockSigner, MOCK_SIGNATURE};
