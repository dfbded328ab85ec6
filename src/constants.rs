//! Wire header names and environment variables for Kalshi request signing.

/// Header carrying the API key identifier, verbatim.
pub const KALSHI_ACCESS_KEY: &str = "kalshi-access-key";
/// Header carrying the request timestamp as decimal milliseconds since epoch.
pub const KALSHI_ACCESS_TIMESTAMP: &str = "kalshi-access-timestamp";
/// Header carrying the base64-encoded RSA-PSS signature.
pub const KALSHI_ACCESS_SIGNATURE: &str = "kalshi-access-signature";

/// Environment variable for the API key identifier.
pub const KALSHI_API_KEY_ID: &str = "KALSHI_API_KEY_ID";
/// Environment variable for the PEM-encoded PKCS8 RSA private key.
pub const KALSHI_PRIVATE_KEY_PEM: &str = "KALSHI_PRIVATE_KEY_PEM";
