//! Canonical string-to-sign construction.

use http::Method;

/// Build the exact plaintext the Kalshi verifier expects a signature over.
///
/// The message is the concatenation, with no separators, of:
///
/// 1. the timestamp as decimal milliseconds since the Unix epoch,
/// 2. the uppercase HTTP method token,
/// 3. the request path with everything from the first `?` onward removed.
///
/// The request body is never part of the message. Fragment markers and
/// percent-encoded `?` characters get no special treatment; only the literal
/// first `?` splits the path.
pub fn string_to_sign(timestamp_ms: i64, method: &Method, path: &str) -> String {
    let path = match path.split_once('?') {
        Some((path, _query)) => path,
        None => path,
    };

    format!("{}{}{}", timestamp_ms, method.as_str(), path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(
        1704067200000, "GET", "/trade-api/v2/exchange/status",
        "1704067200000GET/trade-api/v2/exchange/status";
        "no query"
    )]
    #[test_case(
        1704067200000, "GET", "/trade-api/v2/markets?status=open&limit=100",
        "1704067200000GET/trade-api/v2/markets";
        "query stripped"
    )]
    #[test_case(
        1704067200000, "POST", "/trade-api/v2/portfolio/orders",
        "1704067200000POST/trade-api/v2/portfolio/orders";
        "post order"
    )]
    #[test_case(0, "DELETE", "/a?b?c", "0DELETE/a"; "split on first question mark")]
    #[test_case(0, "GET", "/?", "0GET/"; "empty query")]
    #[test_case(0, "GET", "", "0GET"; "empty path ends after method")]
    fn test_string_to_sign(timestamp_ms: i64, method: &str, path: &str, expected: &str) {
        let method: Method = method.parse().unwrap();
        assert_eq!(string_to_sign(timestamp_ms, &method, path), expected);
    }

    #[test]
    fn test_string_to_sign_is_pure() {
        let method = Method::GET;
        let first = string_to_sign(1704067200000, &method, "/trade-api/v2/markets?cursor=abc");
        let second = string_to_sign(1704067200000, &method, "/trade-api/v2/markets?cursor=abc");
        assert_eq!(first, second);
    }
}
