use std::net::SocketAddr;

use axum::http::HeaderMap;

const FORWARDED_FOR: &str = "x-forwarded-for";

/// Identifies a voter by client IP address.
///
/// The first address in `X-Forwarded-For` is used only when `trust_forwarded_for` is set.
/// Otherwise, or when the header is absent or blank, the peer address of the connection is
/// used.
pub fn voter_key(headers: &HeaderMap, peer: SocketAddr, trust_forwarded_for: bool) -> String {
    if !trust_forwarded_for {
        return peer.ip().to_string();
    }

    headers
        .get(FORWARDED_FOR)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| peer.ip().to_string())
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use axum::http::{HeaderMap, HeaderValue};

    use super::voter_key;

    fn peer() -> SocketAddr {
        SocketAddr::from(([192, 0, 2, 1], 51000))
    }

    fn forwarded(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn uses_peer_address_without_header() {
        assert_eq!(voter_key(&HeaderMap::new(), peer(), true), "192.0.2.1");
    }

    /// Expect the client address, not the proxies appended after it
    #[test]
    fn uses_first_forwarded_address() {
        let headers = forwarded(" 203.0.113.7 , 10.0.0.1");

        assert_eq!(voter_key(&headers, peer(), true), "203.0.113.7");
    }

    #[test]
    fn falls_back_for_blank_header() {
        assert_eq!(voter_key(&forwarded(" "), peer(), true), "192.0.2.1");
    }

    /// Expect the header to be ignored unless forwarding is trusted
    #[test]
    fn ignores_header_when_untrusted() {
        let headers = forwarded("203.0.113.7");

        assert_eq!(voter_key(&headers, peer(), false), "192.0.2.1");
    }
}
