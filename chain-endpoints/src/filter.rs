//! Candidate endpoint filtering.

use std::collections::BTreeSet;

use url::Url;

/// Marker of an unexpanded template such as `${INFURA_API_KEY}`.
const PLACEHOLDER_MARKER: &str = "${";

/// Returns `true` if `endpoint` may be used as a public RPC candidate.
///
/// Rejects URLs carrying a placeholder for a secret, URLs that do not
/// parse, and any scheme other than `https`.
#[must_use]
pub fn is_usable_endpoint(endpoint: &str) -> bool {
    if endpoint.contains(PLACEHOLDER_MARKER) {
        return false;
    }
    Url::parse(endpoint).is_ok_and(|url| url.scheme() == "https")
}

/// Keep the usable endpoints of `endpoints`, deduplicated.
pub fn filter_endpoints<I, S>(endpoints: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    endpoints
        .into_iter()
        .filter(|e| is_usable_endpoint(e.as_ref()))
        .map(|e| e.as_ref().to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_placeholder_urls() {
        let kept = filter_endpoints([
            "https://mainnet.infura.io/v3/${INFURA_API_KEY}",
            "https://eth-mainnet.alchemyapi.io/v2/${ALCHEMY_API_KEY}",
            "https://cloudflare-eth.com",
        ]);
        assert_eq!(
            kept.into_iter().collect::<Vec<_>>(),
            vec!["https://cloudflare-eth.com"],
            "only the key-free endpoint survives"
        );
    }

    #[test]
    fn drops_non_https_schemes() {
        let kept = filter_endpoints([
            "http://rpc.example.org",
            "wss://rpc.example.org",
            "ws://rpc.example.org",
            "https://rpc.example.org",
        ]);
        assert_eq!(kept.len(), 1, "only https survives");
        assert!(kept.contains("https://rpc.example.org"), "https kept");
    }

    #[test]
    fn malformed_urls_are_dropped_not_raised() {
        let kept = filter_endpoints(["not a url", "", "https//missing-colon.org"]);
        assert!(kept.is_empty(), "nothing survives: {kept:?}");
    }

    #[test]
    fn duplicates_collapse() {
        let kept = filter_endpoints(vec![
            "https://a.example".to_owned(),
            "https://a.example".to_owned(),
            "https://b.example".to_owned(),
        ]);
        assert_eq!(kept.len(), 2, "duplicates removed");
    }

    #[test]
    fn scheme_match_ignores_case() {
        assert!(is_usable_endpoint("HTTPS://rpc.example.org"), "scheme is case-insensitive");
    }
}
