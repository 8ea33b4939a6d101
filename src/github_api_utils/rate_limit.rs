use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use reqwest::header::HeaderMap;

/// Github primary rate limit state, as reported by the `x-ratelimit-*` response headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: u32,
    pub remaining: u32,
    pub reset: DateTime<Utc>,
}

impl RateLimit {
    /// Returns `None` unless all three headers are present and well formed.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let limit = header_as::<u32>(headers, "x-ratelimit-limit")?;
        let remaining = header_as::<u32>(headers, "x-ratelimit-remaining")?;
        let reset_timestamp = header_as::<i64>(headers, "x-ratelimit-reset")?;
        let reset = Utc.timestamp_opt(reset_timestamp, 0).single()?;
        Some(RateLimit {
            limit,
            remaining,
            reset,
        })
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

impl fmt::Display for RateLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} requests left, resets at {}",
            self.remaining,
            self.limit,
            self.reset.format("%Y-%m-%dT%H:%M:%SZ")
        )
    }
}

fn header_as<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers.get(name)?.to_str().ok()?.trim().parse::<T>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn parses_exhausted_limit() {
        let rl = RateLimit::from_headers(&headers(&[
            ("x-ratelimit-limit", "10"),
            ("x-ratelimit-remaining", "0"),
            ("x-ratelimit-reset", "1700000000"),
        ]))
        .unwrap();
        assert_eq!(rl.limit, 10);
        assert!(rl.is_exhausted());
        assert_eq!(rl.reset.timestamp(), 1_700_000_000);
        assert_eq!(
            rl.to_string(),
            "0/10 requests left, resets at 2023-11-14T22:13:20Z"
        );
    }

    #[test]
    fn missing_or_garbled_headers_yield_none() {
        assert_eq!(RateLimit::from_headers(&HeaderMap::new()), None);
        assert_eq!(
            RateLimit::from_headers(&headers(&[
                ("x-ratelimit-limit", "60"),
                ("x-ratelimit-remaining", "lots"),
                ("x-ratelimit-reset", "1700000000"),
            ])),
            None
        );
    }
}
