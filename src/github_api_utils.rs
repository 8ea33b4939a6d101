pub mod github_api_helper;
pub mod rate_limit;
pub mod search_query;

use rate_limit::RateLimit;
use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Github API answered {status}: {message}{}", rate_limit_suffix(.rate_limit))]
    Api {
        status: StatusCode,
        message: String,
        rate_limit: Option<RateLimit>,
    },

    #[error("Couldn't decode search response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid request header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl FetchError {
    /// True for the failures the compatibility path reports as an empty result.
    pub fn is_api(&self) -> bool {
        matches!(self, FetchError::Api { .. })
    }
}

fn rate_limit_suffix(rate_limit: &Option<RateLimit>) -> String {
    match rate_limit {
        Some(rl) if rl.is_exhausted() => format!(" ({rl})"),
        _ => String::new(),
    }
}
