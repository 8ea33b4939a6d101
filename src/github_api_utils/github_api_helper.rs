use super::{rate_limit::RateLimit, search_query::SearchQuery, FetchError};
use crate::config::Config;
use crate::gh_api_search_repo_response::{ApiErrorBody, GetRepoResponse, Repo};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, StatusCode};

/// Creates the standard github api request headers:
/// 1. **authorization**, bearer token from *GH_API_KEY*, only when one is configured.
/// 2. **X-GitHub-Api-Version**, github api version.
/// 3. **user-agent**, from *GH_API_USER_AGENT*.
fn get_requests_headers(config: &Config) -> Result<HeaderMap, FetchError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
    headers.insert("X-GitHub-Api-Version", HeaderValue::from_static("2022-11-28"));
    headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);
    if let Some(token) = &config.api_token {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    } else {
        warn!("'GH_API_KEY' not set, sending unauthenticated requests (lower rate limit)");
    }
    Ok(headers)
}

/// Client for the github repository search endpoint.
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    base_url: String,
}

impl GithubClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .default_headers(get_requests_headers(config)?)
            .build()?;
        Ok(GithubClient {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Runs one search for the top 10 repositories of `category`, optionally
    /// restricted to `language`.
    /// Every status other than 200 is returned as [`FetchError::Api`].
    pub async fn search_top_repositories(
        &self,
        category: &str,
        language: &str,
    ) -> Result<Vec<Repo>, FetchError> {
        let query = SearchQuery::new(category, language);
        let url = format!("{}/search/repositories", self.base_url);
        debug!("GET {url} q='{}' sort={} per_page={}", query.q, query.sort, query.per_page);

        let response = self.client.get(&url).query(&query).send().await?;
        let status = response.status();
        let rate_limit = RateLimit::from_headers(response.headers());
        if let Some(rl) = &rate_limit {
            debug!("Rate limit: {rl}");
        }
        let response_body = response.text().await?;

        if status != StatusCode::OK {
            let message = match serde_json::from_str::<ApiErrorBody>(&response_body) {
                Ok(body) => body.message,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_owned(),
            };
            error!("Request failed: {status}");
            return Err(FetchError::Api {
                status,
                message,
                rate_limit,
            });
        }

        let get_repo_response: GetRepoResponse = serde_json::from_str(&response_body)?;
        info!(
            "Request successful: {} of {} repositories{}",
            get_repo_response.items.len(),
            get_repo_response.total_count,
            if get_repo_response.incomplete_results {
                " (incomplete results)"
            } else {
                ""
            }
        );
        Ok(get_repo_response.items)
    }

    /// Same request as [`Self::search_top_repositories`], but an API failure comes
    /// back as an empty list, so callers can't tell "no results" from "request failed".
    /// Transport and decode failures still propagate.
    pub async fn fetch_top_repositories(
        &self,
        category: &str,
        language: &str,
    ) -> Result<Vec<Repo>, FetchError> {
        match self.search_top_repositories(category, language).await {
            Err(err) if err.is_api() => {
                warn!("{err}, showing no repositories");
                Ok(Vec::new())
            }
            other => other,
        }
    }
}
