#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Owner {
    pub avatar_url: String,
    pub html_url: String,
}

/// One item of `GET /search/repositories`, as received.
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Repo {
    pub id: u64,
    pub name: String,
    pub html_url: String,
    pub owner: Owner,
    pub stargazers_count: u64,
    pub forks: u64,
    pub description: Option<String>,
    pub language: Option<String>,
}

#[derive(serde::Deserialize, Debug)]
pub struct GetRepoResponse {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    pub items: Vec<Repo>,
}

/// Body github sends back with a non-200 status
#[derive(serde::Deserialize, Debug)]
pub struct ApiErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_search_response() {
        let body = r#"{
            "total_count": 4242,
            "incomplete_results": false,
            "items": [{
                "id": 1,
                "name": "x",
                "full_name": "o/x",
                "html_url": "u",
                "owner": {"login": "o", "avatar_url": "a", "html_url": "o"},
                "stargazers_count": 1500,
                "forks": 3,
                "description": "d",
                "language": "Go"
            }]
        }"#;
        let response: GetRepoResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.total_count, 4242);
        assert!(!response.incomplete_results);
        assert_eq!(response.items.len(), 1);
        let repo = &response.items[0];
        assert_eq!(repo.owner.avatar_url, "a");
        assert_eq!(repo.stargazers_count, 1500);
        assert_eq!(repo.language.as_deref(), Some("Go"));
    }

    #[test]
    fn partial_items_still_decode() {
        let body = r#"{"items": [{"id": 7, "name": "bare", "description": null, "language": null}]}"#;
        let response: GetRepoResponse = serde_json::from_str(body).unwrap();
        let repo = &response.items[0];
        assert_eq!(repo.id, 7);
        assert_eq!(repo.owner, Owner::default());
        assert_eq!(repo.description, None);
        assert_eq!(repo.language, None);
    }

    #[test]
    fn missing_items_is_an_error() {
        assert!(serde_json::from_str::<GetRepoResponse>(r#"{"total_count": 0}"#).is_err());
    }
}
