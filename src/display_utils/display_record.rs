use serde::Serialize;

use crate::gh_api_search_repo_response::Repo;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOwner {
    pub avatar_url: String,
    pub url: String,
}

/// One table row, flattened from a search [`Repo`].
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub id: u64,
    // 1-based position in the api response
    pub rank: u32,
    pub name: String,
    pub url: String,
    pub owner: DisplayOwner,
    pub stars: u64,
    pub forks: u64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl DisplayRecord {
    fn from_repo(rank: u32, repo: &Repo) -> Self {
        DisplayRecord {
            id: repo.id,
            rank,
            name: repo.name.clone(),
            url: repo.html_url.clone(),
            owner: DisplayOwner {
                avatar_url: repo.owner.avatar_url.clone(),
                url: repo.owner.html_url.clone(),
            },
            stars: repo.stargazers_count,
            forks: repo.forks,
            description: repo.description.clone().unwrap_or_default(),
            language: repo.language.clone(),
        }
    }
}

/// Maps the search items to display records, ranked by response order.
pub fn normalize(repos: &[Repo]) -> Vec<DisplayRecord> {
    repos
        .iter()
        .zip(1..)
        .map(|(repo, rank)| DisplayRecord::from_repo(rank, repo))
        .collect()
}
