// Data would be unstable if we filtered on a small count, so the threshold stays fixed.
pub const MIN_CATEGORY_COUNT: u32 = 100;
pub const PAGE_SIZE: u32 = 10;

/// Query string of one `GET /search/repositories` request.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub q: String,
    pub sort: String,
    pub per_page: u32,
}

impl SearchQuery {
    /// `category` is both the qualifier and the sort key, `language` adds a
    /// `language:` clause only when it is not blank.
    pub fn new(category: &str, language: &str) -> Self {
        let category = category.trim();
        let mut q = format!("{category}:>{MIN_CATEGORY_COUNT}");

        let language = language.trim();
        if !language.is_empty() {
            q.push_str(&format!(" language:{language}"));
        }

        SearchQuery {
            q,
            sort: category.to_owned(),
            per_page: PAGE_SIZE,
        }
    }
}
