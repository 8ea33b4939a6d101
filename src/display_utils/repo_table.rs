use std::collections::BTreeSet;

use tabled::{settings::Style, Table, Tabled};

use super::display_record::DisplayRecord;

const DESCRIPTION_WIDTH: usize = 60;
const NOT_APPLICABLE: &str = "N/A";

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Descend,
    Ascend,
}

/// Client-side affordances over the rows already fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewOptions {
    pub language: Option<String>,
    pub forks_order: Option<SortOrder>,
}

/// Display state: the records of the latest fetch.
#[derive(Debug, Default)]
pub struct RepoTable {
    records: Vec<DisplayRecord>,
}

impl RepoTable {
    /// Swaps in the result of a new fetch, the old list is dropped whole.
    pub fn replace(&mut self, records: Vec<DisplayRecord>) {
        self.records = records;
    }

    pub fn records(&self) -> &[DisplayRecord] {
        &self.records
    }

    /// Distinct non-empty languages of the current records, sorted.
    pub fn language_filters(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter_map(|record| record.language.as_deref())
            .filter(|language| !language.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn view(&self, options: &ViewOptions) -> Vec<&DisplayRecord> {
        let mut rows: Vec<&DisplayRecord> = self
            .records
            .iter()
            .filter(|record| match &options.language {
                Some(language) => record.language.as_deref() == Some(language.as_str()),
                None => true,
            })
            .collect();

        // sort_by_key is stable, equal forks stay in rank order
        match options.forks_order {
            Some(SortOrder::Ascend) => rows.sort_by_key(|record| record.forks),
            Some(SortOrder::Descend) => {
                rows.sort_by_key(|record| std::cmp::Reverse(record.forks))
            }
            None => {}
        }
        rows
    }
}

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "Rank")]
    rank: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Stars", display_with = "display_count")]
    stars: u64,
    #[tabled(rename = "Forks", display_with = "display_count")]
    forks: u64,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Language", display_with = "display_language")]
    language: Option<String>,
    #[tabled(rename = "URL")]
    url: String,
}

impl From<&DisplayRecord> for TableRow {
    fn from(record: &DisplayRecord) -> Self {
        TableRow {
            rank: record.rank,
            name: record.name.clone(),
            stars: record.stars,
            forks: record.forks,
            description: truncate(&record.description, DESCRIPTION_WIDTH),
            language: record.language.clone(),
            url: record.url.clone(),
        }
    }
}

/// 1500 -> "1k", 999 -> "999"
pub fn format_count(count: u64) -> String {
    if count >= 1000 {
        format!("{}k", count / 1000)
    } else {
        count.to_string()
    }
}

fn display_count(count: &u64) -> String {
    format_count(*count)
}

fn display_language(language: &Option<String>) -> String {
    match language.as_deref() {
        Some(language) if !language.is_empty() => language.to_owned(),
        _ => NOT_APPLICABLE.to_owned(),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    // descriptions may contain newlines, they would break the row
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.chars().count() <= max_chars {
        return text;
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

/// "Top 10 by Stars", "Top 3 by Forks in Rust"
pub fn title(category: &str, language: &str, count: usize) -> String {
    let category = category.trim();
    let mut chars = category.chars();
    let category = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    match language.trim() {
        "" => format!("Top {count} by {category}"),
        language => format!("Top {count} by {category} in {language}"),
    }
}

pub fn render(rows: &[&DisplayRecord]) -> String {
    if rows.is_empty() {
        return "No repositories".to_owned();
    }
    Table::new(rows.iter().map(|record| TableRow::from(*record)))
        .with(Style::rounded())
        .to_string()
}
