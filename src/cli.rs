use clap::Parser;

use crate::display_utils::repo_table::{SortOrder, ViewOptions};

#[derive(Parser, Debug)]
#[command(
    name = "top_repos",
    version,
    about = "Shows the top github repositories of a category as a table"
)]
pub struct Cli {
    /// Search qualifier and sort key, e.g. stars or forks
    #[arg(long, default_value = "stars")]
    pub category: String,

    /// Only search repositories written in this language (server side)
    #[arg(long, default_value = "")]
    pub language: String,

    /// Sort the fetched rows by forks
    #[arg(long, value_enum)]
    pub sort_forks: Option<SortOrder>,

    /// Only show fetched rows whose language is exactly this one
    #[arg(long)]
    pub filter_language: Option<String>,

    /// Print the language filter options of the fetched rows instead of the table
    #[arg(long)]
    pub languages: bool,

    /// Print the rows as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Show an empty table instead of failing when github answers with an error
    #[arg(long)]
    pub silent_errors: bool,
}

impl Cli {
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            language: self.filter_language.clone(),
            forks_order: self.sort_forks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["top_repos"]).unwrap();
        assert_eq!(cli.category, "stars");
        assert_eq!(cli.language, "");
        assert_eq!(cli.view_options(), ViewOptions::default());
        assert!(!cli.json && !cli.languages && !cli.silent_errors);
    }

    #[test]
    fn view_flags() {
        let cli = Cli::try_parse_from([
            "top_repos",
            "--language",
            " Go ",
            "--sort-forks",
            "descend",
            "--filter-language",
            "Go",
        ])
        .unwrap();
        assert_eq!(cli.language, " Go ");
        assert_eq!(
            cli.view_options(),
            ViewOptions {
                language: Some("Go".to_owned()),
                forks_order: Some(SortOrder::Descend),
            }
        );
    }

    #[test]
    fn rejects_unknown_sort_order() {
        assert!(Cli::try_parse_from(["top_repos", "--sort-forks", "sideways"]).is_err());
    }
}
