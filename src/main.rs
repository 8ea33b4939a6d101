mod cli;
mod config;
mod display_utils;
mod gh_api_search_repo_response;
mod github_api_utils;
use cli::Cli;
use config::Config;
use display_utils::{
    display_record::normalize,
    repo_table::{render, title, RepoTable},
    scheduled_fetch::ScheduledFetch,
};
use github_api_utils::{github_api_helper::GithubClient, FetchError};

use clap::Parser;
use dotenv::dotenv;

extern crate pretty_env_logger;
#[macro_use]
extern crate log;

#[tokio::main]
async fn main() {
    // load env variables
    dotenv().ok();
    pretty_env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(&cli).await {
        error!("{err}");
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    let client = GithubClient::new(&config)?;

    let category = cli.category.clone();
    let language = cli.language.clone();
    let silent_errors = cli.silent_errors;
    let mut scheduled = ScheduledFetch::schedule(config.fetch_delay, async move {
        let repos = if silent_errors {
            client.fetch_top_repositories(&category, &language).await?
        } else {
            client.search_top_repositories(&category, &language).await?
        };
        Ok::<_, FetchError>(normalize(&repos))
    });

    info!("Fetching top repositories by {}", cli.category);
    let fetched = tokio::select! {
        fetched = scheduled.join() => fetched,
        _ = tokio::signal::ctrl_c() => {
            scheduled.cancel();
            warn!("Interrupted, fetch cancelled");
            return Ok(());
        }
    };
    let records = match fetched {
        Some(records) => records?,
        None => return Ok(()),
    };

    let mut table = RepoTable::default();
    table.replace(records);

    if cli.languages {
        for language in table.language_filters() {
            println!("{language}");
        }
        return Ok(());
    }

    let rows = table.view(&cli.view_options());
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!(
            "{}",
            title(&cli.category, &cli.language, table.records().len())
        );
        println!("{}", render(&rows));
    }
    Ok(())
}
