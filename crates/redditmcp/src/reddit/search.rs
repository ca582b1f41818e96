use crate::prelude::{eprintln, *};
use redditmcp_core::reddit::{format_posts, OutputFormat, SearchSort, TimeFilter};

use super::RedditClient;

#[derive(Debug, clap::Args, Clone)]
pub struct SearchOptions {
    /// Search query
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Number of results (1-25)
    #[arg(short, long, env = "REDDIT_LIMIT", default_value = "5", value_parser = clap::value_parser!(u32).range(1..=25))]
    pub limit: u32,

    /// Sort order
    #[arg(short, long, value_enum, default_value_t)]
    pub sort: SearchSort,

    /// Time window
    #[arg(short, long, value_enum, default_value_t)]
    pub time: TimeFilter,

    /// Pagination cursor from a previous response
    #[arg(short, long)]
    pub after: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Debug, clap::Args, Clone)]
pub struct SubredditSearchOptions {
    /// Subreddit name (without r/)
    #[arg(value_name = "SUBREDDIT")]
    pub subreddit: String,

    #[command(flatten)]
    pub search: SearchOptions,
}

pub async fn run(options: SearchOptions, global: &crate::Global) -> Result<String> {
    if global.verbose {
        eprintln!("Searching Reddit for {:?}...", options.query);
    }

    let client = RedditClient::from_global(global)?;
    let page = client
        .search(
            &options.query,
            options.limit,
            options.sort,
            options.time,
            options.after.as_deref(),
        )
        .await?;

    Ok(format_posts(
        &page.items,
        options.format,
        page.after.as_deref(),
    )?)
}

pub async fn run_subreddit(options: SubredditSearchOptions, global: &crate::Global) -> Result<String> {
    let search = options.search;

    if global.verbose {
        eprintln!("Searching r/{} for {:?}...", options.subreddit, search.query);
    }

    let client = RedditClient::from_global(global)?;
    let page = client
        .search_subreddit(
            &options.subreddit,
            &search.query,
            search.limit,
            search.sort,
            search.time,
            search.after.as_deref(),
        )
        .await?;

    Ok(format_posts(
        &page.items,
        search.format,
        page.after.as_deref(),
    )?)
}
