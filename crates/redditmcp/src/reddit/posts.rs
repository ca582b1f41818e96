use crate::prelude::{eprintln, *};
use redditmcp_core::reddit::{format_posts, OutputFormat, PostSort, TimeFilter};

use super::RedditClient;

#[derive(Debug, clap::Args, Clone)]
pub struct PostsOptions {
    /// Subreddit name (without r/)
    #[arg(value_name = "SUBREDDIT")]
    pub subreddit: String,

    /// Number of posts (1-25)
    #[arg(short, long, env = "REDDIT_LIMIT", default_value = "5", value_parser = clap::value_parser!(u32).range(1..=25))]
    pub limit: u32,

    /// Sort order
    #[arg(short, long, value_enum, default_value_t)]
    pub sort: PostSort,

    /// Time window (only applies to top)
    #[arg(short, long, value_enum, default_value_t)]
    pub time: TimeFilter,

    /// Pagination cursor from a previous response
    #[arg(short, long)]
    pub after: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

pub async fn run(options: PostsOptions, global: &crate::Global) -> Result<String> {
    if global.verbose {
        eprintln!("Fetching {:?} posts from r/{}...", options.sort, options.subreddit);
    }

    let client = RedditClient::from_global(global)?;
    let page = client
        .get_subreddit_posts(
            &options.subreddit,
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
