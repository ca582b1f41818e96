use crate::prelude::{eprintln, *};
use redditmcp_core::reddit::{format_post_with_comments, OutputFormat};

use super::RedditClient;

#[derive(Debug, clap::Args, Clone)]
pub struct CommentsOptions {
    /// Subreddit name (without r/)
    #[arg(value_name = "SUBREDDIT")]
    pub subreddit: String,

    /// Post ID (the base36 ID from the URL)
    #[arg(value_name = "POST_ID")]
    pub post_id: String,

    /// Number of top-level comments (1-50)
    #[arg(short, long, env = "REDDIT_COMMENT_LIMIT", default_value = "10", value_parser = clap::value_parser!(u32).range(1..=50))]
    pub limit: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

pub async fn run(options: CommentsOptions, global: &crate::Global) -> Result<String> {
    if global.verbose {
        eprintln!(
            "Fetching comments for {} in r/{}...",
            options.post_id, options.subreddit
        );
    }

    let client = RedditClient::from_global(global)?;
    let thread = client
        .get_post_comments(&options.subreddit, &options.post_id, options.limit)
        .await?;

    Ok(format_post_with_comments(
        &thread.post,
        &thread.comments,
        options.format,
    )?)
}
