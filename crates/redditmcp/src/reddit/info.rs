use crate::prelude::{eprintln, *};
use redditmcp_core::reddit::{format_subreddit_info, OutputFormat};

use super::RedditClient;

#[derive(Debug, clap::Args, Clone)]
pub struct InfoOptions {
    /// Subreddit name (without r/)
    #[arg(value_name = "SUBREDDIT")]
    pub subreddit: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

pub async fn run(options: InfoOptions, global: &crate::Global) -> Result<String> {
    if global.verbose {
        eprintln!("Fetching r/{} info...", options.subreddit);
    }

    let client = RedditClient::from_global(global)?;
    let info = client.get_subreddit_info(&options.subreddit).await?;

    Ok(format_subreddit_info(&info, options.format)?)
}
