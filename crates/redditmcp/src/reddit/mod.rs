use crate::prelude::{eprintln, println, *};

pub mod client;
pub mod comments;
pub mod info;
pub mod posts;
pub mod search;

pub use client::RedditClient;

#[derive(Debug, clap::Parser)]
#[command(name = "reddit")]
#[command(about = "Reddit (reddit.com) operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Search all of Reddit for posts matching a query
    #[clap(name = "search")]
    Search(search::SearchOptions),

    /// Show information about a subreddit
    #[clap(name = "info")]
    Info(info::InfoOptions),

    /// List posts from a subreddit
    #[clap(name = "posts")]
    Posts(posts::PostsOptions),

    /// Read a post and its comment tree
    #[clap(name = "comments")]
    Comments(comments::CommentsOptions),

    /// Search within a single subreddit
    #[clap(name = "subreddit-search")]
    SubredditSearch(search::SubredditSearchOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Reddit API Base: {}", global.base_url);
        eprintln!();
    }

    let text = match app.command {
        Commands::Search(options) => search::run(options, &global).await?,
        Commands::Info(options) => info::run(options, &global).await?,
        Commands::Posts(options) => posts::run(options, &global).await?,
        Commands::Comments(options) => comments::run(options, &global).await?,
        Commands::SubredditSearch(options) => search::run_subreddit(options, &global).await?,
    };

    println!("{}", text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use redditmcp_core::reddit::{OutputFormat, PostSort, SearchSort, TimeFilter};

    #[derive(Debug, clap::Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    #[test]
    fn test_parse_search_defaults() {
        let cli = TestCli::try_parse_from(["reddit", "search", "rust async"]).unwrap();
        match cli.command {
            Commands::Search(options) => {
                assert_eq!(options.query, "rust async");
                assert_eq!(options.limit, 5);
                assert!(matches!(options.sort, SearchSort::Relevance));
                assert!(matches!(options.time, TimeFilter::All));
                assert!(options.after.is_none());
                assert!(matches!(options.format, OutputFormat::Md));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_posts_with_flags() {
        let cli = TestCli::try_parse_from([
            "reddit", "posts", "rust", "--sort", "top", "--time", "week", "--limit", "25",
            "--format", "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Posts(options) => {
                assert_eq!(options.subreddit, "rust");
                assert_eq!(options.limit, 25);
                assert!(matches!(options.sort, PostSort::Top));
                assert!(matches!(options.time, TimeFilter::Week));
                assert!(matches!(options.format, OutputFormat::Json));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_listing_limit_out_of_range() {
        assert!(TestCli::try_parse_from(["reddit", "search", "q", "--limit", "26"]).is_err());
        assert!(TestCli::try_parse_from(["reddit", "search", "q", "--limit", "0"]).is_err());
    }

    #[test]
    fn test_comments_limit_range() {
        assert!(
            TestCli::try_parse_from(["reddit", "comments", "rust", "abc", "--limit", "50"]).is_ok()
        );
        assert!(
            TestCli::try_parse_from(["reddit", "comments", "rust", "abc", "--limit", "51"])
                .is_err()
        );
    }

    #[test]
    fn test_cli_values_match_api_names() {
        use clap::ValueEnum;

        for sort in SearchSort::value_variants() {
            assert_eq!(sort.to_possible_value().unwrap().get_name(), sort.as_str());
        }
        for sort in PostSort::value_variants() {
            assert_eq!(sort.to_possible_value().unwrap().get_name(), sort.as_str());
        }
        for time in TimeFilter::value_variants() {
            assert_eq!(time.to_possible_value().unwrap().get_name(), time.as_str());
        }
        let formats: Vec<_> = OutputFormat::value_variants()
            .iter()
            .filter_map(|f| f.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        assert_eq!(formats, vec!["md", "json"]);
    }

    #[test]
    fn test_rising_is_not_a_search_sort() {
        assert!(TestCli::try_parse_from(["reddit", "search", "q", "--sort", "rising"]).is_err());
    }
}
