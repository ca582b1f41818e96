use crate::prelude::*;
use clap::Parser;

mod error;
mod mcp;
mod prelude;
mod reddit;

pub const DEFAULT_BASE_URL: &str = "https://old.reddit.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Read Reddit posts, subreddits and comment threads from the CLI or over MCP"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Base URL of the Reddit JSON API
    #[clap(long, env = "REDDIT_BASE_URL", global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// User-Agent header sent with every request
    #[clap(long, env = "REDDIT_USER_AGENT", global = true, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Whether to display additional information.
    #[clap(long, env = "REDDIT_MCP_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

impl Default for Global {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            verbose: false,
        }
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Reddit (reddit.com) operations
    Reddit(crate::reddit::App),

    /// Model Context Protocol server
    MCP(crate::mcp::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Reddit(sub_app) => crate::reddit::run(sub_app, app.global).await,
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
