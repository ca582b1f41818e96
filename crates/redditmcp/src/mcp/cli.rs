#[derive(Debug, clap::Parser)]
#[command(name = "mcp")]
#[command(about = "Serve the Reddit tools over the Model Context Protocol")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Newline-delimited JSON-RPC on stdin/stdout
    #[clap(name = "stdio")]
    Stdio,

    /// JSON-RPC over HTTP: one `POST /mcp` per message, JSON response bodies
    #[clap(name = "http")]
    Http(HttpOptions),
}

#[derive(Debug, clap::Args)]
pub struct HttpOptions {
    /// Port for the `/mcp` endpoint
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Interface to bind; use 0.0.0.0 to accept remote clients
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_http_defaults() {
        let app = App::try_parse_from(["mcp", "http"]).unwrap();
        match app.command {
            Commands::Http(options) => {
                assert_eq!(options.host, "127.0.0.1");
                if std::env::var("PORT").is_err() {
                    assert_eq!(options.port, 3000);
                }
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_sse_is_not_a_transport() {
        assert!(App::try_parse_from(["mcp", "sse"]).is_err());
    }
}
