use redditmcp_core::reddit::RedditError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error(transparent)]
    Reddit(#[from] RedditError),
}

impl Error {
    /// JSON-RPC error code reported to MCP clients
    pub fn rpc_code(&self) -> i32 {
        match self {
            Error::InvalidArguments(_) => -32602,
            Error::Reddit(_) => -32603,
        }
    }
}
