mod reddit;

use serde::{Deserialize, Serialize};

// Re-export types needed by tool handlers
pub use super::{JsonRpcError, Tool};

// MCP Protocol types for tools
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
}

#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

/// Successful tool output; failures travel as JSON-RPC errors instead
#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

fn internal_error(e: serde_json::Error) -> JsonRpcError {
    JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    }
}

pub fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    let result = InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {}),
        },
        server_info: ServerInfo {
            name: "redditmcp".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    serde_json::to_value(result).map_err(internal_error)
}

fn format_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "description": "Output format: 'md' for readable markdown or 'json' for the full structured data (default: md)",
        "enum": ["md", "json"],
        "default": "md"
    })
}

fn limit_schema(default: u32, max: u32, noun: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "integer",
        "description": format!("Number of {noun} to return (default: {default}, max: {max})"),
        "minimum": 1,
        "maximum": max,
        "default": default
    })
}

fn search_sort_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "description": "Sort order (default: relevance)",
        "enum": ["relevance", "hot", "top", "new"],
        "default": "relevance"
    })
}

fn time_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "description": "Time window for top and search results (default: all)",
        "enum": ["hour", "day", "week", "month", "year", "all"],
        "default": "all"
    })
}

fn after_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "description": "Pagination cursor. Pass the `after` value from a previous response to fetch the next page."
    })
}

pub fn tools() -> Vec<Tool> {
    vec![
        Tool {
            name: "search".to_string(),
            description: "Search all of Reddit for posts matching a query. Returns titles, authors, scores, comment counts and a short excerpt of each post, plus a cursor when more results are available.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query"
                    },
                    "limit": limit_schema(5, 25, "posts"),
                    "sort": search_sort_schema(),
                    "time": time_schema(),
                    "after": after_schema(),
                    "format": format_schema()
                },
                "required": ["query"]
            }),
        },
        Tool {
            name: "subreddit_info".to_string(),
            description: "Get information about a subreddit: title, subscriber count, creation date, NSFW flag and public description.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "subreddit": {
                        "type": "string",
                        "description": "Subreddit name, with or without the 'r/' prefix (e.g., 'rust')"
                    },
                    "format": format_schema()
                },
                "required": ["subreddit"]
            }),
        },
        Tool {
            name: "subreddit_posts".to_string(),
            description: "List posts from a subreddit sorted by hot, new, top or rising. Supports cursor pagination with `after`.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "subreddit": {
                        "type": "string",
                        "description": "Subreddit name, with or without the 'r/' prefix"
                    },
                    "limit": limit_schema(5, 25, "posts"),
                    "sort": {
                        "type": "string",
                        "description": "Sort order (default: hot)",
                        "enum": ["hot", "new", "top", "rising"],
                        "default": "hot"
                    },
                    "time": time_schema(),
                    "after": after_schema(),
                    "format": format_schema()
                },
                "required": ["subreddit"]
            }),
        },
        Tool {
            name: "post_comments".to_string(),
            description: "Read a Reddit post and its comment tree. Nested replies are indented; at most three replies are shown under each comment.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "subreddit": {
                        "type": "string",
                        "description": "Subreddit the post belongs to"
                    },
                    "post_id": {
                        "type": "string",
                        "description": "Post ID (e.g., '1abcde'); a 't3_' prefix is accepted"
                    },
                    "limit": limit_schema(10, 50, "top-level comments"),
                    "format": format_schema()
                },
                "required": ["subreddit", "post_id"]
            }),
        },
        Tool {
            name: "subreddit_search".to_string(),
            description: "Search for posts within a single subreddit. Supports the same sort, time and pagination options as `search`.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "subreddit": {
                        "type": "string",
                        "description": "Subreddit to search in"
                    },
                    "query": {
                        "type": "string",
                        "description": "Search query"
                    },
                    "limit": limit_schema(5, 25, "posts"),
                    "sort": search_sort_schema(),
                    "time": time_schema(),
                    "after": after_schema(),
                    "format": format_schema()
                },
                "required": ["subreddit", "query"]
            }),
        },
    ]
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let result = ToolsList { tools: tools() };

    serde_json::to_value(result).map_err(internal_error)
}

pub async fn handle_tools_call(
    params: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError {
            code: -32602,
            message: format!("Invalid params: {e}"),
            data: None,
        })?;

    let text = match params.name.as_str() {
        "search" => reddit::handle_search(params.arguments, global).await,
        "subreddit_info" => reddit::handle_subreddit_info(params.arguments, global).await,
        "subreddit_posts" => reddit::handle_subreddit_posts(params.arguments, global).await,
        "post_comments" => reddit::handle_post_comments(params.arguments, global).await,
        "subreddit_search" => reddit::handle_subreddit_search(params.arguments, global).await,
        _ => {
            return Err(JsonRpcError {
                code: -32602,
                message: format!("Unknown tool: {}", params.name),
                data: None,
            })
        }
    }
    .map_err(JsonRpcError::from)?;

    let result = CallToolResult {
        content: vec![Content::Text { text }],
    };

    serde_json::to_value(result).map_err(internal_error)
}
