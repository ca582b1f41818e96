use redditmcp_core::reddit::{
    parse_post_comments, parse_post_listing, parse_subreddit_info, queries, ApiRequest,
    PaginatedResult, Post, PostSort, PostWithComments, RedditError, Result, SearchSort,
    SubredditInfo, TimeFilter,
};
use serde_json::Value;

/// Request-scoped client for the Reddit JSON API.
///
/// Holds no mutable state, so one instance can serve any number of
/// concurrent calls.
#[derive(Debug, Clone)]
pub struct RedditClient {
    http: reqwest::Client,
    base_url: String,
}

impl RedditClient {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| RedditError::transport(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_global(global: &crate::Global) -> Result<Self> {
        Self::new(&global.base_url, &global.user_agent)
    }

    /// Issue a GET and return the decoded JSON body.
    ///
    /// Non-2xx statuses and transport errors become `RequestFailed`; a body
    /// that is not JSON becomes `MalformedResponse`.
    pub async fn fetch_json(&self, request: &ApiRequest) -> Result<Value> {
        let url = format!("{}{}", self.base_url, request.path);
        log::debug!("GET {url} query={:?}", request.query);

        let response = self
            .http
            .get(&url)
            .query(&request.query)
            .send()
            .await
            .map_err(|e| RedditError::transport(format!("Failed to fetch {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            log::debug!("GET {url} returned {status}");
            return Err(RedditError::status(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown status"),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RedditError::transport(format!("Failed to read body of {url}: {e}")))?;

        serde_json::from_str(&body).map_err(|e| {
            RedditError::MalformedResponse(format!("Response from {url} is not JSON: {e}"))
        })
    }

    pub async fn search(
        &self,
        query: &str,
        limit: u32,
        sort: SearchSort,
        time: TimeFilter,
        after: Option<&str>,
    ) -> Result<PaginatedResult<Post>> {
        let payload = self
            .fetch_json(&queries::search(query, limit, sort, time, after))
            .await?;
        parse_post_listing(&payload)
    }

    pub async fn get_subreddit_info(&self, name: &str) -> Result<SubredditInfo> {
        let payload = match self.fetch_json(&queries::subreddit_info(name)).await {
            Err(RedditError::RequestFailed {
                status: Some(404), ..
            }) => return Err(RedditError::NotFound(format!("subreddit r/{name}"))),
            other => other?,
        };
        parse_subreddit_info(name, &payload)
    }

    pub async fn get_subreddit_posts(
        &self,
        name: &str,
        limit: u32,
        sort: PostSort,
        time: TimeFilter,
        after: Option<&str>,
    ) -> Result<PaginatedResult<Post>> {
        let payload = self
            .fetch_json(&queries::subreddit_posts(name, limit, sort, time, after))
            .await?;
        parse_post_listing(&payload)
    }

    pub async fn get_post_comments(
        &self,
        subreddit: &str,
        post_id: &str,
        limit: u32,
    ) -> Result<PostWithComments> {
        let payload = self
            .fetch_json(&queries::post_comments(subreddit, post_id, limit))
            .await?;
        parse_post_comments(&payload)
    }

    pub async fn search_subreddit(
        &self,
        name: &str,
        query: &str,
        limit: u32,
        sort: SearchSort,
        time: TimeFilter,
        after: Option<&str>,
    ) -> Result<PaginatedResult<Post>> {
        let payload = self
            .fetch_json(&queries::search_subreddit(
                name, query, limit, sort, time, after,
            ))
            .await?;
        parse_post_listing(&payload)
    }
}
