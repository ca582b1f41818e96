use crate::prelude::{eprintln, Error};
use crate::reddit::RedditClient;
use redditmcp_core::reddit::{
    format_post_with_comments, format_posts, format_subreddit_info, OutputFormat, PostSort,
    SearchSort, TimeFilter,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;

const LISTING_LIMIT: (u32, u32) = (5, 25);
const COMMENT_LIMIT: (u32, u32) = (10, 50);

fn parse_args<T: DeserializeOwned>(arguments: Option<serde_json::Value>) -> Result<T, Error> {
    let arguments = arguments.unwrap_or_else(|| serde_json::json!({}));
    serde_json::from_value(arguments).map_err(|e| Error::InvalidArguments(e.to_string()))
}

/// Apply the default and reject anything but a whole number in `1..=max`.
///
/// JSON clients may encode integers as floats (`5.0`), so any integral value
/// is accepted.
fn check_limit(limit: Option<f64>, (default, max): (u32, u32)) -> Result<u32, Error> {
    match limit {
        None => Ok(default),
        Some(n) if n.fract() == 0.0 && (1.0..=f64::from(max)).contains(&n) => Ok(n as u32),
        Some(n) => Err(Error::InvalidArguments(format!(
            "limit must be an integer between 1 and {max}, got {n}"
        ))),
    }
}

#[derive(Debug, Deserialize)]
struct SearchArgs {
    query: String,
    limit: Option<f64>,
    #[serde(default)]
    sort: SearchSort,
    #[serde(default)]
    time: TimeFilter,
    after: Option<String>,
    #[serde(default)]
    format: OutputFormat,
}

#[derive(Debug, Deserialize)]
struct SubredditSearchArgs {
    subreddit: String,
    #[serde(flatten)]
    search: SearchArgs,
}

#[derive(Debug, Deserialize)]
struct SubredditInfoArgs {
    subreddit: String,
    #[serde(default)]
    format: OutputFormat,
}

#[derive(Debug, Deserialize)]
struct SubredditPostsArgs {
    subreddit: String,
    limit: Option<f64>,
    #[serde(default)]
    sort: PostSort,
    #[serde(default)]
    time: TimeFilter,
    after: Option<String>,
    #[serde(default)]
    format: OutputFormat,
}

#[derive(Debug, Deserialize)]
struct PostCommentsArgs {
    subreddit: String,
    post_id: String,
    limit: Option<f64>,
    #[serde(default)]
    format: OutputFormat,
}

pub async fn handle_search(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<String, Error> {
    let args: SearchArgs = parse_args(arguments)?;
    let limit = check_limit(args.limit, LISTING_LIMIT)?;

    if global.verbose {
        eprintln!("Calling search: query={}, limit={limit}, sort={:?}", args.query, args.sort);
    }
    log::info!("search query={:?} limit={limit}", args.query);

    let client = RedditClient::from_global(global)?;
    let page = client
        .search(&args.query, limit, args.sort, args.time, args.after.as_deref())
        .await?;

    Ok(format_posts(&page.items, args.format, page.after.as_deref())?)
}

pub async fn handle_subreddit_info(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<String, Error> {
    let args: SubredditInfoArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!("Calling subreddit_info: subreddit={}", args.subreddit);
    }
    log::info!("subreddit_info subreddit={:?}", args.subreddit);

    let client = RedditClient::from_global(global)?;
    let info = client.get_subreddit_info(&args.subreddit).await?;

    Ok(format_subreddit_info(&info, args.format)?)
}

pub async fn handle_subreddit_posts(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<String, Error> {
    let args: SubredditPostsArgs = parse_args(arguments)?;
    let limit = check_limit(args.limit, LISTING_LIMIT)?;

    if global.verbose {
        eprintln!(
            "Calling subreddit_posts: subreddit={}, limit={limit}, sort={:?}",
            args.subreddit, args.sort
        );
    }
    log::info!("subreddit_posts subreddit={:?} limit={limit}", args.subreddit);

    let client = RedditClient::from_global(global)?;
    let page = client
        .get_subreddit_posts(
            &args.subreddit,
            limit,
            args.sort,
            args.time,
            args.after.as_deref(),
        )
        .await?;

    Ok(format_posts(&page.items, args.format, page.after.as_deref())?)
}

pub async fn handle_post_comments(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<String, Error> {
    let args: PostCommentsArgs = parse_args(arguments)?;
    let limit = check_limit(args.limit, COMMENT_LIMIT)?;

    if global.verbose {
        eprintln!(
            "Calling post_comments: subreddit={}, post_id={}, limit={limit}",
            args.subreddit, args.post_id
        );
    }
    log::info!("post_comments subreddit={:?} post_id={:?}", args.subreddit, args.post_id);

    let client = RedditClient::from_global(global)?;
    let result = client
        .get_post_comments(&args.subreddit, &args.post_id, limit)
        .await?;

    Ok(format_post_with_comments(
        &result.post,
        &result.comments,
        args.format,
    )?)
}

pub async fn handle_subreddit_search(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<String, Error> {
    let args: SubredditSearchArgs = parse_args(arguments)?;
    let search = args.search;
    let limit = check_limit(search.limit, LISTING_LIMIT)?;

    if global.verbose {
        eprintln!(
            "Calling subreddit_search: subreddit={}, query={}, limit={limit}",
            args.subreddit, search.query
        );
    }
    log::info!("subreddit_search subreddit={:?} query={:?}", args.subreddit, search.query);

    let client = RedditClient::from_global(global)?;
    let page = client
        .search_subreddit(
            &args.subreddit,
            &search.query,
            limit,
            search.sort,
            search.time,
            search.after.as_deref(),
        )
        .await?;

    Ok(format_posts(&page.items, search.format, page.after.as_deref())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reddit::client::tests::serve;
    use axum::{extract::Query, routing::get, Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;

    async fn fixture() -> crate::Global {
        async fn search(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
            let title = format!(
                "q={} sort={}",
                params.get("q").cloned().unwrap_or_default(),
                params.get("sort").cloned().unwrap_or_default()
            );
            Json(json!({
                "kind": "Listing",
                "data": {
                    "after": "t3_next",
                    "children": [{
                        "kind": "t3",
                        "data": {
                            "id": "p1", "title": title, "author": "poster", "score": 42,
                            "permalink": "/r/rust/comments/p1/x/", "subreddit": "rust",
                            "num_comments": 3, "created_utc": 1609459200, "is_self": true,
                            "selftext": "body"
                        }
                    }]
                }
            }))
        }

        let router = Router::new()
            .route("/search.json", get(search))
            .route("/r/rust/search.json", get(search))
            .route(
                "/r/rust/hot.json",
                get(|| async { Json(json!({ "kind": "Listing", "data": { "children": [] } })) }),
            )
            .route(
                "/r/rust/about.json",
                get(|| async {
                    Json(json!({
                        "kind": "t5",
                        "data": { "display_name": "rust", "title": "Rust", "subscribers": 1234567 }
                    }))
                }),
            )
            .route(
                "/r/rust/comments/abc.json",
                get(|| async {
                    Json(json!([
                        { "kind": "Listing", "data": { "children": [
                            { "kind": "t3", "data": { "id": "abc", "title": "Post", "is_self": true } }
                        ] } },
                        { "kind": "Listing", "data": { "children": [
                            { "kind": "t1", "data": {
                                "id": "c1", "author": "a", "body": "hi", "score": 1,
                                "replies": { "kind": "Listing", "data": { "children": [
                                    { "kind": "t1", "data": { "id": "c2", "author": "b", "body": "yo", "score": 2, "depth": 1 } }
                                ] } }
                            } }
                        ] } }
                    ]))
                }),
            );

        crate::Global {
            base_url: serve(router).await,
            ..Default::default()
        }
    }

    #[test]
    fn test_check_limit() {
        assert_eq!(check_limit(None, LISTING_LIMIT).unwrap(), 5);
        assert_eq!(check_limit(None, COMMENT_LIMIT).unwrap(), 10);
        assert_eq!(check_limit(Some(25.0), LISTING_LIMIT).unwrap(), 25);
        assert_eq!(check_limit(Some(50.0), COMMENT_LIMIT).unwrap(), 50);
        assert!(check_limit(Some(0.0), LISTING_LIMIT).is_err());
        assert!(check_limit(Some(26.0), LISTING_LIMIT).is_err());
        assert!(check_limit(Some(51.0), COMMENT_LIMIT).is_err());
    }

    #[test]
    fn test_check_limit_accepts_integral_floats() {
        assert_eq!(check_limit(Some(5.0), LISTING_LIMIT).unwrap(), 5);
        assert_eq!(check_limit(Some(50.0), COMMENT_LIMIT).unwrap(), 50);
        assert!(check_limit(Some(2.5), LISTING_LIMIT).is_err());
        assert!(check_limit(Some(25.5), LISTING_LIMIT).is_err());
        assert!(check_limit(Some(f64::NAN), LISTING_LIMIT).is_err());
    }

    #[tokio::test]
    async fn test_float_limit_reaches_the_api() {
        let global = fixture().await;

        let text = handle_search(Some(json!({ "query": "rust", "limit": 5.0 })), &global)
            .await
            .unwrap();

        assert!(text.contains("## q=rust sort=relevance"));
    }

    #[tokio::test]
    async fn test_invalid_limit_is_rejected_before_fetching() {
        // Nothing listens on this address, so a fetch would surface as -32603.
        let global = crate::Global {
            base_url: "http://127.0.0.1:1".to_string(),
            ..Default::default()
        };

        let err = handle_search(Some(json!({ "query": "rust", "limit": 100 })), &global)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidArguments(_)));
        assert_eq!(err.rpc_code(), -32602);
    }

    #[tokio::test]
    async fn test_unknown_enum_value_is_invalid() {
        let err = handle_subreddit_posts(
            Some(json!({ "subreddit": "rust", "sort": "controversial" })),
            &crate::Global::default(),
        )
        .await
        .unwrap_err();

        assert_eq!(err.rpc_code(), -32602);
    }

    #[tokio::test]
    async fn test_missing_required_argument() {
        let err = handle_post_comments(Some(json!({ "subreddit": "rust" })), &crate::Global::default())
            .await
            .unwrap_err();

        assert_eq!(err.rpc_code(), -32602);
    }

    #[tokio::test]
    async fn test_search_markdown_with_cursor() {
        let global = fixture().await;

        let text = handle_search(Some(json!({ "query": "async", "sort": "top" })), &global)
            .await
            .unwrap();

        assert!(text.contains("## q=async sort=top"));
        assert!(text.contains("More results available"));
        assert!(text.contains("t3_next"));
    }

    #[tokio::test]
    async fn test_subreddit_search_json() {
        let global = fixture().await;

        let text = handle_subreddit_search(
            Some(json!({ "subreddit": "r/rust", "query": "tokio", "format": "json" })),
            &global,
        )
        .await
        .unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["posts"][0]["title"], "q=tokio sort=relevance");
        assert_eq!(value["after"], "t3_next");
    }

    #[tokio::test]
    async fn test_subreddit_posts_empty() {
        let global = fixture().await;

        let text = handle_subreddit_posts(Some(json!({ "subreddit": "rust" })), &global)
            .await
            .unwrap();

        assert_eq!(text, "No posts found.");
    }

    #[tokio::test]
    async fn test_subreddit_info_markdown() {
        let global = fixture().await;

        let text = handle_subreddit_info(Some(json!({ "subreddit": "rust" })), &global)
            .await
            .unwrap();

        assert!(text.contains("Subscribers: 1,234,567"));
        assert!(text.contains("_No description_"));
    }

    #[tokio::test]
    async fn test_post_comments_markdown() {
        let global = fixture().await;

        let text = handle_post_comments(
            Some(json!({ "subreddit": "rust", "post_id": "t3_abc", "limit": 20 })),
            &global,
        )
        .await
        .unwrap();

        assert!(text.contains("## Comments"));
        assert!(text.contains("\n**u/a** | 1 points"));
        assert!(text.contains("\n  **u/b** | 2 points"));
    }

    #[tokio::test]
    async fn test_retrieval_failure_maps_to_internal_error() {
        let global = fixture().await;

        let err = handle_subreddit_info(Some(json!({ "subreddit": "missing" })), &global)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Reddit(_)));
        assert_eq!(err.rpc_code(), -32603);
    }
}
