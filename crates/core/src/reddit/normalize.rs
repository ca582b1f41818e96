//! Conversion from raw API payloads to the typed domain model.

use serde_json::Value;

use super::error::{RedditError, Result};
use super::listing::{Fields, Listing, Thing};
use super::types::{Comment, PaginatedResult, Post, PostWithComments, SubredditInfo};

/// Build a [`Post`] from the `data` object of a `t3` thing
pub fn parse_post(fields: &Fields) -> Post {
    Post {
        id: fields.string("id"),
        title: fields.string("title"),
        author: fields.string("author"),
        score: fields.int("score"),
        url: fields.string("url"),
        selftext: fields.string("selftext"),
        permalink: fields.string("permalink"),
        subreddit: fields.string("subreddit"),
        num_comments: fields.uint("num_comments"),
        created_utc: fields.int("created_utc"),
        is_self: fields.boolean("is_self"),
    }
}

/// Build a [`SubredditInfo`] from the `data` object of a `t5` thing
pub fn parse_subreddit_fields(fields: &Fields) -> SubredditInfo {
    SubredditInfo {
        name: fields.string("display_name"),
        title: fields.string("title"),
        description: fields.string("public_description"),
        subscribers: fields.uint("subscribers"),
        created_utc: fields.int("created_utc"),
        over18: fields.boolean("over18"),
        url: fields.string("url"),
    }
}

/// Build a [`Comment`] from the `data` object of a `t1` thing, resolving its reply tree.
///
/// `replies` is either a nested Listing envelope, an empty string, or absent.
/// Non-comment children (`more` placeholders) are dropped at every level.
pub fn parse_comment(fields: &Fields) -> Result<Comment> {
    let replies = match fields.get("replies") {
        Some(value @ Value::Object(_)) => {
            let listing = Thing::from_value(value)?.into_listing("comment replies")?;
            parse_comment_children(listing)?
        }
        _ => Vec::new(),
    };

    Ok(Comment {
        id: fields.string("id"),
        author: fields.string("author"),
        body: fields.string("body"),
        score: fields.int("score"),
        created_utc: fields.int("created_utc"),
        depth: u32::try_from(fields.uint("depth")).unwrap_or(u32::MAX),
        replies,
    })
}

/// Parse the comment children of a listing, keeping API order
pub fn parse_comment_children(listing: Listing) -> Result<Vec<Comment>> {
    listing
        .children
        .iter()
        .filter_map(|child| match child {
            Thing::Comment(fields) => Some(parse_comment(fields)),
            _ => None,
        })
        .collect()
}

/// Parse a post listing payload (`/search.json`, `/r/{name}/{sort}.json`)
pub fn parse_post_listing(payload: &Value) -> Result<PaginatedResult<Post>> {
    let listing = Thing::from_value(payload)?.into_listing("post listing")?;

    let items = listing
        .children
        .iter()
        .filter_map(|child| match child {
            Thing::Link(fields) => Some(parse_post(fields)),
            _ => None,
        })
        .collect();

    Ok(PaginatedResult {
        items,
        after: listing.after,
    })
}

/// Parse a `/r/{name}/about.json` payload.
///
/// Reddit answers unknown subreddits either with a 404 or with a payload that
/// is not a `t5` thing (an empty search listing); the latter is `NotFound`.
pub fn parse_subreddit_info(name: &str, payload: &Value) -> Result<SubredditInfo> {
    match Thing::from_value(payload)? {
        Thing::Subreddit(fields) => Ok(parse_subreddit_fields(&fields)),
        other => Err(RedditError::NotFound(format!(
            "subreddit r/{name} (API returned `{}`)",
            other.kind()
        ))),
    }
}

/// Parse a `/r/{name}/comments/{id}.json` payload.
///
/// The payload is a two element array: index 0 is a one-item listing with
/// the post, index 1 is the top-level comment listing. Both are required.
pub fn parse_post_comments(payload: &Value) -> Result<PostWithComments> {
    let parts = payload.as_array().ok_or_else(|| {
        RedditError::MalformedResponse("comments payload is not an array".to_string())
    })?;

    let (post_part, comments_part) = match parts.as_slice() {
        [post_part, comments_part, ..] => (post_part, comments_part),
        _ => {
            return Err(RedditError::MalformedResponse(format!(
                "comments payload has {} part(s), expected 2",
                parts.len()
            )))
        }
    };

    let post_listing = Thing::from_value(post_part)?.into_listing("post part")?;
    let post = post_listing
        .children
        .iter()
        .find_map(|child| match child {
            Thing::Link(fields) => Some(parse_post(fields)),
            _ => None,
        })
        .ok_or_else(|| {
            RedditError::MalformedResponse("post part does not contain a post".to_string())
        })?;

    let comment_listing = Thing::from_value(comments_part)?.into_listing("comments part")?;
    let comments = parse_comment_children(comment_listing)?;

    Ok(PostWithComments { post, comments })
}
