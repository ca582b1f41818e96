//! Rendering of normalized Reddit data as markdown or JSON.
//!
//! Each entity has one markdown and one JSON renderer; the `format_*` entry
//! points only dispatch on [`OutputFormat`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::Result;
use super::types::{Comment, Post, SubredditInfo};

pub const NO_POSTS: &str = "No posts found.";
pub const NO_COMMENTS: &str = "_No comments_";
pub const NO_DESCRIPTION: &str = "_No description_";
pub const SELFTEXT_LIMIT: usize = 500;
pub const MAX_REPLIES: usize = 3;

const SITE_URL: &str = "https://reddit.com";
const DIVIDER: &str = "\n\n---\n\n";

/// Output format requested by the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable markdown (default)
    #[default]
    Md,
    /// Lossless pretty-printed JSON
    Json,
}

pub fn format_posts(posts: &[Post], format: OutputFormat, after: Option<&str>) -> Result<String> {
    match format {
        OutputFormat::Md => Ok(format_posts_md(posts, after)),
        OutputFormat::Json => format_posts_json(posts, after),
    }
}

pub fn format_subreddit_info(info: &SubredditInfo, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Md => Ok(format_subreddit_info_md(info)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(info)?),
    }
}

pub fn format_post_with_comments(
    post: &Post,
    comments: &[Comment],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Md => Ok(format_post_with_comments_md(post, comments)),
        OutputFormat::Json => format_post_with_comments_json(post, comments),
    }
}

#[derive(Serialize)]
struct PostsDocument<'a> {
    posts: &'a [Post],
    after: Option<&'a str>,
}

#[derive(Serialize)]
struct PostWithCommentsDocument<'a> {
    post: &'a Post,
    comments: &'a [Comment],
}

pub fn format_posts_json(posts: &[Post], after: Option<&str>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&PostsDocument { posts, after })?)
}

pub fn format_post_with_comments_json(post: &Post, comments: &[Comment]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&PostWithCommentsDocument {
        post,
        comments,
    })?)
}

/// Convert a Unix timestamp to a `YYYY-MM-DD` UTC date
pub fn format_date(created_utc: i64) -> String {
    DateTime::<Utc>::from_timestamp(created_utc, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Group digits in threes with commas (`1234567` -> `1,234,567`)
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Keep the first `max_chars` characters, appending `...` when anything was cut
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

pub fn format_post_md(post: &Post) -> String {
    let mut lines = vec![
        format!("## {}", post.title),
        String::new(),
        format!(
            "**r/{}** | {} points | {} comments | by u/{} | {}",
            post.subreddit,
            post.score,
            post.num_comments,
            post.author,
            format_date(post.created_utc)
        ),
        String::new(),
    ];

    if post.is_self {
        if !post.selftext.is_empty() {
            lines.push(truncate_text(&post.selftext, SELFTEXT_LIMIT));
            lines.push(String::new());
        }
    } else {
        lines.push(format!("Link: {}", post.url));
        lines.push(String::new());
    }

    lines.push(format!("[View on Reddit]({SITE_URL}{})", post.permalink));
    lines.join("\n")
}

pub fn format_posts_md(posts: &[Post], after: Option<&str>) -> String {
    if posts.is_empty() {
        return NO_POSTS.to_string();
    }

    let mut output = posts
        .iter()
        .map(format_post_md)
        .collect::<Vec<_>>()
        .join(DIVIDER);

    if let Some(after) = after {
        output.push_str(DIVIDER);
        output.push_str(&format!(
            "**More results available.** Pass `after: \"{after}\"` to fetch the next page."
        ));
    }

    output
}

pub fn format_subreddit_info_md(info: &SubredditInfo) -> String {
    let description = if info.description.is_empty() {
        NO_DESCRIPTION
    } else {
        info.description.as_str()
    };

    [
        format!("# r/{}", info.name),
        String::new(),
        format!("**{}**", info.title),
        String::new(),
        description.to_string(),
        String::new(),
        format!("- Subscribers: {}", format_thousands(info.subscribers)),
        format!("- Created: {}", format_date(info.created_utc)),
        format!("- NSFW: {}", if info.over18 { "Yes" } else { "No" }),
        String::new(),
        format!("[Visit subreddit]({SITE_URL}{})", info.url),
    ]
    .join("\n")
}

/// Render one comment and up to [`MAX_REPLIES`] replies per level beneath it.
///
/// Every line of a comment at render depth `d` is indented by `2 * d` spaces.
/// Blocks are emitted in pre-order from an explicit stack.
pub fn format_comment_md(root: &Comment) -> String {
    let mut blocks = Vec::new();
    let mut stack = vec![(root, 0usize)];

    while let Some((comment, depth)) = stack.pop() {
        let indent = "  ".repeat(depth);
        let body = comment
            .body
            .split('\n')
            .map(|line| format!("{indent}{line}"))
            .collect::<Vec<_>>()
            .join("\n");

        blocks.push(format!(
            "{indent}**u/{}** | {} points\n\n{body}\n",
            comment.author, comment.score
        ));

        for reply in comment.replies.iter().take(MAX_REPLIES).rev() {
            stack.push((reply, depth + 1));
        }
    }

    blocks.join("\n")
}

pub fn format_post_with_comments_md(post: &Post, comments: &[Comment]) -> String {
    let mut lines = vec![
        format_post_md(post),
        String::new(),
        "---".to_string(),
        String::new(),
        "## Comments".to_string(),
        String::new(),
    ];

    if comments.is_empty() {
        lines.push(NO_COMMENTS.to_string());
    } else {
        for comment in comments {
            lines.push(format_comment_md(comment));
            lines.push("---".to_string());
            lines.push(String::new());
        }
    }

    lines.join("\n")
}
