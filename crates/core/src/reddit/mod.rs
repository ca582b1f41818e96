//! Reddit listings: domain model, envelope parsing, normalization and rendering.

pub mod error;
pub mod listing;
pub mod normalize;
pub mod queries;
pub mod render;
pub mod types;

pub use error::{RedditError, Result};
pub use listing::{Fields, Listing, Thing};
pub use normalize::{
    parse_comment, parse_post, parse_post_comments, parse_post_listing, parse_subreddit_info,
};
pub use queries::ApiRequest;
pub use render::{format_post_with_comments, format_posts, format_subreddit_info, OutputFormat};
pub use types::{
    Comment, PaginatedResult, Post, PostSort, PostWithComments, SearchSort, SubredditInfo,
    TimeFilter,
};
