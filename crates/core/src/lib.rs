//! Core library for redditmcp
//!
//! This crate is the **Functional Core** of redditmcp: the `redditmcp` binary
//! crate performs HTTP and protocol I/O, this crate holds everything that can
//! be expressed as a pure function over data.
//!
//! - [`reddit::types`]: the normalized domain model (posts, comments, subreddit info)
//! - [`reddit::listing`]: the tagged `{ kind, data }` envelope representation
//! - [`reddit::normalize`]: raw JSON payload to domain model
//! - [`reddit::queries`]: request paths and query pairs per endpoint
//! - [`reddit::render`]: markdown and JSON rendering
//!
//! # Example Usage
//!
//! ```rust
//! use redditmcp_core::reddit::{format_posts, parse_post_listing, OutputFormat};
//!
//! let payload = serde_json::json!({
//!     "kind": "Listing",
//!     "data": { "after": null, "children": [] }
//! });
//!
//! let page = parse_post_listing(&payload).unwrap();
//! let text = format_posts(&page.items, OutputFormat::Md, page.after.as_deref()).unwrap();
//!
//! assert_eq!(text, "No posts found.");
//! ```

pub mod reddit;
