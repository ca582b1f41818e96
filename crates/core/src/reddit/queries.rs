//! Request paths and query strings for each listing endpoint.
//!
//! Pure functions: the shell joins the path onto its base URL and passes the
//! pairs to the HTTP client, which takes care of query-string encoding.

use super::types::{PostSort, SearchSort, TimeFilter};

/// Path plus ordered query pairs for one API request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub path: String,
    pub query: Vec<(&'static str, String)>,
}

fn subreddit_path(name: &str) -> String {
    format!("/r/{}", urlencoding::encode(name.trim_start_matches("r/")))
}

fn push_after(query: &mut Vec<(&'static str, String)>, after: Option<&str>) {
    if let Some(after) = after.filter(|a| !a.is_empty()) {
        query.push(("after", after.to_string()));
    }
}

/// `GET /search.json`
pub fn search(
    query: &str,
    limit: u32,
    sort: SearchSort,
    time: TimeFilter,
    after: Option<&str>,
) -> ApiRequest {
    let mut pairs = vec![
        ("q", query.to_string()),
        ("limit", limit.to_string()),
        ("sort", sort.as_str().to_string()),
        ("t", time.as_str().to_string()),
    ];
    push_after(&mut pairs, after);

    ApiRequest {
        path: "/search.json".to_string(),
        query: pairs,
    }
}

/// `GET /r/{name}/about.json`
pub fn subreddit_info(name: &str) -> ApiRequest {
    ApiRequest {
        path: format!("{}/about.json", subreddit_path(name)),
        query: Vec::new(),
    }
}

/// `GET /r/{name}/{sort}.json`
pub fn subreddit_posts(
    name: &str,
    limit: u32,
    sort: PostSort,
    time: TimeFilter,
    after: Option<&str>,
) -> ApiRequest {
    let mut pairs = vec![
        ("limit", limit.to_string()),
        ("t", time.as_str().to_string()),
    ];
    push_after(&mut pairs, after);

    ApiRequest {
        path: format!("{}/{}.json", subreddit_path(name), sort.as_str()),
        query: pairs,
    }
}

/// `GET /r/{name}/comments/{id}.json`
pub fn post_comments(subreddit: &str, post_id: &str, limit: u32) -> ApiRequest {
    let post_id = post_id.trim_start_matches("t3_");
    ApiRequest {
        path: format!(
            "{}/comments/{}.json",
            subreddit_path(subreddit),
            urlencoding::encode(post_id)
        ),
        query: vec![("limit", limit.to_string())],
    }
}

/// `GET /r/{name}/search.json` restricted to the subreddit
pub fn search_subreddit(
    name: &str,
    query: &str,
    limit: u32,
    sort: SearchSort,
    time: TimeFilter,
    after: Option<&str>,
) -> ApiRequest {
    let mut pairs = vec![
        ("q", query.to_string()),
        ("restrict_sr", "on".to_string()),
        ("limit", limit.to_string()),
        ("sort", sort.as_str().to_string()),
        ("t", time.as_str().to_string()),
    ];
    push_after(&mut pairs, after);

    ApiRequest {
        path: format!("{}/search.json", subreddit_path(name)),
        query: pairs,
    }
}
