use crate::prelude::{eprintln, *};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub const MCP_PATH: &str = "/mcp";

pub async fn run_http(options: super::cli::HttpOptions, global: crate::Global) -> Result<()> {
    let addr = format!("{}:{}", options.host, options.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    if global.verbose {
        eprintln!("MCP endpoint: POST http://{addr}{MCP_PATH}");
    }
    log::info!(
        "redditmcp {} running on http://{addr}{MCP_PATH}",
        env!("CARGO_PKG_VERSION")
    );

    axum::serve(listener, router(global))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

/// Streamable HTTP transport in JSON response mode.
///
/// Every JSON-RPC message is one `POST /mcp` and the answer is the response
/// body. Notifications are acknowledged with `202 Accepted` and no body.
fn router(global: crate::Global) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(MCP_PATH, post(mcp_handler))
        .layer(cors)
        .with_state(Arc::new(global))
}

async fn mcp_handler(State(global): State<Arc<crate::Global>>, body: String) -> Response {
    match super::handle_request(&body, &global).await {
        Some(response) if response.is_parse_error() => {
            (StatusCode::BAD_REQUEST, Json(response)).into_response()
        }
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reddit::client::tests::serve;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_tools_list_over_http() {
        let base = serve(router(crate::Global::default())).await;

        let response = reqwest::Client::new()
            .post(format!("{base}/mcp"))
            .json(&json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/list" }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["id"], 1);
        assert_eq!(body["result"]["tools"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_notification_is_accepted_without_body() {
        let base = serve(router(crate::Global::default())).await;

        let response = reqwest::Client::new()
            .post(format!("{base}/mcp"))
            .json(&json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::ACCEPTED);
        assert!(response.text().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_json_is_bad_request() {
        let base = serve(router(crate::Global::default())).await;

        let response = reqwest::Client::new()
            .post(format!("{base}/mcp"))
            .header("content-type", "application/json")
            .body("{not json")
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"]["code"], -32700);
    }

    #[tokio::test]
    async fn test_other_paths_are_not_found() {
        let base = serve(router(crate::Global::default())).await;

        let response = reqwest::Client::new()
            .get(format!("{base}/sse"))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_on_mcp_is_not_allowed() {
        let base = serve(router(crate::Global::default())).await;

        let response = reqwest::Client::new()
            .get(format!("{base}/mcp"))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::METHOD_NOT_ALLOWED);
    }
}
