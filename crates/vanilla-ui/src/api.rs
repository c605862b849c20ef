//! HTTP access to the posts endpoint

use tracing::{debug, warn};
use vanilla_core::Post;

use crate::error::{Result, UiError};

/// Parse a posts response body.
///
/// # Errors
/// Returns `UiError::Decode` if the body is not a JSON array of posts.
pub fn decode_posts(body: &str) -> Result<Vec<Post>> {
    serde_json::from_str(body).map_err(|e| UiError::Decode(e.to_string()))
}

/// GET `url` and decode the post list.
///
/// # Errors
/// Returns `UiError::Network` when the request fails, `UiError::HttpStatus`
/// for a non-2xx answer, and `UiError::Decode` for a malformed body.
pub async fn fetch_posts(url: &str) -> Result<Vec<Post>> {
    debug!(url, "fetching posts");
    let result = request_text(url).await.and_then(|body| decode_posts(&body));
    match &result {
        Ok(posts) => debug!(url, count = posts.len(), "posts fetched"),
        Err(e) => warn!(url, error = %e, "posts fetch failed"),
    }
    result
}

async fn request_text(url: &str) -> Result<String> {
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_net::http::Request;

        let response = Request::get(url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| UiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(UiError::HttpStatus {
                status: response.status(),
            });
        }
        response
            .text()
            .await
            .map_err(|e| UiError::Network(e.to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(UiError::Network(format!("no HTTP client outside the browser: {url}")))
    }
}
