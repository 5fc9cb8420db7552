//! HTTP API Wrappers
//!
//! Frontend bindings to the `/items` REST endpoints.

mod item;

use serde::de::DeserializeOwned;

pub use item::*;

/// API origin: `TODO_API_BASE` at build time, else the page's own origin
fn base_url() -> String {
    if let Some(base) = option_env!("TODO_API_BASE") {
        return base.to_string();
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

fn endpoint(path: &str) -> String {
    join_url(&base_url(), path)
}

/// Turn a non-2xx response into `Err("<status>: <body>")`
async fn check(response: reqwest::Response) -> Result<reqwest::Response, String> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(format!("{}: {}", status, body))
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, String> {
    check(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| format!("Response error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://localhost:3000", "/items"), "http://localhost:3000/items");
        assert_eq!(join_url("http://localhost:3000/", "items/abc"), "http://localhost:3000/items/abc");
        assert_eq!(join_url("", "/items"), "/items");
    }
}
