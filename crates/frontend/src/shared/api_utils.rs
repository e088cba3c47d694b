//! API utilities for frontend-backend communication
//!
//! URL construction plus thin gloo-net wrappers. Every helper returns
//! `Result<_, String>`; pages turn the error into a user-facing message
//! with `get_error_message`.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/tasks/123");
/// ```
pub fn api_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!("{}{}", api_base(), path)
}

/// Append `key=value` pairs to a path, URL-encoding the values
pub fn with_query(path: &str, params: &[(String, String)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect();
    let sep = if path.contains('?') { '&' } else { '?' };
    format!("{}{}{}", path, sep, query.join("&"))
}

async fn check(response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if body.trim().is_empty() {
        Err(format!("HTTP {}", status))
    } else {
        Err(format!("HTTP {}: {}", status, body))
    }
}

/// GET a JSON document
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check(response)
        .await?
        .json()
        .await
        .map_err(|e| e.to_string())
}

/// POST a JSON body and decode the JSON reply
pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check(response)
        .await?
        .json()
        .await
        .map_err(|e| e.to_string())
}

/// PUT a JSON body and decode the JSON reply
pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = Request::put(&api_url(path))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check(response)
        .await?
        .json()
        .await
        .map_err(|e| e.to_string())
}

/// Send a request whose reply body is ignored
pub async fn send_empty(method: &str, path: &str, body: Option<&serde_json::Value>) -> Result<(), String> {
    let url = api_url(path);
    let builder = match method {
        "POST" => Request::post(&url),
        "PUT" => Request::put(&url),
        "PATCH" => Request::patch(&url),
        "DELETE" => Request::delete(&url),
        _ => Request::get(&url),
    };
    let response = match body {
        Some(body) => builder
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?,
        None => builder.send().await.map_err(|e| e.to_string())?,
    };
    check(response).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_values_are_encoded() {
        let params = vec![("company_id".to_string(), "a b&c".to_string())];
        assert_eq!(with_query("/e/contacts", &params), "/e/contacts?company_id=a%20b%26c");
        assert_eq!(with_query("/e/contacts?x=1", &params), "/e/contacts?x=1&company_id=a%20b%26c");
        assert_eq!(with_query("/e/contacts", &[]), "/e/contacts");
    }

    #[test]
    fn absolute_urls_pass_through() {
        assert_eq!(api_url("https://maps.example.com/x"), "https://maps.example.com/x");
    }
}
