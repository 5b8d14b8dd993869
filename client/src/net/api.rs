//! REST helpers for the community message backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since the board only loads
//! after hydration in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. A non-2xx response maps to
//! `RequestFailure::Status` so the view can surface the HTTP code; anything
//! that fails before a status is known maps to `RequestFailure::Transport`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Message, NewMessage};

/// Backend collection endpoint used when `BOOKBAZAAR_API_URL` is not set at
/// build time.
pub const DEFAULT_API_BASE_URL: &str = "https://book-bazaar-backend-nem0.onrender.com/api/messages";

/// Why a backend request did not produce a usable response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestFailure {
    /// The backend answered with a non-success status.
    #[error("{0}")]
    Status(u16),
    /// The request never produced a status (network, CORS, bad JSON).
    #[error("{0}")]
    Transport(String),
}

/// Resolved collection base URL, trimmed of whitespace and trailing `/`.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("BOOKBAZAAR_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

#[cfg(any(test, feature = "hydrate"))]
fn list_messages_endpoint(base: &str) -> String {
    format!("{base}/hello")
}

#[cfg(any(test, feature = "hydrate"))]
fn create_message_endpoint(base: &str) -> String {
    base.to_owned()
}

/// Any 2xx or 3xx status counts as success.
#[cfg(any(test, feature = "hydrate"))]
fn is_success_status(status: u16) -> bool {
    (200..400).contains(&status)
}

/// Fetch the full, backend-ordered message list via `GET <base>/hello`.
///
/// # Errors
///
/// Returns `RequestFailure::Status` on a non-success response and
/// `RequestFailure::Transport` if the request or body decoding fails.
pub async fn fetch_messages() -> Result<Vec<Message>, RequestFailure> {
    #[cfg(feature = "hydrate")]
    {
        let url = list_messages_endpoint(&api_base_url());
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| RequestFailure::Transport(e.to_string()))?;
        if !is_success_status(resp.status()) {
            return Err(RequestFailure::Status(resp.status()));
        }
        resp.json::<Vec<Message>>()
            .await
            .map_err(|e| RequestFailure::Transport(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(RequestFailure::Transport("not available on server".to_owned()))
    }
}

/// Create a message via `POST <base>` and return the stored record.
///
/// # Errors
///
/// Returns `RequestFailure::Status` on a non-success response and
/// `RequestFailure::Transport` if the request or body decoding fails.
pub async fn post_message(payload: &NewMessage) -> Result<Message, RequestFailure> {
    #[cfg(feature = "hydrate")]
    {
        let url = create_message_endpoint(&api_base_url());
        let resp = gloo_net::http::Request::post(&url)
            .json(payload)
            .map_err(|e| RequestFailure::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| RequestFailure::Transport(e.to_string()))?;
        if !is_success_status(resp.status()) {
            return Err(RequestFailure::Status(resp.status()));
        }
        let body: super::types::CreatedMessage = resp
            .json()
            .await
            .map_err(|e| RequestFailure::Transport(e.to_string()))?;
        Ok(body.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(RequestFailure::Transport("not available on server".to_owned()))
    }
}
