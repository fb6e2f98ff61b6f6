//! Thin HTTP client for the review analysis backend.
//!
//! Every endpoint answers with the same `{success, data, error}` envelope;
//! this module issues the requests and unwraps that envelope into
//! `Result<T, ApiError>`.

use gloo_net::http::Request;
use leptos::logging::log;
use serde::Deserialize;
use thiserror::Error;

use crate::models::review::{Review, ReviewRequest, Sentiment};

const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Base URL of the backend, overridable at compile time via `REVIEW_API_BASE`.
pub fn api_base() -> &'static str {
    option_env!("REVIEW_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// Failure modes of a backend call, reduced to a display string by the UI.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered `success: false` with an error string.
    #[error("{0}")]
    Backend(String),
    /// The backend answered `success: false` without saying why.
    #[error("the server rejected the request")]
    Rejected,
    /// The request never completed.
    #[error("{0}")]
    Transport(String),
    /// The response body was not a valid envelope.
    #[error("unexpected response from server")]
    Decode(String),
}

impl ApiError {
    /// Reduces the error to a user-facing message, preferring the
    /// backend-reported string, then the transport message, then `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Backend(message) | ApiError::Transport(message)
                if !message.is_empty() =>
            {
                message.clone()
            }
            _ => fallback.to_string(),
        }
    }
}

#[derive(Deserialize, Debug)]
struct Envelope<T> {
    success: bool,
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    count: Option<usize>,
}

impl<T> Envelope<T> {
    fn into_result(self) -> Result<T, ApiError> {
        match self {
            Envelope {
                success: true,
                data: Some(data),
                ..
            } => Ok(data),
            Envelope {
                error: Some(error), ..
            } => Err(ApiError::Backend(error)),
            _ => Err(ApiError::Rejected),
        }
    }
}

/// Fetches the most recent analyzed reviews, newest first.
///
/// `sentiment` narrows the listing server-side when set.
pub async fn fetch_reviews(
    limit: usize,
    sentiment: Option<Sentiment>,
) -> Result<Vec<Review>, ApiError> {
    let mut url = format!("{}/reviews?limit={}", api_base(), limit);
    if let Some(sentiment) = sentiment {
        url.push_str("&sentiment=");
        url.push_str(&urlencoding::encode(sentiment.as_param()));
    }
    log!("[API] GET {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))?;
    let envelope: Envelope<Vec<Review>> = response
        .json()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    if let Some(count) = envelope.count {
        log!("[API] backend reports {} matching reviews", count);
    }
    envelope.into_result()
}

/// Submits a review for analysis and returns the stored, annotated result.
pub async fn analyze_review(request: &ReviewRequest) -> Result<Review, ApiError> {
    let url = format!("{}/analyze-review", api_base());
    log!("[API] POST {} ({})", url, request.product_name);

    let response = Request::post(&url)
        .json(request)
        .map_err(|err| ApiError::Transport(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))?;
    let envelope: Envelope<Review> = response
        .json()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    if let Some(message) = &envelope.message {
        log!("[API] {}", message);
    }
    envelope.into_result()
}
