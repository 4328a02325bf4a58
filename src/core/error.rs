// src/core/error.rs

use thiserror::Error;

/// Everything that can go wrong between pressing Enter and drawing a response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure, or a body that was not the expected JSON.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("Server returned {status}: {message}")]
    Server { status: u16, message: String },

    #[error("Invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Could not read upload file: {0}")]
    Io(#[from] std::io::Error),

    /// The upload form was rejected before any request was made.
    #[error("Invalid upload: {0}")]
    InvalidForm(String),
}

impl ApiError {
    /// Builds a `Server` error from a failed response, preferring the `error`
    /// field of a JSON body over the raw text.
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());
        let message = serde_json::from_str::<super::models::ServerErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or(text);

        ApiError::Server { status, message }
    }
}
