use thiserror::Error as ThisError;

/// Model client errors.
#[derive(ThisError, Debug)]
pub enum Error {
    /// Transport error (connection, timeout, body read).
    #[error("error sending request: {0}")]
    LLMCallError(#[from] reqwest::Error),

    /// JSON encoding or decoding error.
    #[error("error decoding response JSON: {0}")]
    LLMJsonError(#[from] serde_json::Error),

    /// Non-success HTTP status, carries the raw body.
    #[error("provider responded with status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Response has an unexpected shape.
    #[error("failed to parse LLM response: {0}")]
    LLMResponseError(&'static str),

    /// Error object returned by the provider.
    #[error("LLM provider responded with error: {0}")]
    LLMErrorMessage(String),

    /// The response did not contain any choice.
    #[error("no choices received in response")]
    NoChoices,

    /// The first choice has no content.
    #[error("empty response received")]
    EmptyResponse,

}
