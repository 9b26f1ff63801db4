use crate::api::endpoint::Endpoint;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Response from {endpoint} is not valid JSON: {source}")]
    Decode {
        endpoint: Endpoint,
        source: serde_json::Error,
    },
    #[error("Response from {0} has no 'results' object")]
    MissingResults(Endpoint),
    #[error("Invalid API base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
