use crate::api::endpoint::Endpoint;
use crate::api::error::ClientError;
use crate::api::results::CalcResults;

/// Anything that can answer a calculation request for a date string.
pub trait CalcApi: Send + Sync {
    fn calculate(&self, endpoint: Endpoint, date: &str) -> Result<CalcResults, ClientError>;
}
