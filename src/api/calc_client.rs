use crate::api::endpoint::Endpoint;
use crate::api::error::ClientError;
use crate::api::results::{CalcResults, ResultsEnvelope};
use crate::api::traits::CalcApi;
use crate::config::ClientConfig;
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use log::debug;
use reqwest::Url;
use reqwest::blocking::Client;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct DateRequest<'a> {
    date: &'a str,
}

/// Blocking HTTP client for the calendar-calculation service.
pub struct CalcClient {
    client: Client,
    base_url: Url,
}

impl fmt::Debug for CalcClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalcClient")
            .field("base_url", &self.base_url.as_str())
            .field("client", &"reqwest::blocking::Client")
            .finish()
    }
}

impl CalcClient {
    pub fn new(
        base_url: &str,
        user_agent: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let mut url = base_url.to_string();
        if !url.ends_with('/') {
            url.push('/');
        }
        let base_url = Url::parse(&url).map_err(|err| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: err.to_string(),
        })?;

        let mut builder = Client::builder().user_agent(user_agent.to_string());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, ClientError> {
        self.base_url
            .join(endpoint.path())
            .map_err(|err| ClientError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: err.to_string(),
            })
    }
}

impl CalcApi for CalcClient {
    /// Posts `{"date": date}` to `endpoint` and returns the `results` object.
    ///
    /// The body is read as JSON whatever the HTTP status is. The service answers
    /// bad input with a 400 that still carries `results` (with `ErrorFlag` and
    /// `ErrorText` filled in), and those are returned as `Ok`.
    ///
    /// # Errors
    ///
    /// * [`ClientError::Request`] if the request cannot be sent or the body cannot be read.
    /// * [`ClientError::Decode`] if the body is not JSON.
    /// * [`ClientError::MissingResults`] if the JSON has no `results` object.
    fn calculate(&self, endpoint: Endpoint, date: &str) -> Result<CalcResults, ClientError> {
        let url = self.endpoint_url(endpoint)?;
        debug!("POST {url} with date '{date}'");

        let response = self
            .client
            .post(url)
            .json(&DateRequest { date })
            .send()?;

        debug!("{endpoint} answered with status {}", response.status());
        let body = response.text()?;

        let envelope: ResultsEnvelope = serde_json::from_str(&body)
            .map_err(|source| ClientError::Decode { endpoint, source })?;

        envelope
            .results
            .ok_or(ClientError::MissingResults(endpoint))
    }
}

impl TryFrom<&ClientConfig> for CalcClient {
    type Error = ClientError;

    fn try_from(config: &ClientConfig) -> Result<Self, Self::Error> {
        CalcClient::new(
            &config.base_url,
            &config.user_agent,
            config.timeout_secs.map(Duration::from_secs),
        )
    }
}

impl Default for CalcClient {
    fn default() -> Self {
        CalcClient::new(DEFAULT_BASE_URL, DEFAULT_USER_AGENT, None)
            .expect("default base url is valid")
    }
}
