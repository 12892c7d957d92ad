//! HTTP transport abstraction and the reqwest-backed implementation

use crate::error::{ClientInitError, TransportError};
use reqwest::{StatusCode, Url};
use std::future::Future;

/// A successful response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// Status code (always a success code)
    pub status: StatusCode,
    /// Raw response body
    pub data: Vec<u8>,
}

/// Performs GET requests against the API
///
/// [`GradingClient`](crate::GradingClient) only talks to the network through this trait,
/// so tests can plug in a fake.
pub trait HttpTransport {
    /// GET the resource at `segments`, relative to the transport's base URL
    ///
    /// Non-success statuses must be reported as [`TransportError::Status`].
    fn get(
        &self,
        segments: &[&str],
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}

/// Transport backed by a [`reqwest::Client`]
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestTransport {
    /// Create a transport issuing requests relative to `base_url`
    ///
    /// # Errors
    ///
    /// Returns `ClientInitError::InvalidBaseUrl` if the URL cannot have path segments
    /// appended (e.g. `mailto:` URLs).
    pub fn new(client: reqwest::Client, base_url: Url) -> Result<Self, ClientInitError> {
        if base_url.cannot_be_a_base() {
            return Err(ClientInitError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { client, base_url })
    }

    /// The configured base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the request URL, keeping any path prefix of the base URL
    fn endpoint(&self, segments: &[&str]) -> Result<Url, TransportError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TransportError::Other("Cannot modify base URL path".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl HttpTransport for ReqwestTransport {
    async fn get(&self, segments: &[&str]) -> Result<TransportResponse, TransportError> {
        let url = self.endpoint(segments)?;
        tracing::trace!(%url, "GET");

        let response = self.client.get(url).send().await.map_err(classify)?;
        let status = response.status();
        let data = response.bytes().await.map_err(classify)?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status,
                message: extract_message(&data),
            });
        }

        Ok(TransportResponse {
            status,
            data: data.to_vec(),
        })
    }
}

/// Split reqwest failures into network failures and request construction bugs
fn classify(error: reqwest::Error) -> TransportError {
    if error.is_builder() {
        TransportError::Other(Box::new(error))
    } else {
        TransportError::Network(error)
    }
}

/// Pull a human-readable message out of an error body
///
/// Looks for a non-empty `message`, `detail` or `error` string in a JSON object.
pub(crate) fn extract_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    let object = value.as_object()?;

    ["message", "detail", "error"]
        .iter()
        .filter_map(|key| object.get(*key)?.as_str())
        .map(str::trim)
        .find(|message| !message.is_empty())
        .map(str::to_string)
}
