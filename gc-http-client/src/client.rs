//! Grading-criteria client implementation

use crate::error::{
    ApiError, COURSE_ID_REQUIRED, ClientInitError, FETCH_FAILED, TransportError,
    UNEXPECTED_FAILURE,
};
use crate::model::{CourseId, GradingCriteriaItem};
use crate::transport::{HttpTransport, ReqwestTransport};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use tracing::{debug, warn};
use zeroize::Zeroize;

/// Client for the grading-criteria API
///
/// The client owns its transport; nothing is shared globally. Use
/// [`GradingClient::builder`] for the reqwest-backed client or
/// [`GradingClient::with_transport`] to supply another transport.
///
/// # Example
///
/// ```no_run
/// use gc_http_client::GradingClient;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GradingClient::new("https://lms.example.edu/api")?;
///
/// let items = client.fetch_grading_criteria(42u64).await?;
/// for item in &items {
///     println!("{} criteria", item.criteria_heads.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct GradingClient<T = ReqwestTransport> {
    transport: T,
}

impl GradingClient<ReqwestTransport> {
    /// Create a client with default HTTP settings
    ///
    /// # Errors
    ///
    /// Returns `ClientInitError` if the URL is invalid or the HTTP client cannot be built.
    pub fn new(base_url: impl reqwest::IntoUrl) -> Result<Self, ClientInitError> {
        Self::builder().base_url(base_url)?.build()
    }

    /// Create a builder for configuring the client
    pub fn builder() -> GradingClientBuilder {
        GradingClientBuilder::new()
    }
}

impl<T: HttpTransport> GradingClient<T> {
    /// Create a client on top of an existing transport
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch all grading criteria of a course
    ///
    /// Issues a single `GET /courses/gc/{id}/all` and returns the decoded body unchanged.
    ///
    /// # Errors
    ///
    /// * `ApiError::Validation` - `id` is empty or zero; no request is made
    /// * `ApiError::Transport` - non-success status or network failure. The message is
    ///   the server's when it sent one, otherwise "Failed to fetch grading criteria"
    /// * `ApiError::Unknown` - any other failure, including a body of the wrong shape
    pub async fn fetch_grading_criteria(
        &self,
        id: impl Into<CourseId>,
    ) -> Result<Vec<GradingCriteriaItem>, ApiError> {
        let id = id.into();
        if !id.is_present() {
            return Err(ApiError::validation(COURSE_ID_REQUIRED));
        }

        let segment = id.to_string();
        debug!(course_id = %id, "fetching grading criteria");

        let response = self
            .transport
            .get(&["courses", "gc", &segment, "all"])
            .await
            .map_err(|e| classify_failure(&id, e))?;

        let items: Vec<GradingCriteriaItem> =
            serde_json::from_slice(&response.data).map_err(|e| {
                warn!(course_id = %id, error = %e, "grading criteria response did not decode");
                ApiError::unknown(UNEXPECTED_FAILURE)
            })?;

        debug!(course_id = %id, items = items.len(), "fetched grading criteria");
        Ok(items)
    }
}

/// Normalize a transport failure into the domain error
fn classify_failure(id: &CourseId, error: TransportError) -> ApiError {
    if error.is_transport() {
        warn!(course_id = %id, error = %error, "grading criteria request failed");
        ApiError::from_transport(&error, FETCH_FAILED)
    } else {
        warn!(course_id = %id, error = %error, "unexpected failure fetching grading criteria");
        ApiError::unknown(UNEXPECTED_FAILURE)
    }
}

/// Builder for a reqwest-backed [`GradingClient`]
///
/// # Example
///
/// ```no_run
/// use gc_http_client::GradingClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GradingClient::builder()
///     .base_url("http://localhost:1234")?
///     .bearer_token("secret")?
///     .client_builder(
///         reqwest::Client::builder()
///             .timeout(Duration::from_secs(10))
///     )
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct GradingClientBuilder {
    base_url: Option<reqwest::Url>,
    client_builder: Option<reqwest::ClientBuilder>,
    authorization: Option<HeaderValue>,
}

impl GradingClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL
    ///
    /// The URL is parsed and validated here. Any path it carries is kept as a prefix.
    ///
    /// # Errors
    ///
    /// Returns `ClientInitError::InvalidBaseUrl` if the URL cannot be parsed.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, ClientInitError> {
        let url = url
            .into_url()
            .map_err(|e| ClientInitError::InvalidBaseUrl(e.to_string()))?;
        self.base_url = Some(url);
        Ok(self)
    }

    /// Set a custom HTTP client builder (timeouts, proxies, ...)
    pub fn client_builder(mut self, builder: reqwest::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Send `Authorization: Bearer <token>` with every request
    ///
    /// The header is marked sensitive and the temporary string is zeroized.
    ///
    /// # Errors
    ///
    /// Returns `ClientInitError::InvalidToken` if the token is not a valid header value.
    pub fn bearer_token(mut self, token: &str) -> Result<Self, ClientInitError> {
        let mut header_string = format!("Bearer {}", token);
        let header_value = HeaderValue::from_bytes(header_string.as_bytes());
        header_string.zeroize();

        let mut header_value = header_value.map_err(|_| ClientInitError::InvalidToken)?;
        header_value.set_sensitive(true);
        self.authorization = Some(header_value);
        Ok(self)
    }

    /// Build the client
    ///
    /// # Errors
    ///
    /// Returns an error if no base URL was set or the HTTP client cannot be initialized.
    pub fn build(self) -> Result<GradingClient<ReqwestTransport>, ClientInitError> {
        let base_url = self.base_url.ok_or(ClientInitError::MissingBaseUrl)?;

        let mut builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::Client::builder().use_rustls_tls());

        if let Some(authorization) = self.authorization {
            let mut headers = HeaderMap::new();
            headers.insert(AUTHORIZATION, authorization);
            builder = builder.default_headers(headers);
        }

        let transport = ReqwestTransport::new(builder.build()?, base_url)?;
        Ok(GradingClient::with_transport(transport))
    }
}
