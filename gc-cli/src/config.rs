//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use crate::output::OutputMode;
use gc_http_client::{CourseId, GradingClient};
use std::time::Duration;
use zeroize::Zeroizing;

/// Resolved runtime configuration
pub struct Config {
    /// Course to fetch
    pub course_id: CourseId,
    /// API base URL
    pub base_url: String,
    /// Bearer token (zeroized on drop)
    pub token: Option<Zeroizing<String>>,
    /// Request timeout
    pub timeout: Option<Duration>,
    /// How successful results are printed
    pub output: OutputMode,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let base_url = args.base_url.trim().to_string();
        if base_url.is_empty() {
            return Err(CliError::Config("Base URL is required".to_string()));
        }

        let timeout = match args.timeout {
            Some(0) => {
                return Err(CliError::Config(
                    "Timeout must be at least one second".to_string(),
                ));
            }
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        let token = args
            .token
            .filter(|t| !t.is_empty())
            .map(Zeroizing::new);

        Ok(Config {
            course_id: CourseId::parse_lenient(args.course_id.trim()),
            base_url,
            token,
            timeout,
            output: OutputMode::from_flags(args.json, args.quiet),
        })
    }

    /// Build the API client described by this config
    pub fn build_client(&self) -> Result<GradingClient, CliError> {
        let mut http = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        let mut builder = GradingClient::builder()
            .base_url(self.base_url.as_str())?
            .client_builder(http);
        if let Some(token) = &self.token {
            builder = builder.bearer_token(token)?;
        }

        Ok(builder.build()?)
    }
}

/// Map `-v` occurrences to the default tracing filter
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "error",
        1 => "debug",
        _ => "trace",
    }
}
