//! Grading-criteria HTTP client library
//!
//! Fetches the grading criteria of a course from the grading API and turns every
//! failure into a single [`ApiError`] whose message can be shown to a user as-is.
//!
//! # Features
//!
//! - Course id validation before any request is made
//! - Async fetching via reqwest with rustls (no OpenSSL dependencies)
//! - Pluggable transport through the [`HttpTransport`] trait
//! - Optional bearer authentication
//! - Well-typed errors using thiserror
//!
//! # Example
//!
//! ```no_run
//! use gc_http_client::{ApiError, GradingClient};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GradingClient::builder()
//!     .base_url("https://lms.example.edu/api")?
//!     .build()?;
//!
//! match client.fetch_grading_criteria("42").await {
//!     Ok(items) => println!("{} grading criteria", items.len()),
//!     Err(ApiError::Validation { message }) => eprintln!("bad input: {}", message),
//!     Err(e) => eprintln!("{}", e),
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod model;
mod transport;

pub use client::{GradingClient, GradingClientBuilder};
pub use error::{
    ApiError, COURSE_ID_REQUIRED, ClientInitError, FETCH_FAILED, TransportError,
    UNEXPECTED_FAILURE,
};
pub use model::{CourseId, CriteriaHead, GradingCriteriaItem};
pub use transport::{HttpTransport, ReqwestTransport, TransportResponse};
