//! Reporting fetch failures to the user

use crate::error::CliError;
use gc_http_client::{CourseId, GradingClient, GradingCriteriaItem, HttpTransport};

/// Shown for any failure that is not an API error
pub const GENERIC_FAILURE: &str = "An error occurred while fetching grading criteria.";

/// Fire-and-forget user notifications
pub trait Notifier {
    /// Show an error message
    fn error(&self, message: &str);
}

/// Prints notifications as a single line on stderr
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn error(&self, message: &str) {
        eprintln!("✗ {}", message);
    }
}

/// Fetch grading criteria, notifying the user on failure
///
/// Returns `None` after exactly one notification when the fetch failed.
pub async fn present_grading_criteria<T, N>(
    client: &GradingClient<T>,
    course_id: CourseId,
    notifier: &N,
) -> Option<Vec<GradingCriteriaItem>>
where
    T: HttpTransport,
    N: Notifier + ?Sized,
{
    match client.fetch_grading_criteria(course_id).await {
        Ok(items) => Some(items),
        Err(e) => {
            report_failure(&CliError::from(e), notifier);
            None
        }
    }
}

/// Notify the user about a failure
///
/// API errors carry a user-facing message; everything else gets a generic one.
pub fn report_failure<N: Notifier + ?Sized>(error: &CliError, notifier: &N) {
    match error {
        CliError::Api(api) => notifier.error(api.message()),
        other => {
            tracing::debug!(error = %other, "failure outside the API client");
            notifier.error(GENERIC_FAILURE);
        }
    }
}
