//! Property-based tests for grading-criteria fetching
//!
//! Runs the client against an in-memory transport so no network is involved.

use gc_http_client::{
    ApiError, COURSE_ID_REQUIRED, CourseId, FETCH_FAILED, GradingClient, HttpTransport,
    TransportError, TransportResponse, UNEXPECTED_FAILURE,
};
use proptest::prelude::*;
use reqwest::StatusCode;
use std::sync::atomic::{AtomicUsize, Ordering};

/// What the scripted transport answers with
#[derive(Debug, Clone)]
enum Script {
    Body(String),
    Status(u16, Option<String>),
    Fault,
}

struct ScriptedTransport {
    script: Script,
    calls: AtomicUsize,
}

impl ScriptedTransport {
    fn new(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
        }
    }
}

impl HttpTransport for ScriptedTransport {
    async fn get(&self, _segments: &[&str]) -> Result<TransportResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Body(body) => Ok(TransportResponse {
                status: StatusCode::OK,
                data: body.clone().into_bytes(),
            }),
            Script::Status(code, message) => Err(TransportError::Status {
                status: StatusCode::from_u16(*code).unwrap(),
                message: message.clone(),
            }),
            Script::Fault => Err(TransportError::Other("runtime fault".into())),
        }
    }
}

fn fetch(
    script: Script,
    id: CourseId,
) -> (Result<Vec<gc_http_client::GradingCriteriaItem>, ApiError>, usize) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let client = GradingClient::with_transport(ScriptedTransport::new(script));
    let result = runtime.block_on(client.fetch_grading_criteria(id));
    (result, client.transport().calls.load(Ordering::SeqCst))
}

fn any_script() -> impl Strategy<Value = Script> {
    prop_oneof![
        Just(Script::Body("[]".to_string())),
        (400u16..600, proptest::option::of("[A-Za-z ]{1,20}"))
            .prop_map(|(code, message)| Script::Status(code, message)),
        Just(Script::Fault),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Validation wins over whatever the transport would have done
    #[test]
    fn prop_missing_id_is_rejected_without_request(
        script in any_script(),
        id in prop_oneof![
            "[ \t]{0,6}".prop_map(CourseId::from),
            Just(CourseId::Numeric(0)),
        ],
    ) {
        let (result, calls) = fetch(script, id);
        prop_assert_eq!(result, Err(ApiError::validation(COURSE_ID_REQUIRED)));
        prop_assert_eq!(calls, 0);
    }

    /// A decodable body comes back unchanged
    #[test]
    fn prop_success_is_pass_through(
        titles in prop::collection::vec(prop::collection::vec("[a-z]{1,8}", 0..4), 0..4),
        id in 1i64..100_000,
    ) {
        let body = serde_json::Value::Array(
            titles
                .iter()
                .map(|heads| {
                    serde_json::json!({
                        "criteria_heads": heads
                            .iter()
                            .map(|t| serde_json::json!({ "title": t }))
                            .collect::<Vec<_>>()
                    })
                })
                .collect(),
        );

        let (result, calls) = fetch(Script::Body(body.to_string()), CourseId::from(id));
        let items = result.unwrap();

        prop_assert_eq!(serde_json::to_value(&items).unwrap(), body);
        prop_assert_eq!(calls, 1);
    }

    /// Status failures keep the server message or fall back to the default
    #[test]
    fn prop_status_failure_message(
        code in 400u16..600,
        message in proptest::option::of("[A-Za-z][A-Za-z ]{0,20}"),
    ) {
        let (result, _) = fetch(Script::Status(code, message.clone()), CourseId::from("42"));
        let err = result.unwrap_err();

        prop_assert_eq!(err.message(), message.as_deref().unwrap_or(FETCH_FAILED));
        let is_transport = matches!(err, ApiError::Transport { .. });
        prop_assert!(is_transport);
    }
}

#[test]
fn test_not_found_message_pass_through() {
    let (result, calls) = fetch(
        Script::Status(404, Some("Not Found".to_string())),
        CourseId::from("42"),
    );
    assert_eq!(result.unwrap_err().to_string(), "Not Found");
    assert_eq!(calls, 1);
}

#[test]
fn test_fault_maps_to_generic_message() {
    let (result, calls) = fetch(Script::Fault, CourseId::from("42"));
    assert_eq!(result, Err(ApiError::unknown(UNEXPECTED_FAILURE)));
    assert_eq!(calls, 1);
}
