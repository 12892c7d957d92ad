//! Wire types for the grading-criteria API

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Identifier of a course
///
/// The API accepts either a textual or a numeric id in the request path.
/// An id is only usable when it is non-empty text or a non-zero number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CourseId {
    /// Textual id, sent as-is
    Text(String),
    /// Numeric id
    Numeric(i64),
}

impl CourseId {
    /// Whether this id may be sent to the API
    ///
    /// # Example
    ///
    /// ```
    /// use gc_http_client::CourseId;
    ///
    /// assert!(CourseId::from("cs-101").is_present());
    /// assert!(!CourseId::from("").is_present());
    /// assert!(!CourseId::from(0u64).is_present());
    /// ```
    pub fn is_present(&self) -> bool {
        match self {
            CourseId::Text(text) => !text.trim().is_empty(),
            CourseId::Numeric(n) => *n != 0,
        }
    }

    /// Parse a command-line value: canonical integers become numeric ids, anything else text
    ///
    /// The id always renders back exactly as given, so "007" or "+42" stay text.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.parse::<i64>() {
            Ok(n) if n.to_string() == raw => CourseId::Numeric(n),
            _ => CourseId::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseId::Text(text) => f.write_str(text),
            CourseId::Numeric(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for CourseId {
    fn from(value: &str) -> Self {
        CourseId::Text(value.to_string())
    }
}

impl From<String> for CourseId {
    fn from(value: String) -> Self {
        CourseId::Text(value)
    }
}

impl From<&String> for CourseId {
    fn from(value: &String) -> Self {
        CourseId::Text(value.clone())
    }
}

impl From<i64> for CourseId {
    fn from(value: i64) -> Self {
        CourseId::Numeric(value)
    }
}

impl From<u32> for CourseId {
    fn from(value: u32) -> Self {
        CourseId::Numeric(i64::from(value))
    }
}

impl From<u64> for CourseId {
    fn from(value: u64) -> Self {
        // Out of i64 range: keep the digits as text
        match i64::try_from(value) {
            Ok(n) => CourseId::Numeric(n),
            Err(_) => CourseId::Text(value.to_string()),
        }
    }
}

/// A single grading criterion
///
/// The API does not pin down its fields, so the JSON object is kept verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriteriaHead(Map<String, Value>);

impl CriteriaHead {
    /// Wrap a raw JSON object
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Look up a field by name
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// All fields of the criterion
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume into the raw JSON object
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// One entry of the `/courses/gc/{id}/all` response
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GradingCriteriaItem {
    /// Criteria heads in server order
    pub criteria_heads: Vec<CriteriaHead>,
    /// Fields other than `criteria_heads`, preserved untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
