use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// A single field value that is not in its permitted set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub value: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:?}", self.field, self.value)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("invalid year range {start}-{end}, valid years are {earliest}-{latest}")]
    Range {
        start: i32,
        end: i32,
        earliest: i32,
        latest: i32,
    },

    #[error("unbalanced partition: {starts} start years but {ends} end years")]
    UnbalancedPartition { starts: usize, ends: usize },

    #[error("year partition is empty, nothing to request")]
    EmptyPartition,

    #[error("values not allowed: {}", join_violations(.0))]
    Validation(Vec<Violation>),

    #[error("invalid area: {0}")]
    InvalidArea(String),

    #[error("unsupported combination: {0}")]
    UnsupportedCombination(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("no api key found (set CDSAPI_KEY or write ~/.cdsapirc)")]
    MissingCredentials,

    #[error("job {job_id} failed: {reason}")]
    JobFailed { job_id: String, reason: String },

    #[error("timed out: {0}")]
    Timeout(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
}

fn join_violations(vs: &[Violation]) -> String {
    vs.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
}
