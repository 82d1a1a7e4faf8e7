//! Command results and invocation responses.
//!
//! Every command produces exactly one output type. [`Output`] is the typed
//! result of [`Executor::execute`](crate::Executor::execute); [`Response`] is
//! what an invocation hands back to the host, either a payload or a message.

use serde::{Deserialize, Serialize};

use crate::Error;

/// Successful command execution results.
///
/// | Command | Output |
/// |---------|--------|
/// | `QueryHouseAddress` | `Value` |
/// | `InitLedger`, `CreateEntry`, `ChangeTreeQuantity` | `Unit` |
/// | `QueryAllOwners` | `Json` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// No return value (writes)
    Unit,

    /// Raw stored bytes, `None` if the key was never written
    Value(Option<Vec<u8>>),

    /// A JSON document assembled by the executor
    Json(String),
}

impl Output {
    /// Flatten to the byte payload a host sees.
    ///
    /// `Unit` and a missing value both become an empty payload.
    pub fn into_payload(self) -> Vec<u8> {
        match self {
            Output::Unit | Output::Value(None) => Vec::new(),
            Output::Value(Some(bytes)) => bytes,
            Output::Json(text) => text.into_bytes(),
        }
    }
}

/// Status code of a successful response.
pub const STATUS_OK: i32 = 200;

/// Status code of a failed response.
pub const STATUS_ERROR: i32 = 500;

/// Outcome of one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    /// The operation succeeded; payload may be empty
    Success(Vec<u8>),
    /// The operation failed; message names the violated precondition or
    /// carries the underlying store error
    Failure(String),
}

impl Response {
    /// Successful response with a payload.
    pub fn success(payload: Vec<u8>) -> Self {
        Response::Success(payload)
    }

    /// Failed response with a message.
    pub fn failure(message: impl Into<String>) -> Self {
        Response::Failure(message.into())
    }

    /// Whether this is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success(_))
    }

    /// `STATUS_OK` or `STATUS_ERROR`.
    pub fn status(&self) -> i32 {
        match self {
            Response::Success(_) => STATUS_OK,
            Response::Failure(_) => STATUS_ERROR,
        }
    }

    /// Payload bytes, empty for failures.
    pub fn payload(&self) -> &[u8] {
        match self {
            Response::Success(payload) => payload,
            Response::Failure(_) => &[],
        }
    }

    /// Failure message, empty for successes.
    pub fn message(&self) -> &str {
        match self {
            Response::Success(_) => "",
            Response::Failure(message) => message,
        }
    }
}

impl From<crate::Result<Output>> for Response {
    fn from(result: crate::Result<Output>) -> Self {
        match result {
            Ok(output) => Response::success(output.into_payload()),
            Err(err) => Response::from(err),
        }
    }
}

impl From<Error> for Response {
    fn from(err: Error) -> Self {
        Response::failure(err.to_string())
    }
}
