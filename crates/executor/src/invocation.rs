//! Host invocation envelope.
//!
//! Hosts deliver an invocation as a flat argument list whose first element is
//! the function name, serialized as `{"Args": ["createEntry", "CAR5", ...]}`.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One invocation as delivered by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    /// Function name followed by its parameters
    #[serde(rename = "Args")]
    pub args: Vec<String>,
}

impl Invocation {
    /// Build an invocation from a function name and its parameters.
    pub fn new(function: &str, params: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut args = vec![function.to_string()];
        args.extend(params.into_iter().map(Into::into));
        Invocation { args }
    }

    /// Parse the JSON envelope.
    ///
    /// # Errors
    ///
    /// Returns `Error::Serialization` if the text is not an envelope.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Split into function name and parameters.
    ///
    /// An empty argument list yields an empty function name.
    pub fn function_and_parameters(&self) -> (&str, &[String]) {
        match self.args.split_first() {
            Some((function, params)) => (function.as_str(), params),
            None => ("", &[]),
        }
    }
}

impl TryFrom<&str> for Invocation {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self> {
        Invocation::from_json(text)
    }
}
