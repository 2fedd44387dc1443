use serde_json::{Map, Value};

use crate::error::{FollowMeeError, Result};

/// `Error` message the service uses for queries that matched nothing.
/// Treated as an empty result, never a failure.
pub const NO_DATA_SENTINEL: &str = "No data returned for your query";

/// Normalized result of one HTTP call
#[derive(Debug, Clone)]
pub struct Envelope {
    /// HTTP status code
    pub status_code: u16,

    /// Human-readable reason phrase
    pub message: String,

    /// Decoded JSON body
    pub data: Value,
}

impl Envelope {
    /// Create an envelope from a decoded response
    #[must_use]
    pub fn new(status_code: u16, message: impl Into<String>, data: Value) -> Self {
        Self {
            status_code,
            message: message.into(),
            data,
        }
    }

    /// Interpret the body and map its `Data` array into typed records.
    ///
    /// A body carrying an `Error` string fails with that message, except for
    /// the no-data sentinel which yields an empty `Vec`. Otherwise each
    /// element of the `Data` array is handed to `parse` in original order;
    /// the first record that fails to parse aborts the whole call.
    pub fn into_records<T, F>(self, parse: F) -> Result<Vec<T>>
    where
        F: Fn(Map<String, Value>) -> Result<T>,
    {
        let Value::Object(mut body) = self.data else {
            return Err(FollowMeeError::Payload(
                "response body is not a JSON object".into(),
            ));
        };

        if let Some(error) = body.get("Error") {
            let message = error.as_str().ok_or_else(|| {
                FollowMeeError::Payload("`Error` value is not a string".into())
            })?;
            if message.contains(NO_DATA_SENTINEL) {
                return Ok(Vec::new());
            }
            return Err(FollowMeeError::Api(message.to_string()));
        }

        let Some(data) = body.remove("Data") else {
            return Err(FollowMeeError::Payload("missing `Data` array".into()));
        };
        let Value::Array(items) = data else {
            return Err(FollowMeeError::Payload("`Data` is not an array".into()));
        };

        items
            .into_iter()
            .map(|item| match item {
                Value::Object(fields) => parse(fields),
                other => Err(FollowMeeError::Payload(format!(
                    "`Data` element is not an object: {other}"
                ))),
            })
            .collect()
    }
}
