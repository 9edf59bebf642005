//! Timestamp parsing for request bodies.

use jiff::Timestamp;
use salvo::prelude::StatusError;

use crate::extensions::*;

/// Parse RFC 3339 request fields, rejecting malformed values with `400`.
pub(crate) trait TimestampExt {
    type Output;

    fn into_timestamp(self, field: &str) -> Result<Self::Output, StatusError>;
}

impl TimestampExt for String {
    type Output = Timestamp;

    fn into_timestamp(self, field: &str) -> Result<Timestamp, StatusError> {
        self.parse::<Timestamp>()
            .or_400(&format!("could not parse \"{field}\" timestamp"))
    }
}

impl TimestampExt for Option<String> {
    type Output = Option<Timestamp>;

    fn into_timestamp(self, field: &str) -> Result<Option<Timestamp>, StatusError> {
        self.map(|value| value.into_timestamp(field)).transpose()
    }
}
