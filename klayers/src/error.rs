// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

#![warn(missing_docs, clippy::needless_borrow)]
//! Klayers error types

use std::error;
use std::fmt::{Display, Formatter};
use std::io;
use std::result;

/// Result type for operations that could result in a [KlayersError]
pub type Result<T> = result::Result<T, KlayersError>;

/// Klayers error
#[derive(Debug)]
pub enum KlayersError {
    /// Error associated to Lambda runtime execution.
    LambdaError(Box<dyn std::error::Error + Send + Sync>),
    /// Error associated to I/O operations and associated traits.
    IoError(io::Error),
    /// Error returned when serde_json failed to serialize or deserialize data.
    SerdeJson(serde_json::Error),
    /// Error returned when the inbound status event is missing a field or
    /// carries a field that cannot be decoded.
    InvalidEvent(String),
    /// Error returned when the environment or the built-in settings are
    /// incomplete or malformed.
    Config(String),
    /// Error returned when the request to the Slack API could not be
    /// delivered or its response could not be read.
    Http(reqwest::Error),
    /// Error returned when accessing the AWS services fails.
    AWS(String),
    /// Error returned as a consequence of an error in Klayers.
    /// This error should not happen in normal usage.
    Internal(String),
}

impl From<io::Error> for KlayersError {
    fn from(e: io::Error) -> Self {
        KlayersError::IoError(e)
    }
}

impl From<serde_json::Error> for KlayersError {
    fn from(e: serde_json::Error) -> Self {
        KlayersError::SerdeJson(e)
    }
}

impl From<reqwest::Error> for KlayersError {
    fn from(e: reqwest::Error) -> Self {
        KlayersError::Http(e)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for KlayersError {
    fn from(e: Box<dyn std::error::Error + Send + Sync>) -> Self {
        KlayersError::LambdaError(e)
    }
}

impl From<&str> for KlayersError {
    fn from(e: &str) -> Self {
        KlayersError::Internal(e.to_string())
    }
}

impl Display for KlayersError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            KlayersError::LambdaError(ref desc) => write!(f, "Lambda error: {}", desc),
            KlayersError::IoError(ref desc) => write!(f, "IO error: {}", desc),
            KlayersError::SerdeJson(ref desc) => write!(f, "serde_json error: {:?}", desc),
            KlayersError::InvalidEvent(ref desc) => write!(f, "Invalid event: {}", desc),
            KlayersError::Config(ref desc) => write!(f, "Configuration error: {}", desc),
            KlayersError::Http(ref desc) => write!(f, "HTTP error: {}", desc),
            KlayersError::AWS(ref desc) => write!(f, "AWS error: {}", desc),
            KlayersError::Internal(ref desc) => write!(
                f,
                "Internal error: {}. This was likely caused by a bug in Klayers' \
                    code and we would welcome that you file an bug report in our issue tracker",
                desc
            ),
        }
    }
}

impl error::Error for KlayersError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = KlayersError::InvalidEvent("missing field `detail.status`".to_string());
        assert_eq!(err.to_string(), "Invalid event: missing field `detail.status`");

        let err = KlayersError::from("no executionArn");
        assert!(matches!(err, KlayersError::Internal(_)));
        assert!(err.to_string().starts_with("Internal error: no executionArn."));
    }

    #[test]
    fn serde_json_error_converts() {
        let result: Result<serde_json::Value> = serde_json::from_str("{").map_err(Into::into);
        assert!(matches!(result, Err(KlayersError::SerdeJson(_))));
    }
}
