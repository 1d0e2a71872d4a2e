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
//! Turns status events into Slack messages.

use crate::configs::KLAYERS_REPOSITORY;
use crate::error::Result;
use crate::event::{ExecutionStatus, StatusEvent};

/// A message ready to be posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// The Slack channel, e.g. `#buildstatus-default`.
    pub channel: String,
    /// The message text.
    pub text:    String,
}

impl Notification {
    /// Creates a notification for a channel.
    pub fn new(channel: impl Into<String>, text: impl Into<String>) -> Self {
        Notification {
            channel: channel.into(),
            text:    text.into(),
        }
    }
}

/// Formats the message for a failed run of the build pipeline.
///
/// The pipeline rule only forwards failure statuses, so the message is an
/// error whatever the status is. Both the status and the package named in the
/// execution input are required.
pub fn pipeline_error_message(event: &StatusEvent) -> Result<String> {
    let status = event.detail.require_status()?;
    let input = event.detail.pipeline_input()?;
    Ok(format!("ERROR: Building {} status: {}", input.package, status))
}

/// Formats the message for a run of the publish state machine.
pub fn publish_message(event: &StatusEvent) -> String {
    match &event.detail.status {
        Some(status) if status.is_failure() => {
            format!("ERROR: Publishing to Github failed with Status:{}", status)
        }
        Some(ExecutionStatus::Succeeded) => format!(
            "GOOD: Completed this week's build, posted to Github: {}",
            *KLAYERS_REPOSITORY
        ),
        _ => "ERROR: Unknown State of Publish".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KlayersError;
    use crate::event::StatusDetail;

    fn event(status: Option<&str>, input: Option<&str>) -> StatusEvent {
        StatusEvent {
            detail: StatusDetail {
                status: status.map(ExecutionStatus::from),
                input: input.map(str::to_string),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn publish_failures() {
        for status in ["TIMED_OUT", "ABORTED", "FAILED"] {
            let message = publish_message(&event(Some(status), None));
            assert!(message.contains("ERROR: Publishing to Github failed"));
            assert!(message.contains(status));
        }
    }

    #[test]
    fn publish_success() {
        assert_eq!(
            publish_message(&event(Some("SUCCEEDED"), None)),
            "GOOD: Completed this week's build, posted to Github: https://github.com/keithrozario/Klayers"
        );
    }

    #[test]
    fn publish_unknown_state() {
        for status in [Some("RUNNING"), Some("succeeded"), Some(""), None] {
            assert_eq!(
                publish_message(&event(status, None)),
                "ERROR: Unknown State of Publish"
            );
        }
    }

    #[test]
    fn pipeline_error() -> Result<()> {
        let message =
            pipeline_error_message(&event(Some("FAILED"), Some(r#"{"package": "requests"}"#)))?;
        assert_eq!(message, "ERROR: Building requests status: FAILED");

        // every status reads as an error
        let message =
            pipeline_error_message(&event(Some("SUCCEEDED"), Some(r#"{"package": "idna"}"#)))?;
        assert_eq!(message, "ERROR: Building idna status: SUCCEEDED");
        Ok(())
    }

    #[test]
    fn pipeline_error_requires_fields() {
        assert!(matches!(
            pipeline_error_message(&event(None, Some(r#"{"package": "requests"}"#))),
            Err(KlayersError::InvalidEvent(_))
        ));
        assert!(matches!(
            pipeline_error_message(&event(Some("FAILED"), None)),
            Err(KlayersError::InvalidEvent(_))
        ));
        assert!(matches!(
            pipeline_error_message(&event(Some("FAILED"), Some("requests"))),
            Err(KlayersError::InvalidEvent(_))
        ));
    }
}
