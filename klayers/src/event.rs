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
//! Step Functions status-change events and the handler's response.
//!
//! EventBridge delivers one event per execution status change:
//! <https://docs.aws.amazon.com/step-functions/latest/dg/cw-events.html>
//!
//! ```json
//! {
//!     "detail-type": "Step Functions Execution Status Change",
//!     "source": "aws.states",
//!     "detail": {
//!         "executionArn": "arn:aws:states:ap-southeast-1:123456789012:execution:pipeline:test-1",
//!         "name": "test-1",
//!         "status": "FAILED",
//!         "input": "{\"package\": \"requests\"}"
//!     }
//! }
//! ```

use crate::error::{KlayersError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The status of a Step Functions execution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExecutionStatus {
    /// The execution has not stopped yet.
    Running,
    /// The execution completed.
    Succeeded,
    /// The execution stopped with an error.
    Failed,
    /// The execution ran past its timeout.
    TimedOut,
    /// The execution was stopped by a caller.
    Aborted,
    /// Any status this crate does not know about, kept verbatim.
    Unknown(String),
}

impl ExecutionStatus {
    /// Returns the status as it appears on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            ExecutionStatus::Running => "RUNNING",
            ExecutionStatus::Succeeded => "SUCCEEDED",
            ExecutionStatus::Failed => "FAILED",
            ExecutionStatus::TimedOut => "TIMED_OUT",
            ExecutionStatus::Aborted => "ABORTED",
            ExecutionStatus::Unknown(s) => s,
        }
    }

    /// Returns true if the execution stopped without succeeding.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            ExecutionStatus::Failed | ExecutionStatus::TimedOut | ExecutionStatus::Aborted
        )
    }
}

impl From<String> for ExecutionStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "RUNNING" => ExecutionStatus::Running,
            "SUCCEEDED" => ExecutionStatus::Succeeded,
            "FAILED" => ExecutionStatus::Failed,
            "TIMED_OUT" => ExecutionStatus::TimedOut,
            "ABORTED" => ExecutionStatus::Aborted,
            _ => ExecutionStatus::Unknown(s),
        }
    }
}

impl From<&str> for ExecutionStatus {
    fn from(s: &str) -> Self {
        ExecutionStatus::from(s.to_string())
    }
}

impl From<ExecutionStatus> for String {
    fn from(status: ExecutionStatus) -> Self {
        status.as_str().to_string()
    }
}

impl Display for ExecutionStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An EventBridge event emitted by Step Functions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusEvent {
    /// The event id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id:          Option<String>,
    /// Always `Step Functions Execution Status Change` for these events.
    #[serde(rename = "detail-type", default, skip_serializing_if = "Option::is_none")]
    pub detail_type: Option<String>,
    /// Always `aws.states` for these events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source:      Option<String>,
    /// When the status changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time:        Option<String>,
    /// The execution that changed status.
    #[serde(default)]
    pub detail:      StatusDetail,
}

/// The `detail` section of a [`StatusEvent`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDetail {
    /// The execution ARN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_arn:     Option<String>,
    /// The state machine ARN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_machine_arn: Option<String>,
    /// The execution name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name:              Option<String>,
    /// The new status of the execution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status:            Option<ExecutionStatus>,
    /// The execution input, itself a JSON document serialized as a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input:             Option<String>,
}

impl StatusDetail {
    /// Returns the status, failing if the event carries none.
    pub fn require_status(&self) -> Result<&ExecutionStatus> {
        self.status
            .as_ref()
            .ok_or_else(|| KlayersError::InvalidEvent("missing field `detail.status`".to_string()))
    }

    /// Decodes the nested execution input.
    pub fn pipeline_input(&self) -> Result<PipelineInput> {
        let input = self
            .input
            .as_deref()
            .ok_or_else(|| KlayersError::InvalidEvent("missing field `detail.input`".to_string()))?;
        serde_json::from_str(input)
            .map_err(|e| KlayersError::InvalidEvent(format!("`detail.input`: {}", e)))
    }
}

/// The input the build pipeline is started with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineInput {
    /// The Python package the layer is built for.
    pub package: String,
}

impl PipelineInput {
    /// Creates the input for a package.
    pub fn new(package: impl Into<String>) -> Self {
        PipelineInput {
            package: package.into(),
        }
    }
}

/// The outcome of posting a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostStatus {
    /// Slack acknowledged the message.
    Success,
    /// Slack refused the message.
    Failed,
}

impl Display for PostStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PostStatus::Success => write!(f, "Success"),
            PostStatus::Failed => write!(f, "Failed"),
        }
    }
}

/// The response returned to the invoking event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationResult {
    /// Whether the notification was delivered.
    pub status: PostStatus,
}

impl From<PostStatus> for NotificationResult {
    fn from(status: PostStatus) -> Self {
        NotificationResult { status }
    }
}
