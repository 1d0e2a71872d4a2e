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
//! End-to-end runs of the layer-building pipeline.

use crate::aws::step_functions::{execute_state_machine, StateMachine};
use crate::error::Result;
use crate::event::{ExecutionStatus, PipelineInput};
use std::time::Duration;

/// Packages the pipeline is checked with, and the status each run must end
/// with. The last package does not exist on PyPI.
pub fn pipeline_scenarios() -> Vec<(&'static str, ExecutionStatus)> {
    vec![
        ("requests", ExecutionStatus::Succeeded),
        ("idna", ExecutionStatus::Succeeded),
        ("bad_package_sdakksdl231", ExecutionStatus::Failed),
    ]
}

/// Builds a layer for `package` and waits for the pipeline to stop.
pub async fn build_package(
    client: &dyn StateMachine,
    pipeline_arn: &str,
    package: &str,
    poll_interval: Duration,
) -> Result<ExecutionStatus> {
    let input = serde_json::to_string(&PipelineInput::new(package))?;
    execute_state_machine(client, pipeline_arn, &input, poll_interval).await
}
