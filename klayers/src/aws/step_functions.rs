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
//! This crate contains all wrapped functions of the AWS Step Functions
//! services.

use crate::error::{KlayersError, Result};
use crate::event::ExecutionStatus;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use log::info;
use rusoto_stepfunctions::{
    DescribeExecutionInput, StartExecutionInput, StepFunctions, StepFunctionsClient,
};
use std::time::Duration;

/// A service that runs state machine executions.
#[async_trait]
pub trait StateMachine: Send + Sync {
    /// Starts an execution and returns its ARN.
    async fn start_execution(
        &self,
        state_machine_arn: &str,
        name: &str,
        input: &str,
    ) -> Result<String>;

    /// Returns the current status of an execution.
    async fn describe_execution(&self, execution_arn: &str) -> Result<ExecutionStatus>;
}

#[async_trait]
impl StateMachine for StepFunctionsClient {
    async fn start_execution(
        &self,
        state_machine_arn: &str,
        name: &str,
        input: &str,
    ) -> Result<String> {
        let response = StepFunctions::start_execution(
            self,
            StartExecutionInput {
                state_machine_arn: state_machine_arn.to_owned(),
                name: Some(name.to_owned()),
                input: Some(input.to_owned()),
                ..Default::default()
            },
        )
        .await
        .map_err(|e| KlayersError::AWS(e.to_string()))?;
        Ok(response.execution_arn)
    }

    async fn describe_execution(&self, execution_arn: &str) -> Result<ExecutionStatus> {
        let response = StepFunctions::describe_execution(
            self,
            DescribeExecutionInput {
                execution_arn: execution_arn.to_owned(),
            },
        )
        .await
        .map_err(|e| KlayersError::AWS(e.to_string()))?;
        Ok(ExecutionStatus::from(response.status))
    }
}

/// Returns a unique execution name such as `test-2021-03-01T093015`.
pub fn execution_name(now: DateTime<Local>) -> String {
    format!("test-{}", now.format("%Y-%m-%dT%H%M%S"))
}

/// Runs a state machine to completion.
///
/// # Arguments
/// * `client` - The Step Functions service.
/// * `state_machine_arn` - The ARN of the state machine to run.
/// * `input` - The execution input, a JSON document.
/// * `poll_interval` - The wait between two status checks.
///
/// # Returns
/// The status the execution stopped with: `SUCCEEDED`, `FAILED`, `TIMED_OUT`
/// or `ABORTED`.
pub async fn execute_state_machine(
    client: &dyn StateMachine,
    state_machine_arn: &str,
    input: &str,
    poll_interval: Duration,
) -> Result<ExecutionStatus> {
    let name = execution_name(Local::now());
    let execution_arn = client
        .start_execution(state_machine_arn, &name, input)
        .await?;
    info!("Started execution {} with input {}", execution_arn, input);

    loop {
        let status = client.describe_execution(&execution_arn).await?;
        if status != ExecutionStatus::Running {
            info!("Execution {} stopped: {}", execution_arn, status);
            return Ok(status);
        }
        info!("Step Function Still Running");
        tokio::time::sleep(poll_interval).await;
    }
}
