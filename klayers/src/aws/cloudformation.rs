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
//! This crate contains all wrapped functions of the AWS CloudFormation
//! services.

use crate::error::{KlayersError, Result};
use log::info;
use rusoto_cloudformation::{CloudFormation, CloudFormationClient, DescribeStacksInput, Stack};

/// Returns the value of the first output of the first stack whose key ends
/// with `suffix`.
pub fn find_output(stacks: &[Stack], suffix: &str) -> Option<String> {
    stacks
        .first()?
        .outputs
        .as_ref()?
        .iter()
        .find(|output| {
            output
                .output_key
                .as_deref()
                .map_or(false, |key| key.ends_with(suffix))
        })
        .and_then(|output| output.output_value.clone())
}

/// Looks up the ARN of a state machine exported by a stack.
///
/// # Arguments
/// * `client` - The CloudFormation client.
/// * `stack_name` - The stack that owns the state machine.
/// * `suffix` - The suffix of the stack output key, e.g. `pipelineArn`.
pub async fn get_pipeline_arn(
    client: &CloudFormationClient,
    stack_name: &str,
    suffix: &str,
) -> Result<String> {
    let response = client
        .describe_stacks(DescribeStacksInput {
            stack_name: Some(stack_name.to_owned()),
            ..Default::default()
        })
        .await
        .map_err(|e| KlayersError::AWS(e.to_string()))?;

    let arn = find_output(&response.stacks.unwrap_or_default(), suffix).ok_or_else(|| {
        KlayersError::AWS(format!(
            "Stack {} has no output ending with {}",
            stack_name, suffix
        ))
    })?;
    info!("Found state machine {} in stack {}", arn, stack_name);
    Ok(arn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusoto_cloudformation::Output;

    fn output(key: &str, value: &str) -> Output {
        Output {
            output_key: Some(key.to_string()),
            output_value: Some(value.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn pipeline_output() {
        let stacks = vec![Stack {
            stack_name: "kl-Klayers-defaultp38".to_string(),
            outputs: Some(vec![
                output("publishArn", "arn:aws:states:ap-southeast-1:123456789012:stateMachine:publish"),
                output("pipelineArn", "arn:aws:states:ap-southeast-1:123456789012:stateMachine:pipeline"),
                output("buildpipelineArn", "arn:aws:states:ap-southeast-1:123456789012:stateMachine:other"),
            ]),
            ..Default::default()
        }];

        assert_eq!(
            find_output(&stacks, "pipelineArn").as_deref(),
            Some("arn:aws:states:ap-southeast-1:123456789012:stateMachine:pipeline")
        );
        assert_eq!(find_output(&stacks, "layerArn"), None);
    }

    #[test]
    fn no_outputs() {
        assert_eq!(find_output(&[], "pipelineArn"), None);
        assert_eq!(find_output(&[Stack::default()], "pipelineArn"), None);
    }
}
