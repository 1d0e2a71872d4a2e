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
//! This module provides various default configurations for Klayers.

pub mod deployment;
pub use deployment::NotifierConfig;

mod klayers;
pub use self::klayers::KLAYERS_CONF;
use lazy_static::lazy_static;
use std::time::Duration;

lazy_static! {
    /// Slack Web API endpoint used to post messages.
    pub static ref KLAYERS_SLACK_API_URL: String = KLAYERS_CONF["slack"]["api_url"].to_string();
    /// Slack channel name prefix; the stage name completes it.
    pub static ref KLAYERS_CHANNEL_PREFIX: String = KLAYERS_CONF["slack"]["channel_prefix"].to_string();
    /// Number of leading characters dropped from the stage name.
    pub static ref KLAYERS_STAGE_SKIP: usize = KLAYERS_CONF["slack"]["stage_skip"].parse::<usize>().unwrap();
    /// Number of trailing characters dropped from the stage name.
    pub static ref KLAYERS_STAGE_TRIM: usize = KLAYERS_CONF["slack"]["stage_trim"].parse::<usize>().unwrap();

    /// Where the published layers are announced.
    pub static ref KLAYERS_REPOSITORY: String = KLAYERS_CONF["publish"]["repository"].to_string();

    /// AWS region of the pipeline stack.
    pub static ref KLAYERS_PIPELINE_REGION: String = KLAYERS_CONF["pipeline"]["region"].to_string();
    /// Named credentials profile used by the pipeline harness.
    pub static ref KLAYERS_PIPELINE_PROFILE: String = KLAYERS_CONF["pipeline"]["profile"].to_string();
    /// CloudFormation stack that owns the pipeline state machine.
    pub static ref KLAYERS_STACK_NAME: String = KLAYERS_CONF["pipeline"]["stack_name"].to_string();
    /// Suffix of the stack output holding the pipeline state machine ARN.
    pub static ref KLAYERS_PIPELINE_OUTPUT_SUFFIX: String = KLAYERS_CONF["pipeline"]["output_suffix"].to_string();
    /// Interval between two `DescribeExecution` calls.
    pub static ref KLAYERS_POLL_INTERVAL: Duration = humantime::parse_duration(&KLAYERS_CONF["pipeline"]["poll_interval"]).unwrap();
}

/// Environment variable holding the deployment stage.
pub const KLAYERS_STAGE_ENV: &str = "STAGE";
/// Environment variable holding the SSM parameter name of the Slack token.
pub const KLAYERS_SLACK_TOKEN_ENV: &str = "SLACK_TOKEN_PARAMETER";
/// Environment variable the Lambda custom runtime fills with the handler name.
pub const KLAYERS_HANDLER_ENV: &str = "_HANDLER";
