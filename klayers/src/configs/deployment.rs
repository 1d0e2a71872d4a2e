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
//! Deployment settings of the notification functions.

use super::{
    KLAYERS_CHANNEL_PREFIX, KLAYERS_SLACK_TOKEN_ENV, KLAYERS_STAGE_ENV, KLAYERS_STAGE_SKIP,
    KLAYERS_STAGE_TRIM,
};
use crate::error::{KlayersError, Result};

/// Settings read from the Lambda environment at cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierConfig {
    /// The deployment stage, e.g. `Klayers-defaultp38`.
    pub stage:           String,
    /// The Slack channel derived from the stage, e.g. `#buildstatus-default`.
    pub channel:         String,
    /// The SSM parameter that stores the Slack bot token.
    pub token_parameter: String,
}

impl NotifierConfig {
    /// Builds the settings from a stage name and the SSM parameter name.
    pub fn try_new(stage: impl Into<String>, token_parameter: impl Into<String>) -> Result<Self> {
        let stage = stage.into();
        let token_parameter = token_parameter.into();
        if token_parameter.is_empty() {
            return Err(KlayersError::Config(format!(
                "{} must not be empty",
                KLAYERS_SLACK_TOKEN_ENV
            )));
        }
        let channel = channel_for_stage(&stage)?;
        Ok(NotifierConfig {
            stage,
            channel,
            token_parameter,
        })
    }

    /// Reads `STAGE` and `SLACK_TOKEN_PARAMETER` from the environment.
    pub fn from_env() -> Result<Self> {
        Self::try_new(env_var(KLAYERS_STAGE_ENV)?, env_var(KLAYERS_SLACK_TOKEN_ENV)?)
    }
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|e| KlayersError::Config(format!("{}: {}", key, e)))
}

/// Derives the Slack channel of a deployment stage.
///
/// The stage name loses its first [`KLAYERS_STAGE_SKIP`] and last
/// [`KLAYERS_STAGE_TRIM`] characters, so `Klayers-defaultp38` posts to
/// `#buildstatus-default`.
pub fn channel_for_stage(stage: &str) -> Result<String> {
    let name = stage.chars().skip(*KLAYERS_STAGE_SKIP).collect::<Vec<_>>();
    let keep = name.len().saturating_sub(*KLAYERS_STAGE_TRIM);
    let name = name[..keep].iter().collect::<String>();
    if name.is_empty() {
        return Err(KlayersError::Config(format!(
            "no channel name can be derived from stage {:?}",
            stage
        )));
    }
    Ok(format!("#{}{}", *KLAYERS_CHANNEL_PREFIX, name))
}
