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
//! This crate contains all wrapped functions of the AWS services used by
//! Klayers.

pub mod cloudformation;
pub mod ssm;
pub mod step_functions;

use crate::configs::{KLAYERS_PIPELINE_PROFILE, KLAYERS_PIPELINE_REGION};
use crate::error::{KlayersError, Result};
use rusoto_cloudformation::CloudFormationClient;
use rusoto_core::credential::ProfileProvider;
use rusoto_core::{HttpClient, Region};
use rusoto_stepfunctions::StepFunctionsClient;
use std::str::FromStr;

/// A region and an optional named credentials profile from which service
/// clients are created.
#[derive(Debug, Clone, PartialEq)]
pub struct AwsSession {
    /// The region every client talks to.
    pub region:  Region,
    /// The profile in the shared credentials file; `None` uses the default
    /// credentials chain.
    pub profile: Option<String>,
}

impl AwsSession {
    /// Creates a session for a region name such as `ap-southeast-1`.
    pub fn try_new(region: &str, profile: Option<String>) -> Result<Self> {
        let region = Region::from_str(region)
            .map_err(|e| KlayersError::Config(format!("{}: {}", region, e)))?;
        Ok(AwsSession { region, profile })
    }

    /// The session the pipeline harness runs with.
    pub fn pipeline() -> Result<Self> {
        Self::try_new(
            &KLAYERS_PIPELINE_REGION,
            Some(KLAYERS_PIPELINE_PROFILE.clone()).filter(|p| !p.is_empty()),
        )
    }

    fn credentials(&self, profile: &str) -> Result<(HttpClient, ProfileProvider)> {
        let dispatcher = HttpClient::new().map_err(|e| KlayersError::AWS(e.to_string()))?;
        let mut provider = ProfileProvider::new().map_err(|e| KlayersError::AWS(e.to_string()))?;
        provider.set_profile(profile);
        Ok((dispatcher, provider))
    }

    /// Creates a Step Functions client.
    pub fn step_functions(&self) -> Result<StepFunctionsClient> {
        match &self.profile {
            Some(profile) => {
                let (dispatcher, provider) = self.credentials(profile)?;
                Ok(StepFunctionsClient::new_with(
                    dispatcher,
                    provider,
                    self.region.clone(),
                ))
            }
            None => Ok(StepFunctionsClient::new(self.region.clone())),
        }
    }

    /// Creates a CloudFormation client.
    pub fn cloudformation(&self) -> Result<CloudFormationClient> {
        match &self.profile {
            Some(profile) => {
                let (dispatcher, provider) = self.credentials(profile)?;
                Ok(CloudFormationClient::new_with(
                    dispatcher,
                    provider,
                    self.region.clone(),
                ))
            }
            None => Ok(CloudFormationClient::new(self.region.clone())),
        }
    }
}
