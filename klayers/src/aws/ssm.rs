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
//! This crate contains all wrapped functions of the AWS Systems Manager
//! Parameter Store.

use crate::error::{KlayersError, Result};
use async_trait::async_trait;
use log::info;
use rusoto_ssm::{GetParameterRequest, Ssm, SsmClient};

/// A store of named, possibly encrypted, parameters.
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Returns the decrypted value of a parameter.
    async fn get_secure_parameter(&self, name: &str) -> Result<String>;
}

#[async_trait]
impl ParameterStore for SsmClient {
    async fn get_secure_parameter(&self, name: &str) -> Result<String> {
        info!("Fetching parameter {} from SSM", name);
        let response = self
            .get_parameter(GetParameterRequest {
                name: name.to_owned(),
                with_decryption: Some(true),
            })
            .await
            .map_err(|e| KlayersError::AWS(e.to_string()))?;

        response
            .parameter
            .and_then(|p| p.value)
            .ok_or_else(|| KlayersError::AWS(format!("Parameter {} has no value!", name)))
    }
}
