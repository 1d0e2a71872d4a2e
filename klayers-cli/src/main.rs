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
//! Klayers CLI starts executions of the layer-building pipeline and waits for
//! their outcome.

mod args;

use anyhow::{bail, Result};
use args::{Command, KlayersOpt};
use klayers::prelude::*;
use log::info;
use structopt::StructOpt;

/// Resolves the pipeline ARN, from the command line or from the stack outputs.
async fn pipeline_arn(opt: &KlayersOpt, session: &AwsSession) -> Result<String> {
    if let Some(arn) = &opt.arn {
        return Ok(arn.clone());
    }
    let stack = opt.stack.as_deref().unwrap_or(&KLAYERS_STACK_NAME);
    let arn = get_pipeline_arn(
        &session.cloudformation()?,
        stack,
        &KLAYERS_PIPELINE_OUTPUT_SUFFIX,
    )
    .await?;
    Ok(arn)
}

async fn execute(
    client: &dyn StateMachine,
    arn: &str,
    package: &str,
    expect: Option<ExecutionStatus>,
) -> Result<()> {
    let status = build_package(client, arn, package, *KLAYERS_POLL_INTERVAL).await?;
    println!("{}: {}", package, status);
    match expect {
        Some(expected) if expected != status => {
            bail!("{} expected {}, got {}", package, expected, status)
        }
        _ => Ok(()),
    }
}

async fn check(client: &dyn StateMachine, arn: &str) -> Result<()> {
    let mut mismatches = vec![];
    for (package, expected) in pipeline_scenarios() {
        info!("Building {}, expecting {}", package, expected);
        let status = build_package(client, arn, package, *KLAYERS_POLL_INTERVAL).await?;
        if status == expected {
            println!("[OK] {}: {}", package, status);
        } else {
            println!("[FAILED] {}: expected {}, got {}", package, expected, status);
            mismatches.push(package);
        }
    }

    if !mismatches.is_empty() {
        bail!("pipeline check failed for {}", mismatches.join(", "));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let opt = KlayersOpt::from_args();
    args::get_logging(&opt)?.init();

    let session = AwsSession::try_new(
        opt.region.as_deref().unwrap_or(&KLAYERS_PIPELINE_REGION),
        opt.profile
            .clone()
            .or_else(|| Some(KLAYERS_PIPELINE_PROFILE.clone()))
            .filter(|p| !p.is_empty()),
    )?;
    let arn = pipeline_arn(&opt, &session).await?;
    info!("Using pipeline {}", arn);
    let client = session.step_functions()?;

    match &opt.cmd {
        Command::Execute { package, expect } => {
            let expect = expect.as_deref().map(ExecutionStatus::from);
            execute(&client, &arn, package, expect).await
        }
        Command::Check => check(&client, &arn).await,
    }
}
