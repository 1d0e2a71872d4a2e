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
//! Runs the layer-building pipeline of a deployed stack.
//!
//! Needs credentials for the `KlayersDev` profile and takes several minutes:
//!
//! ```text
//! cargo test -p klayers --test pipeline -- --ignored
//! ```

use klayers::prelude::*;

#[tokio::test]
#[ignore]
async fn test_pipeline() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let session = AwsSession::pipeline()?;
    let pipeline_arn = get_pipeline_arn(
        &session.cloudformation()?,
        &KLAYERS_STACK_NAME,
        &KLAYERS_PIPELINE_OUTPUT_SUFFIX,
    )
    .await?;
    let client = session.step_functions()?;

    for (package, expected) in pipeline_scenarios() {
        let status = build_package(&client, &pipeline_arn, package, *KLAYERS_POLL_INTERVAL).await?;
        assert_eq!(status, expected, "package {}", package);
    }

    Ok(())
}
