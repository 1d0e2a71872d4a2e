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
//! The main entry point for the Slack notification lambda function.
//!
//! One binary serves both the build pipeline and the publish state machine;
//! the handler configured on the function (`_HANDLER`) picks which one.

use klayers::prelude::*;
use lambda_runtime::{service_fn, LambdaEvent};
use log::info;

async fn handler(
    ctx: &NotifierContext,
    kind: Handler,
    event: LambdaEvent<StatusEvent>,
) -> Result<NotificationResult> {
    let (event, context) = event.into_parts();
    info!(
        "[{}] {} handling {:?} for execution {}",
        context.request_id,
        context.env_config.function_name,
        kind,
        event.detail.name.as_deref().unwrap_or("<unnamed>")
    );

    let result = kind.handle(ctx, &event).await?;
    info!("[{}] status: {}", context.request_id, result.status);
    Ok(result)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Cold start: resolved once, borrowed by every warm invocation.
    let kind = Handler::from_env()?;
    let ctx = NotifierContext::try_new().await?;
    let ctx = &ctx;

    lambda_runtime::run(service_fn(move |event| async move {
        handler(ctx, kind, event).await
    }))
    .await?;
    Ok(())
}
