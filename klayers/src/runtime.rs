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
//! The cold-start context shared by warm invocations, and the two
//! notification handlers built on it.

use crate::aws::ssm::ParameterStore;
use crate::configs::{NotifierConfig, KLAYERS_HANDLER_ENV};
use crate::error::{KlayersError, Result};
use crate::event::{NotificationResult, StatusEvent};
use crate::notifier::{pipeline_error_message, publish_message, Notification};
use crate::slack::{post_to_slack, ChatClient, SlackClient};
use log::info;
use rusoto_core::Region;
use rusoto_ssm::SsmClient;

/// Everything a handler needs, built once per execution environment.
pub struct NotifierContext {
    /// The deployment settings.
    pub config: NotifierConfig,
    client:     Box<dyn ChatClient>,
}

impl NotifierContext {
    /// Creates a context from its parts.
    pub fn new(config: NotifierConfig, client: Box<dyn ChatClient>) -> Self {
        NotifierContext { config, client }
    }

    /// Reads the environment, fetches the Slack token from SSM and creates
    /// the Slack client.
    pub async fn try_new() -> Result<Self> {
        let config = NotifierConfig::from_env()?;
        let ssm = SsmClient::new(Region::default());
        Self::from_store(config, &ssm).await
    }

    /// Creates the Slack client with the token kept in `store`.
    pub async fn from_store(config: NotifierConfig, store: &dyn ParameterStore) -> Result<Self> {
        let token = store.get_secure_parameter(&config.token_parameter).await?;
        info!(
            "Notifier initialized for stage {}, posting to {}",
            config.stage, config.channel
        );
        Ok(Self::new(config, Box::new(SlackClient::new(token))))
    }

    /// Wraps a message for the configured channel.
    pub fn notification(&self, text: impl Into<String>) -> Notification {
        Notification::new(self.config.channel.clone(), text)
    }

    /// Posts a notification.
    pub async fn send(&self, notification: &Notification) -> Result<NotificationResult> {
        let status = post_to_slack(
            self.client.as_ref(),
            &notification.text,
            &notification.channel,
        )
        .await?;
        Ok(NotificationResult::from(status))
    }
}

/// Reports a failed run of the build pipeline.
pub async fn handle_pipeline_error(
    ctx: &NotifierContext,
    event: &StatusEvent,
) -> Result<NotificationResult> {
    let notification = ctx.notification(pipeline_error_message(event)?);
    ctx.send(&notification).await
}

/// Reports the outcome of the publish state machine.
pub async fn handle_publish(
    ctx: &NotifierContext,
    event: &StatusEvent,
) -> Result<NotificationResult> {
    let notification = ctx.notification(publish_message(event));
    ctx.send(&notification).await
}

/// The handler a deployed function serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// Events of the build pipeline that stopped without succeeding.
    PipelineError,
    /// Every terminal event of the publish state machine.
    Publish,
}

impl Handler {
    /// Resolves a handler from the function's configured handler name, e.g.
    /// `slack_notification.slack_notification_pipeline_error`.
    pub fn from_name(name: &str) -> Result<Self> {
        if name.ends_with("pipeline_error") {
            Ok(Handler::PipelineError)
        } else if name.ends_with("publish") {
            Ok(Handler::Publish)
        } else {
            Err(KlayersError::Config(format!("unknown handler {:?}", name)))
        }
    }

    /// Resolves the handler from `_HANDLER`.
    pub fn from_env() -> Result<Self> {
        let name = std::env::var(KLAYERS_HANDLER_ENV)
            .map_err(|e| KlayersError::Config(format!("{}: {}", KLAYERS_HANDLER_ENV, e)))?;
        Self::from_name(&name)
    }

    /// Handles one event.
    pub async fn handle(
        &self,
        ctx: &NotifierContext,
        event: &StatusEvent,
    ) -> Result<NotificationResult> {
        match self {
            Handler::PipelineError => handle_pipeline_error(ctx, event).await,
            Handler::Publish => handle_publish(ctx, event).await,
        }
    }
}
