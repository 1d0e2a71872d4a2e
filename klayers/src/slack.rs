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
//! Posts messages to Slack and classifies the acknowledgement.

use crate::configs::KLAYERS_SLACK_API_URL;
use crate::error::Result;
use crate::event::PostStatus;
use async_trait::async_trait;
use log::{error, info};
use serde::{Deserialize, Serialize};

/// The body of a `chat.postMessage` response.
///
/// <https://api.slack.com/methods/chat.postMessage>
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PostMessageResponse {
    /// Whether Slack accepted the message.
    #[serde(default)]
    pub ok:    bool,
    /// The error code when `ok` is false, e.g. `channel_not_found`.
    #[serde(default)]
    pub error: Option<String>,
    /// The timestamp id of the posted message.
    #[serde(default)]
    pub ts:    Option<String>,
}

#[derive(Debug, Serialize)]
struct PostMessageRequest<'a> {
    channel: &'a str,
    text:    &'a str,
}

/// A chat service that can post a text message to a channel.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Posts `text` to `channel` and returns the service's acknowledgement.
    async fn post_message(&self, channel: &str, text: &str) -> Result<PostMessageResponse>;
}

/// Slack Web API client authenticated with a bot token.
pub struct SlackClient {
    http:    reqwest::Client,
    token:   String,
    api_url: String,
}

impl SlackClient {
    /// Creates a client that talks to the public Slack API.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_api_url(token, KLAYERS_SLACK_API_URL.as_str())
    }

    /// Creates a client that posts to the given `chat.postMessage` endpoint.
    pub fn with_api_url(token: impl Into<String>, api_url: impl Into<String>) -> Self {
        SlackClient {
            http:    reqwest::Client::new(),
            token:   token.into(),
            api_url: api_url.into(),
        }
    }
}

#[async_trait]
impl ChatClient for SlackClient {
    async fn post_message(&self, channel: &str, text: &str) -> Result<PostMessageResponse> {
        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.token)
            .json(&PostMessageRequest { channel, text })
            .send()
            .await?
            .error_for_status()?
            .json::<PostMessageResponse>()
            .await?;
        Ok(response)
    }
}

/// Posts a message and reports whether Slack acknowledged it.
///
/// A refused message is logged and reported as [`PostStatus::Failed`]; there
/// is no retry. Transport errors are returned to the caller.
pub async fn post_to_slack(
    client: &dyn ChatClient,
    message: &str,
    channel: &str,
) -> Result<PostStatus> {
    let response = client.post_message(channel, message).await?;
    let channel = channel.trim_start_matches('#');

    if response.ok {
        info!(
            "Successfully posted Message:{} to Channel:#{}",
            message, channel
        );
        Ok(PostStatus::Success)
    } else {
        error!(
            "Failed to post Message:{} to Channel:#{} ({})",
            message,
            channel,
            response.error.as_deref().unwrap_or("no error code")
        );
        Ok(PostStatus::Failed)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::KlayersError;
    use std::sync::Mutex;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Records every message and answers with a fixed acknowledgement.
    pub(crate) struct FakeChat {
        pub ack:  bool,
        pub sent: Mutex<Vec<(String, String)>>,
    }

    impl FakeChat {
        pub(crate) fn new(ack: bool) -> Self {
            FakeChat {
                ack,
                sent: Mutex::new(vec![]),
            }
        }
    }

    #[async_trait]
    impl ChatClient for FakeChat {
        async fn post_message(&self, channel: &str, text: &str) -> Result<PostMessageResponse> {
            self.sent
                .lock()
                .unwrap()
                .push((channel.to_string(), text.to_string()));
            Ok(PostMessageResponse {
                ok:    self.ack,
                error: (!self.ack).then(|| "not_in_channel".to_string()),
                ts:    None,
            })
        }
    }

    #[tokio::test]
    async fn acknowledged() -> Result<()> {
        for (channel, message) in [
            ("#buildstatus-default", "ERROR: Building requests status: FAILED"),
            ("general", ""),
        ] {
            let chat = FakeChat::new(true);
            assert_eq!(
                post_to_slack(&chat, message, channel).await?,
                PostStatus::Success
            );
            assert_eq!(
                chat.sent.lock().unwrap()[0],
                (channel.to_string(), message.to_string())
            );
        }
        Ok(())
    }

    #[tokio::test]
    async fn refused() -> Result<()> {
        let chat = FakeChat::new(false);
        assert_eq!(
            post_to_slack(&chat, "ERROR: Unknown State of Publish", "#buildstatus-default").await?,
            PostStatus::Failed
        );
        Ok(())
    }

    #[test]
    fn parse_response() -> Result<()> {
        let response: PostMessageResponse =
            serde_json::from_str(r#"{"ok": true, "channel": "C123", "ts": "1503435956.000247"}"#)?;
        assert!(response.ok);
        assert_eq!(response.ts.as_deref(), Some("1503435956.000247"));

        let response: PostMessageResponse =
            serde_json::from_str(r#"{"ok": false, "error": "channel_not_found"}"#)?;
        assert!(!response.ok);
        assert_eq!(response.error.as_deref(), Some("channel_not_found"));
        Ok(())
    }

    /// Serves a single HTTP request and returns it as text.
    async fn serve_once(listener: TcpListener, body: &'static str) -> String {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = vec![];
        let mut buf = [0_u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            request.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&request).to_string();
            if let Some(end) = text.find("\r\n\r\n") {
                let length = text[..end]
                    .lines()
                    .find_map(|line| {
                        let (key, value) = line.split_once(':')?;
                        key.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().unwrap())
                    })
                    .unwrap_or(0);
                if request.len() >= end + 4 + length {
                    break;
                }
            }
            if n == 0 {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        String::from_utf8_lossy(&request).to_string()
    }

    #[tokio::test]
    async fn slack_client_posts_json() -> Result<()> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let url = format!("http://{}/api/chat.postMessage", listener.local_addr()?);
        let server = tokio::spawn(serve_once(listener, r#"{"ok": true, "ts": "1.2"}"#));

        let client = SlackClient::with_api_url("xoxb-test", url);
        let response = client
            .post_message("#buildstatus-default", "GOOD: done")
            .await?;
        assert!(response.ok);

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/chat.postMessage HTTP/1.1"));
        assert!(request
            .to_lowercase()
            .contains("authorization: bearer xoxb-test"));
        assert!(request.ends_with(r##"{"channel":"#buildstatus-default","text":"GOOD: done"}"##));
        Ok(())
    }

    #[tokio::test]
    async fn transport_error_propagates() -> Result<()> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let url = format!("http://{}/api/chat.postMessage", listener.local_addr()?);
        drop(listener);

        let client = SlackClient::with_api_url("xoxb-test", url);
        let result = post_to_slack(&client, "GOOD: done", "#buildstatus-default").await;
        assert!(matches!(result, Err(KlayersError::Http(_))));
        Ok(())
    }
}
