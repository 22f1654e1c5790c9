//! GroupMe REST API client.
//!
//! Reads group messages with the user access token and posts replies through
//! the bot endpoint. Implements both outbound ports.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use tracing::{debug, warn};
use url::Url;

use super::dto::{decode_messages, BotPostRequest};
use super::settings::GroupMeConfig;
use crate::domain::{Message, MessageId};
use crate::error::{Error, Result};
use crate::port::{BotPoster, MessageSource};

const ACCESS_TOKEN_HEADER: &str = "X-Access-Token";

/// HTTP client for the GroupMe v3 API, bound to one group and one bot.
pub struct GroupMeClient {
    http: HttpClient,
    api_url: String,
    access_token: String,
    group_id: String,
    bot_id: String,
}

impl GroupMeClient {
    /// Create a client with default HTTP settings.
    #[must_use]
    pub fn new(
        api_url: impl Into<String>,
        access_token: impl Into<String>,
        group_id: impl Into<String>,
        bot_id: impl Into<String>,
    ) -> Self {
        Self {
            http: HttpClient::new(),
            api_url: api_url.into(),
            access_token: access_token.into(),
            group_id: group_id.into(),
            bot_id: bot_id.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &GroupMeConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.http.timeout_ms))
            .connect_timeout(Duration::from_millis(config.http.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            api_url: config.api_url.clone(),
            access_token: config.access_token.clone(),
            group_id: config.group_id.clone(),
            bot_id: config.bot_id.clone(),
        }
    }

    /// `GET /groups/{group_id}/messages?limit=..[&before_id=..]`
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be built.
    pub fn messages_url(&self, limit: usize, before: Option<&MessageId>) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/groups/{}/messages",
            self.api_url.trim_end_matches('/'),
            self.group_id
        ))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("limit", &limit.to_string());
            if let Some(before) = before {
                query.append_pair("before_id", before.as_str());
            }
        }
        Ok(url)
    }

    /// `POST /bots/post`
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be built.
    pub fn bot_post_url(&self) -> Result<Url> {
        Ok(Url::parse(&format!(
            "{}/bots/post",
            self.api_url.trim_end_matches('/')
        ))?)
    }

    /// Fetch one page of messages, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status other
    /// than 304 Not Modified.
    pub async fn get_messages(
        &self,
        limit: usize,
        before: Option<&MessageId>,
    ) -> Result<Vec<Message>> {
        let url = self.messages_url(limit, before)?;
        debug!(limit, before = ?before.map(MessageId::as_str), "Fetching messages");

        let response = self
            .http
            .get(url.clone())
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .send()
            .await?;

        match classify_messages_status(response.status(), &url)? {
            MessagesStatus::NotModified => {
                debug!("Messages not modified");
                Ok(Vec::new())
            }
            MessagesStatus::Body => {
                let body = response.bytes().await?;
                Ok(decode_messages(&body))
            }
        }
    }

    /// Post `text` to the group as the configured bot.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn post_bot_message(&self, text: &str) -> Result<()> {
        let url = self.bot_post_url()?;
        let body = BotPostRequest {
            bot_id: &self.bot_id,
            text,
        };

        let response = self.http.post(url.clone()).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status,
                url: url.to_string(),
            });
        }

        debug!(chars = text.chars().count(), "Bot message posted");
        Ok(())
    }
}

/// How a messages response should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MessagesStatus {
    /// 304: nothing new, an empty page.
    NotModified,
    /// 2xx: decode the body.
    Body,
}

/// Map a messages response status onto how to read it.
///
/// Any other status is a transport failure carrying the URL without its
/// query string.
fn classify_messages_status(status: StatusCode, url: &Url) -> Result<MessagesStatus> {
    if status == StatusCode::NOT_MODIFIED {
        return Ok(MessagesStatus::NotModified);
    }
    if status.is_success() {
        return Ok(MessagesStatus::Body);
    }
    Err(Error::Status {
        status,
        url: redact(url),
    })
}

/// URL without its query string, for error messages.
fn redact(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.to_string()
}

#[async_trait]
impl MessageSource for GroupMeClient {
    async fn fetch_batch(&self, limit: usize, before: Option<&MessageId>) -> Result<Vec<Message>> {
        self.get_messages(limit, before).await
    }
}

#[async_trait]
impl BotPoster for GroupMeClient {
    async fn post(&self, text: &str) -> Result<()> {
        self.post_bot_message(text).await
    }
}
