//! Telegram adapter (teloxide).
//!
//! This crate implements the `hb-core` ChatGateway over the Telegram Bot API.
//! A Telegram chat plays the role of a channel; a direct message is a send to
//! the private chat whose id equals the user id.

use async_trait::async_trait;

use teloxide::prelude::*;

pub mod handlers;
pub mod router;

use hb_core::{
    domain::{ChannelId, UserId},
    errors::Error,
    messaging::port::ChatGateway,
    Result,
};

#[derive(Clone)]
pub struct TelegramGateway {
    bot: Bot,
}

impl TelegramGateway {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    fn map_err(e: teloxide::RequestError) -> Error {
        Error::Gateway(format!("telegram error: {e}"))
    }

    async fn send_plain(&self, chat_id: i64, text: &str) -> Result<()> {
        self.bot
            .send_message(teloxide::types::ChatId(chat_id), text.to_string())
            .await
            .map_err(Self::map_err)?;
        Ok(())
    }
}

#[async_trait]
impl ChatGateway for TelegramGateway {
    async fn send_to_channel(&self, channel: ChannelId, text: &str) -> Result<()> {
        self.send_plain(channel.0, text).await
    }

    async fn send_direct(&self, user: UserId, text: &str) -> Result<()> {
        self.send_plain(user.0, text).await
    }
}
