//! Telegram update handlers.
//!
//! Converts a teloxide `Message` into the cross-messenger `InboundMessage` and
//! hands it to the core event handler.

use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use hb_core::{
    domain::{ChannelId, UserId},
    messaging::types::InboundMessage,
};

use crate::router::AppState;

/// Author fields the core cares about.
struct Author<'a> {
    id: u64,
    username: Option<&'a str>,
    full_name: String,
}

/// Chat fields the core cares about.
struct ChatInfo<'a> {
    id: i64,
    title: Option<&'a str>,
    username: Option<&'a str>,
}

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let author = msg.from().map(|user| Author {
        id: user.id.0,
        username: user.username.as_deref(),
        full_name: user.full_name(),
    });
    let chat = ChatInfo {
        id: msg.chat.id.0,
        title: msg.chat.title(),
        username: msg.chat.username(),
    };

    let Some(inbound) = inbound_message(author, &chat, msg.text(), state.me) else {
        return Ok(());
    };

    state.bot.on_message(&inbound).await;
    Ok(())
}

/// Map a Telegram message onto the core model.
///
/// Channel posts and service messages have no author and yield `None`.
/// Non-text messages carry an empty `raw_text`.
fn inbound_message(
    author: Option<Author<'_>>,
    chat: &ChatInfo<'_>,
    text: Option<&str>,
    me: UserId,
) -> Option<InboundMessage> {
    let author = author?;
    let author_id = UserId(author.id as i64);

    Some(InboundMessage {
        author_id,
        author_name: display_name(author.username, &author.full_name),
        channel_id: ChannelId(chat.id),
        channel_name: chat_label(chat.title, chat.username, chat.id),
        raw_text: text.unwrap_or_default().to_string(),
        is_from_self: author_id == me,
    })
}

fn display_name(username: Option<&str>, full_name: &str) -> String {
    match username {
        Some(u) if !u.is_empty() => format!("@{u}"),
        _ if !full_name.trim().is_empty() => full_name.trim().to_string(),
        _ => "unknown".to_string(),
    }
}

fn chat_label(title: Option<&str>, username: Option<&str>, chat_id: i64) -> String {
    title
        .map(str::to_string)
        .or_else(|| username.map(|u| format!("@{u}")))
        .unwrap_or_else(|| chat_id.to_string())
}
