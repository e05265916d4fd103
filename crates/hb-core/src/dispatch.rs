//! Executes a [`RoutingDecision`]: picks the producer, builds the replies and
//! hands them to the gateway.

use std::sync::Arc;

use tracing::{error, info};

use crate::{
    classify::{Mode, RoutingDecision, TargetKind},
    domain::{ChannelId, UserId},
    messaging::{port::ChatGateway, types::OutboundReply},
    ports::{Responder, SourceText, TranslatedSegment, Translator},
    Result,
};

/// Source language for `!translate`.
pub const SOURCE_LANG: &str = "en";
/// Target language for `!translate`.
pub const TARGET_LANG: &str = "ja";
/// Sent to the channel when the translator answers with nothing.
pub const TRANSLATION_FAILED_REPLY: &str = "Error: Could not translate text.";

/// Terminal state of one dispatched message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// `messages` replies were handed to the gateway.
    Sent { messages: usize },
    /// Plain message with no text; dropped without a reply.
    EmptyPayload,
    /// The responder or the send failed; the error was logged and no reply went out.
    Suppressed,
}

#[derive(Clone)]
pub struct Dispatcher {
    gateway: Arc<dyn ChatGateway>,
    responder: Arc<dyn Responder>,
    translator: Arc<dyn Translator>,
}

impl Dispatcher {
    pub fn new(
        gateway: Arc<dyn ChatGateway>,
        responder: Arc<dyn Responder>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            gateway,
            responder,
            translator,
        }
    }

    /// Dispatch one classified message.
    ///
    /// Plain replies are best-effort and never return `Err`. Translation
    /// failures are logged here and returned to the caller.
    pub async fn dispatch(
        &self,
        decision: &RoutingDecision,
        author: UserId,
        channel: ChannelId,
    ) -> Result<DispatchOutcome> {
        match decision.mode {
            Mode::Plain => Ok(self
                .dispatch_plain(decision.target, &decision.payload, author, channel)
                .await),
            Mode::Translate => self.dispatch_translate(&decision.payload, channel).await,
        }
    }

    async fn dispatch_plain(
        &self,
        target: TargetKind,
        payload: &str,
        author: UserId,
        channel: ChannelId,
    ) -> DispatchOutcome {
        if payload.is_empty() {
            // Usually a non-text message, or content the bot is not allowed to read.
            info!(%author, %channel, "message was empty, nothing to reply to");
            return DispatchOutcome::EmptyPayload;
        }

        let text = match self.responder.respond(payload) {
            Ok(text) => text,
            Err(e) => {
                error!(%author, %channel, error = %e, "responder failed, reply suppressed");
                return DispatchOutcome::Suppressed;
            }
        };

        let reply = match target {
            TargetKind::Private => OutboundReply::direct(author, text),
            TargetKind::Public => OutboundReply::to_channel(channel, text),
        };

        match self.gateway.deliver(&reply).await {
            Ok(()) => DispatchOutcome::Sent { messages: 1 },
            Err(e) => {
                error!(%author, %channel, error = %e, "failed to send reply, suppressed");
                DispatchOutcome::Suppressed
            }
        }
    }

    async fn dispatch_translate(
        &self,
        payload: &str,
        channel: ChannelId,
    ) -> Result<DispatchOutcome> {
        let segments = self
            .translator
            .translate(&[SourceText::new(payload)], SOURCE_LANG, &[TARGET_LANG])
            .await
            .map_err(|e| {
                error!(%channel, error = %e, "translation failed");
                e
            })?;

        let replies = translation_replies(channel, &segments);
        for reply in &replies {
            self.gateway.deliver(reply).await?;
        }

        Ok(DispatchOutcome::Sent {
            messages: replies.len(),
        })
    }
}

/// Flatten translator output into one channel message per translated unit,
/// preserving order. Blank units are skipped since the platform rejects empty
/// messages. Falls back to the fixed diagnostic when there is nothing to send.
pub fn translation_replies(
    channel: ChannelId,
    segments: &[TranslatedSegment],
) -> Vec<OutboundReply> {
    let replies: Vec<OutboundReply> = segments
        .iter()
        .flat_map(|segment| segment.translations.iter())
        .filter(|t| !t.text.trim().is_empty())
        .map(|t| OutboundReply::to_channel(channel, t.text.clone()))
        .collect();

    if replies.is_empty() {
        return vec![OutboundReply::to_channel(channel, TRANSLATION_FAILED_REPLY)];
    }
    replies
}
