//! Top-level event handlers fed by the gateway adapter.

use tracing::{error, info};

use crate::{
    classify::classify,
    dispatch::{DispatchOutcome, Dispatcher},
    messaging::types::InboundMessage,
};

/// Event handler: the last line of defense between a single bad message and the
/// gateway's event loop.
#[derive(Clone)]
pub struct Bot {
    dispatcher: Dispatcher,
}

impl Bot {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn on_ready(&self, bot_name: &str) {
        info!("{bot_name} is now running!");
    }

    /// Handle one inbound message.
    ///
    /// Returns `None` for the bot's own messages and for messages whose
    /// dispatch failed; the failure is logged, never propagated.
    pub async fn on_message(&self, msg: &InboundMessage) -> Option<DispatchOutcome> {
        if msg.is_from_self {
            return None;
        }

        info!(
            "[{}] {}: \"{}\"",
            msg.channel_name, msg.author_name, msg.raw_text
        );

        let decision = classify(&msg.raw_text);
        match self
            .dispatcher
            .dispatch(&decision, msg.author_id, msg.channel_id)
            .await
        {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                error!(
                    author = %msg.author_id,
                    channel = %msg.channel_id,
                    error = %e,
                    "message dropped"
                );
                None
            }
        }
    }
}
