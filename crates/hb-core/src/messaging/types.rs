use crate::domain::{ChannelId, UserId};

/// Cross-messenger incoming text message.
///
/// Platform-specific fields stay in the adapter. A message without text content
/// (sticker, photo, missing permissions) arrives with an empty `raw_text`.
#[derive(Clone, Debug)]
pub struct InboundMessage {
    pub author_id: UserId,
    pub author_name: String,
    pub channel_id: ChannelId,
    pub channel_name: String,
    pub raw_text: String,
    pub is_from_self: bool,
}

/// Where a reply goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Channel(ChannelId),
    Direct(UserId),
}

/// A single message to hand to the gateway. Never queued or retried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundReply {
    pub destination: Destination,
    pub text: String,
}

impl OutboundReply {
    pub fn to_channel(channel: ChannelId, text: impl Into<String>) -> Self {
        Self {
            destination: Destination::Channel(channel),
            text: text.into(),
        }
    }

    pub fn direct(user: UserId, text: impl Into<String>) -> Self {
        Self {
            destination: Destination::Direct(user),
            text: text.into(),
        }
    }
}
