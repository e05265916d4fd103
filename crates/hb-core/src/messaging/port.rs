use async_trait::async_trait;

use crate::{
    domain::{ChannelId, UserId},
    messaging::types::{Destination, OutboundReply},
    Result,
};

/// Cross-messenger send port.
///
/// Inbound events are pushed into [`crate::bot::Bot`] by the adapter; this trait
/// only covers the outbound half.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    async fn send_to_channel(&self, channel: ChannelId, text: &str) -> Result<()>;
    async fn send_direct(&self, user: UserId, text: &str) -> Result<()>;

    /// Route a reply to the primitive matching its destination.
    async fn deliver(&self, reply: &OutboundReply) -> Result<()> {
        match reply.destination {
            Destination::Channel(channel) => self.send_to_channel(channel, &reply.text).await,
            Destination::Direct(user) => self.send_direct(user, &reply.text).await,
        }
    }
}
