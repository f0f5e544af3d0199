// active-chat-core/active-chat-realtime
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use secrecy::Secret;

use crate::frame::{ChannelId, Frame};
use crate::util::PinnedFuture;

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ConnectionError {
    #[error("Timed out")]
    TimedOut,
    #[error("Invalid API key")]
    InvalidApiKey,
    #[error("{msg:?}")]
    Generic { msg: String },
}

pub type ConnectionEventHandler = Box<dyn Fn(ConnectionEvent) -> PinnedFuture<()> + Send + Sync>;

/// Something that can open a connection to a broadcast relay. The hosted
/// realtime services the product runs against each get their own connector;
/// `relay::RelayConnector` routes frames inside a single process.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(
        &self,
        api_key: Secret<String>,
        event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn Connection>, ConnectionError>;
}

/// Events pushed from a connection. Frames arrive as raw JSON values and are
/// only parsed at the client boundary so that malformed payloads can be
/// dropped in one place.
#[derive(Debug)]
pub enum ConnectionEvent {
    Disconnected { error: Option<ConnectionError> },
    Frame(serde_json::Value),
}

/// A live connection to a relay. Events for a channel are only delivered
/// while the channel is subscribed.
pub trait Connection: Send + Sync {
    fn subscribe(&self, channel: &ChannelId) -> Result<()>;
    fn unsubscribe(&self, channel: &ChannelId) -> Result<()>;
    fn send_frame(&self, frame: Frame) -> Result<()>;
    fn disconnect(&self);
}
