// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

pub(crate) use client_event_dispatcher::ClientEventDispatcher;
pub(crate) use connection_event_handler::ConnectionEventHandler;
pub(crate) use event_handler_queue::RealtimeEventHandlerQueue;
pub(crate) use messages_event_handler::MessagesEventHandler;
pub(crate) use rooms_event_handler::RoomsEventHandler;

mod client_event_dispatcher;
mod connection_event_handler;
mod event_handler_queue;
mod messages_event_handler;
mod rooms_event_handler;

pub(crate) type RealtimeEvent = active_chat_realtime::Event;

/// A link in the inbound event chain. A handler either consumes an event
/// (`Ok(None)`) or passes it on to the next handler (`Ok(Some(event))`).
#[async_trait]
pub(crate) trait RealtimeEventHandler: Send + Sync {
    fn name(&self) -> &'static str;

    async fn handle_event(&self, event: RealtimeEvent) -> Result<Option<RealtimeEvent>>;
}
