// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use active_chat_realtime::client;

use crate::app::deps::{AppDependencies, DynAppContext, DynClientEventDispatcher};
use crate::app::event_handlers::{RealtimeEvent, RealtimeEventHandler};
use crate::domain::shared::models::ConnectionState;
use crate::{ClientEvent, ConnectionEvent};

pub(crate) struct ConnectionEventHandler {
    ctx: DynAppContext,
    client_event_dispatcher: DynClientEventDispatcher,
}

impl From<&AppDependencies> for ConnectionEventHandler {
    fn from(deps: &AppDependencies) -> Self {
        ConnectionEventHandler {
            ctx: deps.ctx.clone(),
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
        }
    }
}

#[async_trait]
impl RealtimeEventHandler for ConnectionEventHandler {
    fn name(&self) -> &'static str {
        "connection"
    }

    async fn handle_event(&self, event: RealtimeEvent) -> Result<Option<RealtimeEvent>> {
        match event {
            RealtimeEvent::Client(client::Event::Connected) => {
                self.ctx.set_connection_state(ConnectionState::Connected);
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::ConnectionStatusChanged {
                        event: ConnectionEvent::Connect,
                    });
            }
            RealtimeEvent::Client(client::Event::Disconnected { error }) => {
                self.ctx.set_connection_state(ConnectionState::Disconnected);
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::ConnectionStatusChanged {
                        event: ConnectionEvent::Disconnect { error },
                    });
            }
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}
