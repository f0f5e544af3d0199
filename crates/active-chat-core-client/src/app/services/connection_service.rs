// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use secrecy::Secret;
use tracing::debug;

use active_chat_realtime::{Client as RealtimeClient, ConnectionError};

use crate::app::deps::{
    AppDependencies, DynAppContext, DynClientEventDispatcher, DynConnectedRoomsRepository,
};
use crate::domain::shared::models::ConnectionState;
use crate::{ClientEvent, ConnectionEvent};

pub struct ConnectionService {
    ctx: DynAppContext,
    realtime: RealtimeClient,
    connected_rooms_repo: DynConnectedRoomsRepository,
    client_event_dispatcher: DynClientEventDispatcher,
}

impl From<&AppDependencies> for ConnectionService {
    fn from(deps: &AppDependencies) -> Self {
        ConnectionService {
            ctx: deps.ctx.clone(),
            realtime: deps.realtime.clone(),
            connected_rooms_repo: deps.connected_rooms_repo.clone(),
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
        }
    }
}

impl ConnectionService {
    pub async fn connect(&self, api_key: Secret<String>) -> Result<(), ConnectionError> {
        self.ctx.set_connection_state(ConnectionState::Connecting);

        match self.realtime.connect(api_key).await {
            Ok(()) => {
                self.ctx.set_connection_state(ConnectionState::Connected);
                Ok(())
            }
            Err(err) => {
                self.ctx.set_connection_state(ConnectionState::Disconnected);
                Err(err)
            }
        }
    }

    /// Tears the session down: every joined room is detached — pending
    /// typing timers aborted, channels unsubscribed — before the connection
    /// itself is dropped, so nothing stays live behind a closed view.
    pub async fn disconnect(&self) {
        for room in self.connected_rooms_repo.delete_all() {
            room.cancel_typing_auto_clear();
            if let Err(err) = self.realtime.unsubscribe(&room.room_id.channel_id()) {
                debug!("Could not unsubscribe '{}': {}", room.room_id, err);
            }
        }

        self.realtime.disconnect();
        self.ctx.set_connection_state(ConnectionState::Disconnected);
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ConnectionStatusChanged {
                event: ConnectionEvent::Disconnect { error: None },
            });
    }
}
