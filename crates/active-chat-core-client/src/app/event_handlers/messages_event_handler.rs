// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

use active_chat_realtime::mods::chat;

use crate::app::deps::{
    AppDependencies, DynClientEventDispatcher, DynConnectedRoomsRepository,
};
use crate::app::event_handlers::{RealtimeEvent, RealtimeEventHandler};
use crate::domain::messaging::models::ChatMessage;
use crate::domain::shared::models::RoomId;
use crate::ClientRoomEventType;

pub(crate) struct MessagesEventHandler {
    connected_rooms_repo: DynConnectedRoomsRepository,
    client_event_dispatcher: DynClientEventDispatcher,
}

impl From<&AppDependencies> for MessagesEventHandler {
    fn from(deps: &AppDependencies) -> Self {
        MessagesEventHandler {
            connected_rooms_repo: deps.connected_rooms_repo.clone(),
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
        }
    }
}

#[async_trait]
impl RealtimeEventHandler for MessagesEventHandler {
    fn name(&self) -> &'static str {
        "messages"
    }

    async fn handle_event(&self, event: RealtimeEvent) -> Result<Option<RealtimeEvent>> {
        match event {
            RealtimeEvent::Chat(chat::Event::Message { channel, message }) => {
                let Some(room_id) = RoomId::from_channel_id(&channel) else {
                    warn!("Received message on unexpected channel '{channel}'.");
                    return Ok(None);
                };

                let Some(room) = self.connected_rooms_repo.get(&room_id) else {
                    warn!("Received message for room '{room_id}' which is not connected.");
                    return Ok(None);
                };

                let message = match ChatMessage::try_from(message) {
                    Ok(message) => message,
                    Err(err) => {
                        warn!("Dropping malformed message. {}", err);
                        return Ok(None);
                    }
                };

                let message_id = message.id.clone();

                // Skip messages we've seen already. This is usually the
                // broadcast echo of a message this device appended
                // optimistically when it was sent.
                if !room.state.write().append_message(message) {
                    return Ok(None);
                }

                self.client_event_dispatcher.dispatch_room_event(
                    room_id,
                    ClientRoomEventType::MessagesAppended {
                        message_ids: vec![message_id],
                    },
                );
            }
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}
