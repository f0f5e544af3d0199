// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

use active_chat_realtime::mods::chat;

use crate::app::deps::{
    AppDependencies, DynClientEventDispatcher, DynConnectedRoomsRepository, DynIdentityRepository,
};
use crate::app::event_handlers::{RealtimeEvent, RealtimeEventHandler};
use crate::domain::messaging::models::TypingSignal;
use crate::domain::shared::models::RoomId;
use crate::ClientRoomEventType;

pub(crate) struct RoomsEventHandler {
    connected_rooms_repo: DynConnectedRoomsRepository,
    identity_repo: DynIdentityRepository,
    client_event_dispatcher: DynClientEventDispatcher,
}

impl From<&AppDependencies> for RoomsEventHandler {
    fn from(deps: &AppDependencies) -> Self {
        RoomsEventHandler {
            connected_rooms_repo: deps.connected_rooms_repo.clone(),
            identity_repo: deps.identity_repo.clone(),
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
        }
    }
}

#[async_trait]
impl RealtimeEventHandler for RoomsEventHandler {
    fn name(&self) -> &'static str {
        "rooms"
    }

    async fn handle_event(&self, event: RealtimeEvent) -> Result<Option<RealtimeEvent>> {
        match event {
            RealtimeEvent::Chat(chat::Event::ComposeStateChanged { channel, signal }) => {
                let Some(room_id) = RoomId::from_channel_id(&channel) else {
                    warn!("Received typing signal on unexpected channel '{channel}'.");
                    return Ok(None);
                };

                let Some(room) = self.connected_rooms_repo.get(&room_id) else {
                    warn!("Received typing signal for room '{room_id}' which is not connected.");
                    return Ok(None);
                };

                let signal = TypingSignal::from(signal);

                let is_self_event = self
                    .identity_repo
                    .get()
                    .await?
                    .is_some_and(|identity| identity.id() == &signal.user_id);

                // Our own signals come back via the broadcast echo. They are
                // never shown to us, so only a stale entry gets cleaned up.
                let changed = if is_self_event {
                    room.state.write().remove_composer(&signal.user_id)
                } else {
                    room.state.write().apply_compose_state(signal)
                };

                if changed {
                    self.client_event_dispatcher
                        .dispatch_room_event(room_id, ClientRoomEventType::ComposingUsersChanged);
                }
            }
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}
