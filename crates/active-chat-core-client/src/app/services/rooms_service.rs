// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use active_chat_realtime::Client as RealtimeClient;

use crate::app::deps::{
    AppDependencies, DynAppContext, DynClientEventDispatcher, DynConnectedRoomsRepository,
    DynIDProvider, DynIdentityRepository, DynMessagingService, DynTimeProvider,
};
use crate::app::services::room::{Room, RoomInner};
use crate::domain::rooms::models::RoomInternals;
use crate::domain::shared::models::RoomId;

pub struct RoomsService {
    ctx: DynAppContext,
    client_event_dispatcher: DynClientEventDispatcher,
    connected_rooms_repo: DynConnectedRoomsRepository,
    id_provider: DynIDProvider,
    identity_repo: DynIdentityRepository,
    messaging_service: DynMessagingService,
    realtime: RealtimeClient,
    time_provider: DynTimeProvider,
}

impl From<&AppDependencies> for RoomsService {
    fn from(deps: &AppDependencies) -> Self {
        RoomsService {
            ctx: deps.ctx.clone(),
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
            connected_rooms_repo: deps.connected_rooms_repo.clone(),
            id_provider: deps.id_provider.clone(),
            identity_repo: deps.identity_repo.clone(),
            messaging_service: deps.messaging_service.clone(),
            realtime: deps.realtime.clone(),
            time_provider: deps.time_provider.clone(),
        }
    }
}

impl RoomsService {
    /// Attaches to a room: subscribes its broadcast channel and starts an
    /// empty session state. Joining a room this client is already attached
    /// to returns the existing session — there is never more than one live
    /// subscription per room.
    pub async fn join_room(&self, room_id: &RoomId) -> Result<Room> {
        if let Some(internals) = self.connected_rooms_repo.get(room_id) {
            debug!("Already joined room '{room_id}'.");
            return Ok(self.make_room(internals));
        }

        info!("Joining room '{room_id}'…");
        self.realtime.subscribe(&room_id.channel_id())?;

        let internals = Arc::new(RoomInternals::new(room_id.clone()));
        if !self.connected_rooms_repo.put(internals.clone()) {
            // Lost the race against a concurrent join. The channel
            // subscription is idempotent, so simply reuse the winner.
            if let Some(existing) = self.connected_rooms_repo.get(room_id) {
                return Ok(self.make_room(existing));
            }
        }

        Ok(self.make_room(internals))
    }

    /// Detaches from a room. The channel is unsubscribed, any pending typing
    /// auto-clear is aborted and the session state is discarded — rejoining
    /// starts from a clean slate.
    pub async fn leave_room(&self, room_id: &RoomId) -> Result<()> {
        let Some(room) = self.connected_rooms_repo.delete(room_id) else {
            return Ok(());
        };

        info!("Leaving room '{room_id}'…");
        room.cancel_typing_auto_clear();

        if let Err(err) = self.realtime.unsubscribe(&room_id.channel_id()) {
            // The room is gone from the repository either way; a failed
            // unsubscribe only happens once the connection itself is gone.
            debug!("Could not unsubscribe '{room_id}': {err}");
        }
        Ok(())
    }

    pub fn connected_rooms(&self) -> Vec<Room> {
        self.connected_rooms_repo
            .get_all()
            .into_iter()
            .map(|internals| self.make_room(internals))
            .collect()
    }

    fn make_room(&self, internals: Arc<RoomInternals>) -> Room {
        Room::from(Arc::new(RoomInner {
            data: internals,
            ctx: self.ctx.clone(),
            client_event_dispatcher: self.client_event_dispatcher.clone(),
            id_provider: self.id_provider.clone(),
            identity_repo: self.identity_repo.clone(),
            messaging_service: self.messaging_service.clone(),
            time_provider: self.time_provider.clone(),
        }))
    }
}
