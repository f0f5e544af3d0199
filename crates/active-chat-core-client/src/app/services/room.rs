// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};
use std::ops::Deref;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::warn;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynIDProvider, DynIdentityRepository,
    DynMessagingService, DynTimeProvider,
};
use crate::app::dtos::{Message as MessageDTO, UserBasicInfo};
use crate::domain::account::models::Identity;
use crate::domain::messaging::models::{ChatMessage, MessageId, TypingSignal};
use crate::domain::rooms::models::RoomInternals;
use crate::domain::shared::models::RoomId;
use crate::ClientRoomEventType;

/// A joined chat room. Cheap to clone; all clones share the same session
/// state until the room is left.
pub struct Room {
    inner: Arc<RoomInner>,
}

pub struct RoomInner {
    pub(crate) data: Arc<RoomInternals>,

    pub(crate) ctx: DynAppContext,
    pub(crate) client_event_dispatcher: DynClientEventDispatcher,
    pub(crate) id_provider: DynIDProvider,
    pub(crate) identity_repo: DynIdentityRepository,
    pub(crate) messaging_service: DynMessagingService,
    pub(crate) time_provider: DynTimeProvider,
}

impl From<Arc<RoomInner>> for Room {
    fn from(inner: Arc<RoomInner>) -> Self {
        Room { inner }
    }
}

impl Clone for Room {
    fn clone(&self) -> Self {
        Self::from(self.inner.clone())
    }
}

impl Deref for Room {
    type Target = RoomInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Debug for Room {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Room")
            .field("room_id", &self.data.room_id)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Room {
    fn eq(&self, other: &Self) -> bool {
        self.data.room_id == other.data.room_id
    }
}

impl Room {
    pub fn room_id(&self) -> &RoomId {
        &self.data.room_id
    }

    /// The messages seen by this session, in receipt order.
    pub fn messages(&self) -> Vec<MessageDTO> {
        self.data
            .state
            .read()
            .messages()
            .iter()
            .map(MessageDTO::from)
            .collect()
    }

    /// The participants currently typing. The local identity is never part
    /// of the result, even if its own signal echoes through the channel.
    pub async fn load_composing_users(&self) -> Result<Vec<UserBasicInfo>> {
        let local_identity = self.identity_repo.get().await?;
        let local_id = local_identity.as_ref().map(|identity| identity.id());

        Ok(self
            .data
            .state
            .read()
            .composing_users(local_id)
            .into_iter()
            .map(|signal| UserBasicInfo {
                id: signal.user_id,
                name: signal.username,
            })
            .collect())
    }
}

impl Room {
    /// Sends a message to the room. The message is appended to the local
    /// session state and announced to the delegate before the broadcast goes
    /// out — the sender never waits on the relay to see their own message.
    /// A relay failure is reported to the caller but the local echo stays:
    /// from this device's perspective the message was sent.
    pub async fn send_message(&self, body: impl Into<String>) -> Result<()> {
        let identity = self.active_identity().await?;

        let message = ChatMessage {
            id: MessageId::from(self.id_provider.new_id()),
            user_id: identity.id().clone(),
            username: identity.name().to_string(),
            content: body.into(),
            timestamp: self.time_provider.now(),
            avatar: identity.avatar(),
            is_anonymous: identity.is_anonymous(),
        };
        let message_id = message.id.clone();

        // Optimistic local echo. Marking the message as seen here is also
        // what makes the broadcast echo a no-op later.
        self.data.state.write().append_message(message.clone());
        self.client_event_dispatcher.dispatch_room_event(
            self.data.room_id.clone(),
            ClientRoomEventType::MessagesAppended {
                message_ids: vec![message_id],
            },
        );

        // Sending clears our typing indicator on every peer immediately
        // instead of waiting out the auto-clear interval.
        self.data.cancel_typing_auto_clear();
        let stopped = TypingSignal::stopped(&identity);
        if let Err(err) = self
            .messaging_service
            .set_compose_state(&self.data.room_id, &stopped)
            .await
        {
            warn!("Could not clear typing indicator: {}", err);
        }

        self.messaging_service
            .send_message(&self.data.room_id, &message)
            .await
    }

    /// Reports the current draft. Peers see a typing indicator right away; a
    /// single auto-clear timer takes it down again after the configured
    /// inactivity interval. Every call cancels and restarts that timer, so
    /// exactly one "stopped typing" signal fires per pause.
    pub async fn update_draft(&self, draft: &str) -> Result<()> {
        let identity = self.active_identity().await?;

        self.data.cancel_typing_auto_clear();

        let signal = TypingSignal::composing(&identity, draft);
        self.messaging_service
            .set_compose_state(&self.data.room_id, &signal)
            .await?;

        if signal.is_stopped() {
            return Ok(());
        }

        let messaging_service = self.messaging_service.clone();
        let room_id = self.data.room_id.clone();
        let stopped = TypingSignal::stopped(&identity);
        let delay = self.ctx.config.typing_auto_clear;

        // The timer task captures only what it needs to emit the clear
        // signal, never the room internals, so leaving the room is not kept
        // alive by a pending timer.
        self.data.set_typing_auto_clear(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(err) = messaging_service.set_compose_state(&room_id, &stopped).await {
                warn!("Could not auto-clear typing indicator: {}", err);
            }
        }));

        Ok(())
    }

    async fn active_identity(&self) -> Result<Identity> {
        self.identity_repo
            .get()
            .await?
            .context("No active identity. Sign in or join as a guest first.")
    }
}
