// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use active_chat_realtime::{mods, Client as RealtimeClient};

use crate::domain::messaging::models::{ChatMessage, TypingSignal};
use crate::domain::messaging::services::MessagingService;
use crate::domain::shared::models::RoomId;

pub struct RealtimeMessagingService {
    client: RealtimeClient,
}

impl RealtimeMessagingService {
    pub fn new(client: RealtimeClient) -> Self {
        RealtimeMessagingService { client }
    }
}

#[async_trait]
impl MessagingService for RealtimeMessagingService {
    async fn send_message(&self, room_id: &RoomId, message: &ChatMessage) -> Result<()> {
        let chat = self.client.get_mod::<mods::Chat>();
        chat.send_message(room_id.channel_id(), message.into())
    }

    async fn set_compose_state(&self, room_id: &RoomId, signal: &TypingSignal) -> Result<()> {
        let chat = self.client.get_mod::<mods::Chat>();
        chat.send_compose_state(room_id.channel_id(), signal.into())
    }
}
