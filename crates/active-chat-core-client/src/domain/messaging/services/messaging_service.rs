// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::messaging::models::{ChatMessage, TypingSignal};
use crate::domain::shared::models::RoomId;

/// Outbound messaging over the relay. Sends are fire-and-forget: a failure
/// is reported to the caller but nothing is retried.
#[async_trait]
pub trait MessagingService: Send + Sync {
    async fn send_message(&self, room_id: &RoomId, message: &ChatMessage) -> Result<()>;

    async fn set_compose_state(&self, room_id: &RoomId, signal: &TypingSignal) -> Result<()>;
}
